use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Color theme for the dashboard and its charts
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Custom hook for theme management. The stored preference wins; first-time
/// visitors get the system's preferred color scheme.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or_else(detect_system_preference));

    // Effect: apply theme to DOM and persist on change
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            apply_theme_to_dom(*theme);
            save_theme_preference(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let new_theme = match *theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            };
            theme.set(new_theme);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

/// Detect the system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Apply theme by setting the data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let theme_str = match theme {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        let _ = html.set_attribute("data-theme", theme_str);
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get("theme").ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set("theme", theme) {
        gloo::console::warn!(format!("Failed to save theme: {e:?}"));
    }
}
