use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct CountSelectorProps {
    pub count: u32,
    pub on_change: Callback<u32>,
}

/// Recipe count dropdown: multiples of 5 from 5 to 50
#[function_component(CountSelector)]
pub fn count_selector(props: &CountSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(count) = target.value().parse::<u32>() {
                callback.emit(count);
            }
        })
    };

    html! {
        <select
            class="count-selector"
            onchange={on_change}
            aria-label="Select number of recipes"
            title="Select number of recipes"
        >
            {
                Config::recipe_count_choices().map(|choice| {
                    let selected = choice == props.count;
                    html! {
                        <option value={choice.to_string()} {selected}>
                            {format!("Top {choice}")}
                        </option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
