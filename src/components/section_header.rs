use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub pending: bool,
    pub on_refresh: Callback<()>,
}

/// Section title with a per-resource refresh button. The button only
/// disables while its own resource is in flight.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <div class="section-header">
            <h2>{&props.title}</h2>
            <button
                class="refresh-button"
                {onclick}
                disabled={props.pending}
                aria-label={format!("Refresh {}", props.title)}
                title="Refresh"
            >
                { if props.pending { "…" } else { "⟳" } }
            </button>
        </div>
    }
}
