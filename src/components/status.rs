use yew::prelude::*;

use crate::hooks::DataState;
use crate::hooks::use_overview::use_health;

/// API health badge shown in the page header
#[function_component(Status)]
pub fn status() -> Html {
    let state = use_health();

    match &state {
        DataState::Idle | DataState::Loading => html! {
            <div class="status checking" title="Probing the diet processor API">
                <span class="status-dot"></span>
                <span>{"Checking API…"}</span>
            </div>
        },
        DataState::Loaded(health) if health.is_healthy() => html! {
            <div class="status success" title={health.message.clone()}>
                <span class="status-dot"></span>
                <span>{"API online"}</span>
            </div>
        },
        DataState::Loaded(health) => html! {
            <div class="status warning" title={health.message.clone()}>
                <span class="status-dot"></span>
                <span>{format!("API degraded: {}", health.status)}</span>
            </div>
        },
        DataState::Error(message) => html! {
            <div class="status error" title={message.clone()}>
                <span class="status-dot"></span>
                <span>{"API unreachable"}</span>
            </div>
        },
    }
}
