use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::nutrition::MacronutrientAverages;
use crate::services::api::fetch_macronutrients;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
pub struct MacronutrientsHandle {
    pub state: DataState<MacronutrientAverages>,
    pub pending: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_macronutrients() -> MacronutrientsHandle {
    let state = use_state(|| DataState::Idle);
    let pending = use_state(|| false);
    let trigger = use_state(|| 0u32); // Manual refresh trigger

    {
        let state = state.clone();
        let pending = pending.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            // Prior data stays on screen during a refresh; only the first
            // load passes through Loading.
            let prior = state.data().cloned();
            if prior.is_none() {
                state.set(DataState::Loading);
            }
            pending.set(true);

            spawn_local(async move {
                match fetch_macronutrients().await {
                    Ok(averages) => state.set(DataState::Loaded(Rc::new(averages))),
                    Err(e) => {
                        gloo::console::warn!(format!("Macronutrients fetch failed: {e}"));
                        match prior {
                            Some(prior) => state.set(DataState::Loaded(prior)),
                            None => state.set(DataState::Error(e.to_string())),
                        }
                    }
                }
                pending.set(false);
            });

            || () // Cleanup
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    MacronutrientsHandle {
        state: (*state).clone(),
        pending: *pending,
        refresh,
    }
}
