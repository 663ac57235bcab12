//! Hooks for the overview section: dataset summary, nutrient ranges, and the
//! API health probe.

use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::nutrition::{DietSummary, HealthStatus, NutrientRanges};
use crate::services::api::{fetch_health, fetch_nutrient_ranges, fetch_summary};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
pub struct SummaryHandle {
    pub state: DataState<DietSummary>,
    pub pending: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_summary() -> SummaryHandle {
    let state = use_state(|| DataState::Idle);
    let pending = use_state(|| false);
    let trigger = use_state(|| 0u32);

    {
        let state = state.clone();
        let pending = pending.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let prior = state.data().cloned();
            if prior.is_none() {
                state.set(DataState::Loading);
            }
            pending.set(true);

            spawn_local(async move {
                match fetch_summary().await {
                    Ok(summary) => state.set(DataState::Loaded(Rc::new(summary))),
                    Err(e) => {
                        gloo::console::warn!(format!("Summary fetch failed: {e}"));
                        match prior {
                            Some(prior) => state.set(DataState::Loaded(prior)),
                            None => state.set(DataState::Error(e.to_string())),
                        }
                    }
                }
                pending.set(false);
            });

            || ()
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    SummaryHandle {
        state: (*state).clone(),
        pending: *pending,
        refresh,
    }
}

#[derive(Clone, PartialEq)]
pub struct NutrientRangesHandle {
    pub state: DataState<NutrientRanges>,
    pub pending: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_nutrient_ranges() -> NutrientRangesHandle {
    let state = use_state(|| DataState::Idle);
    let pending = use_state(|| false);
    let trigger = use_state(|| 0u32);

    {
        let state = state.clone();
        let pending = pending.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let prior = state.data().cloned();
            if prior.is_none() {
                state.set(DataState::Loading);
            }
            pending.set(true);

            spawn_local(async move {
                match fetch_nutrient_ranges().await {
                    Ok(ranges) => state.set(DataState::Loaded(Rc::new(ranges))),
                    Err(e) => {
                        gloo::console::warn!(format!("Nutrient ranges fetch failed: {e}"));
                        match prior {
                            Some(prior) => state.set(DataState::Loaded(prior)),
                            None => state.set(DataState::Error(e.to_string())),
                        }
                    }
                }
                pending.set(false);
            });

            || ()
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    NutrientRangesHandle {
        state: (*state).clone(),
        pending: *pending,
        refresh,
    }
}

/// Health is probed once per page load. A failed probe is worth showing as
/// such, so there is no prior-data fallback here.
#[hook]
pub fn use_health() -> DataState<HealthStatus> {
    let state = use_state(|| DataState::Idle);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_health().await {
                    Ok(health) => state.set(DataState::Loaded(Rc::new(health))),
                    Err(e) => {
                        gloo::console::warn!(format!("Health probe failed: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    (*state).clone()
}
