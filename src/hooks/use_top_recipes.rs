use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::DataState;
use crate::models::nutrition::{Nutrient, TopRecipes};
use crate::services::api::fetch_top_recipes;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
pub struct TopRecipesHandle {
    pub state: DataState<TopRecipes>,
    pub pending: bool,
    pub refresh: Callback<()>,
}

/// Fetches the server-ranked top recipes for `nutrient`, refetching when
/// either parameter changes. Superseded requests are discarded through the
/// effect's cleanup flag, so a slow stale response can never overwrite the
/// result of a newer request.
#[hook]
pub fn use_top_recipes(nutrient: Nutrient, count: u32) -> TopRecipesHandle {
    let state = use_state(|| DataState::Idle);
    let pending = use_state(|| false);
    let trigger = use_state(|| 0u32); // Manual refresh trigger

    {
        let state = state.clone();
        let pending = pending.clone();
        let trigger_value = *trigger;

        use_effect_with(
            (trigger_value, nutrient, count),
            move |(_, nutrient, count)| {
                let nutrient = *nutrient;
                let count = *count;
                let aborted = Rc::new(Cell::new(false));
                let aborted_check = aborted.clone();

                let prior = state.data().cloned();
                if prior.is_none() {
                    state.set(DataState::Loading);
                }
                pending.set(true);

                spawn_local(async move {
                    let result = fetch_top_recipes(nutrient, count).await;
                    if aborted_check.get() {
                        return; // A newer request owns the state slot now
                    }

                    match result {
                        Ok(recipes) => state.set(DataState::Loaded(Rc::new(recipes))),
                        Err(e) => {
                            gloo::console::warn!(format!("Top recipes fetch failed: {e}"));
                            match prior {
                                Some(prior) => state.set(DataState::Loaded(prior)),
                                None => state.set(DataState::Error(e.to_string())),
                            }
                        }
                    }
                    pending.set(false);
                });

                move || {
                    aborted.set(true);
                }
            },
        );
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    TopRecipesHandle {
        state: (*state).clone(),
        pending: *pending,
        refresh,
    }
}
