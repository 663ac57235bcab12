//! Persisted user-controlled query parameters: the nutrient the top-recipes
//! ranking is based on, and how many recipes to request.

use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::nutrition::Nutrient;

const NUTRIENT_KEY: &str = "nutrient";
const RECIPE_COUNT_KEY: &str = "recipe_count";

/// Handle returned by `use_nutrient` hook
#[derive(Clone, PartialEq)]
pub struct NutrientHandle {
    pub nutrient: Nutrient,
    pub set_nutrient: Callback<Nutrient>,
}

/// Custom hook for the nutrient selector with localStorage persistence
#[hook]
pub fn use_nutrient() -> NutrientHandle {
    let nutrient = use_state(|| load_nutrient_preference().unwrap_or_default());

    {
        let nutrient_value = *nutrient;
        use_effect_with(nutrient_value, move |nutrient| {
            save_preference(NUTRIENT_KEY, *nutrient);
            || ()
        });
    }

    let set_nutrient = {
        let nutrient = nutrient.clone();
        Callback::from(move |new_nutrient| nutrient.set(new_nutrient))
    };

    NutrientHandle {
        nutrient: *nutrient,
        set_nutrient,
    }
}

/// Handle returned by `use_recipe_count` hook
#[derive(Clone, PartialEq)]
pub struct RecipeCountHandle {
    pub count: u32,
    pub set_count: Callback<u32>,
}

/// Custom hook for the requested recipe count with localStorage persistence.
/// Whatever is stored or set is snapped onto the selectable grid.
#[hook]
pub fn use_recipe_count() -> RecipeCountHandle {
    let count = use_state(|| {
        load_count_preference()
            .map(Config::snap_recipe_count)
            .unwrap_or(Config::DEFAULT_RECIPE_COUNT)
    });

    {
        let count_value = *count;
        use_effect_with(count_value, move |count| {
            save_preference(RECIPE_COUNT_KEY, *count);
            || ()
        });
    }

    let set_count = {
        let count = count.clone();
        Callback::from(move |new_count| count.set(Config::snap_recipe_count(new_count)))
    };

    RecipeCountHandle {
        count: *count,
        set_count,
    }
}

fn load_nutrient_preference() -> Option<Nutrient> {
    gloo_storage::LocalStorage::get(NUTRIENT_KEY).ok()
}

fn load_count_preference() -> Option<u32> {
    gloo_storage::LocalStorage::get(RECIPE_COUNT_KEY).ok()
}

fn save_preference<T: serde::Serialize>(key: &str, value: T) {
    if let Err(e) = gloo_storage::LocalStorage::set(key, value) {
        gloo::console::warn!(format!("Failed to save {key}: {e:?}"));
    }
}
