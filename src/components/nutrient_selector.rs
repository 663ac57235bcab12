use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::nutrition::Nutrient;

#[derive(Properties, PartialEq)]
pub struct NutrientSelectorProps {
    pub nutrient: Nutrient,
    pub on_change: Callback<Nutrient>,
}

/// Nutrient selector dropdown driving the top-recipes ranking
#[function_component(NutrientSelector)]
pub fn nutrient_selector(props: &NutrientSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(nutrient) = target.value().parse::<Nutrient>() {
                callback.emit(nutrient);
            }
        })
    };

    html! {
        <select
            class="nutrient-selector"
            onchange={on_change}
            aria-label="Select ranking nutrient"
            title="Select ranking nutrient"
        >
            {
                Nutrient::all().iter().map(|n| {
                    let selected = *n == props.nutrient;
                    html! {
                        <option value={n.as_str()} {selected}>{n.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
