use crate::models::nutrition::{Nutrient, NutrientRanges};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RangesGridProps {
    pub ranges: Rc<NutrientRanges>,
}

/// Min/max/average/median card per nutrient
#[function_component(RangesGrid)]
pub fn ranges_grid(props: &RangesGridProps) -> Html {
    html! {
        <div class="ranges-grid">
            {
                Nutrient::all().iter().map(|nutrient| {
                    match props.ranges.for_nutrient(*nutrient) {
                        Some(range) => html! {
                            <div class="range-card">
                                <h3>{nutrient.label()}</h3>
                                <dl class="range-stats">
                                    <dt>{"Min"}</dt>
                                    <dd>{format!("{:.1}", range.min)}</dd>
                                    <dt>{"Max"}</dt>
                                    <dd>{format!("{:.1}", range.max)}</dd>
                                    <dt>{"Average"}</dt>
                                    <dd>{format!("{:.1}", range.average)}</dd>
                                    <dt>{"Median"}</dt>
                                    <dd>{format!("{:.1}", range.median)}</dd>
                                </dl>
                            </div>
                        },
                        None => html! {
                            <div class="range-card empty">
                                <h3>{nutrient.label()}</h3>
                                <p>{"No data"}</p>
                            </div>
                        },
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
