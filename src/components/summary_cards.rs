use crate::models::nutrition::DietSummary;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Rc<DietSummary>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="summary-cards">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Recipes"}</h3>
                    <p class="summary-value">{summary.total_recipes}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Diet Types"}</h3>
                    <p class="summary-value">{summary.total_diet_types}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Cuisines"}</h3>
                    <p class="summary-value">{summary.total_cuisine_types}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Most Common Diet"}</h3>
                    <p class="summary-value">{&summary.most_common_diet}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Most Common Cuisine"}</h3>
                    <p class="summary-value">{&summary.most_common_cuisine}</p>
                </div>
            </div>
            if !summary.diet_types.is_empty() {
                <p class="summary-diets">
                    {"Diets covered: "}{summary.diet_types.join(", ")}
                </p>
            }
        </div>
    }
}
