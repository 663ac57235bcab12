use crate::models::nutrition::{Nutrient, TopRecipes};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecipeTableProps {
    pub recipes: Rc<TopRecipes>,
    pub nutrient: Nutrient,
}

/// Ranked recipe list. Rank is the 1-based position in the server's own
/// ordering; the table renders the sequence exactly as received.
#[function_component(RecipeTable)]
pub fn recipe_table(props: &RecipeTableProps) -> Html {
    let ranked = use_memo(props.recipes.clone(), |recipes| recipes.ranked());
    let top_pick = props.recipes.find_by_rank(1);

    if ranked.is_empty() {
        return html! {
            <p class="recipes-empty">{"No recipes returned for this selection."}</p>
        };
    }

    html! {
        <div class="recipe-table-wrap">
            if let Some(best) = top_pick {
                <p class="top-pick">{"Top pick: "}{best.label()}</p>
            }
            <table class="recipe-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Recipe"}</th>
                        <th>{props.nutrient.label()}</th>
                        <th>{"Diet"}</th>
                        <th>{"Cuisine"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        ranked.iter().map(|recipe| html! {
                            <tr key={recipe.rank} title={recipe.label()}>
                                <td class="rank-cell">{recipe.rank}</td>
                                <td>{&recipe.name}</td>
                                <td class="value-cell">{format!("{:.1}", recipe.value)}</td>
                                <td>{&recipe.diet_type}</td>
                                <td>{&recipe.cuisine}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
