use yew::prelude::*;

use crate::components::comparison_chart::ComparisonChart;
use crate::components::count_selector::CountSelector;
use crate::components::cuisine_chart::CuisineChart;
use crate::components::macro_chart::MacroChart;
use crate::components::nutrient_selector::NutrientSelector;
use crate::components::ranges_grid::RangesGrid;
use crate::components::recipe_table::RecipeTable;
use crate::components::summary_cards::SummaryCards;
use crate::components::{SectionHeader, Status, ThemeToggle};
use crate::hooks::use_comparison::use_comparison;
use crate::hooks::use_cuisine_distribution::use_cuisine_distribution;
use crate::hooks::use_macronutrients::use_macronutrients;
use crate::hooks::use_overview::{use_nutrient_ranges, use_summary};
use crate::hooks::use_preferences::{use_nutrient, use_recipe_count};
use crate::hooks::use_theme::use_theme;
use crate::hooks::use_top_recipes::use_top_recipes;

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme();
    let dark_mode = theme.theme.is_dark();

    // User-controlled query parameters; changing either refetches only the
    // top-recipes resource.
    let nutrient = use_nutrient();
    let recipe_count = use_recipe_count();

    let macros = use_macronutrients();
    let cuisines = use_cuisine_distribution();
    let comparison = use_comparison();
    let top_recipes = use_top_recipes(nutrient.nutrient, recipe_count.count);
    let summary = use_summary();
    let ranges = use_nutrient_ranges();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Diet Insights Dashboard"}</h1>
                <div class="header-controls">
                    <Status />
                    <ThemeToggle theme={theme.theme} on_toggle={theme.toggle.clone()} />
                </div>
            </header>

            <main class="app-main">
                <section class="summary-section">
                    <SectionHeader
                        title="Dataset Overview"
                        pending={summary.pending}
                        on_refresh={summary.refresh.clone()}
                    />
                    if let Some(data) = summary.state.data() {
                        <SummaryCards summary={data.clone()} />
                    } else if let Some(message) = summary.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>

                <section class="chart-section">
                    <SectionHeader
                        title="Macronutrients"
                        pending={macros.pending}
                        on_refresh={macros.refresh.clone()}
                    />
                    if let Some(data) = macros.state.data() {
                        <MacroChart averages={data.clone()} {dark_mode} />
                    } else if let Some(message) = macros.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>

                <section class="chart-section">
                    <SectionHeader
                        title="Cuisines"
                        pending={cuisines.pending}
                        on_refresh={cuisines.refresh.clone()}
                    />
                    if let Some(data) = cuisines.state.data() {
                        <CuisineChart distribution={data.clone()} {dark_mode} />
                    } else if let Some(message) = cuisines.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>

                <section class="chart-section">
                    <SectionHeader
                        title="Diet Comparison"
                        pending={comparison.pending}
                        on_refresh={comparison.refresh.clone()}
                    />
                    if let Some(data) = comparison.state.data() {
                        <ComparisonChart comparison={data.clone()} {dark_mode} />
                    } else if let Some(message) = comparison.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>

                <section class="recipes-section">
                    <SectionHeader
                        title="Top Recipes"
                        pending={top_recipes.pending}
                        on_refresh={top_recipes.refresh.clone()}
                    />
                    <div class="recipe-controls">
                        <NutrientSelector
                            nutrient={nutrient.nutrient}
                            on_change={nutrient.set_nutrient.clone()}
                        />
                        <CountSelector
                            count={recipe_count.count}
                            on_change={recipe_count.set_count.clone()}
                        />
                    </div>
                    if let Some(data) = top_recipes.state.data() {
                        <RecipeTable recipes={data.clone()} nutrient={nutrient.nutrient} />
                    } else if let Some(message) = top_recipes.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>

                <section class="ranges-section">
                    <SectionHeader
                        title="Nutrient Ranges"
                        pending={ranges.pending}
                        on_refresh={ranges.refresh.clone()}
                    />
                    if let Some(data) = ranges.state.data() {
                        <RangesGrid ranges={data.clone()} />
                    } else if let Some(message) = ranges.state.error() {
                        <p class="section-error">{message.to_string()}</p>
                    } else {
                        <div class="spinner"></div>
                    }
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
