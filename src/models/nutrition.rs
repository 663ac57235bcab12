use super::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Macronutrients tracked by the diet processor API.
/// Each variant corresponds to a per-recipe gram measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Nutrient {
    #[default]
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    /// Returns the name used as the `nutrient` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
        }
    }

    /// Returns a human-readable label including the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein (g)",
            Nutrient::Carbs => "Carbs (g)",
            Nutrient::Fat => "Fat (g)",
        }
    }

    /// All selectable nutrients.
    pub fn all() -> &'static [Nutrient] {
        &[Nutrient::Protein, Nutrient::Carbs, Nutrient::Fat]
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Nutrient {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(Nutrient::Protein),
            "carbs" => Ok(Nutrient::Carbs),
            "fat" => Ok(Nutrient::Fat),
            _ => Err(AppError::ConfigError(format!("Invalid nutrient: {s}"))),
        }
    }
}

/// Average gram values for one diet type, as returned by `/macronutrients`.
/// The API may omit any of the three fields; absent values read as `None`
/// and surface as 0 in the chart rows.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MacroBreakdown {
    #[serde(rename = "Protein")]
    pub protein: Option<f64>,
    #[serde(rename = "Carbs")]
    pub carbs: Option<f64>,
    #[serde(rename = "Fat")]
    pub fat: Option<f64>,
}

/// One chart-ready row of the macronutrient bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroRow {
    pub diet_type: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Per-diet macronutrient averages, keyed by diet type.
///
/// Entries keep the JSON object's own key order: the server decides how diet
/// types are ordered on the axis, not an alphabetical re-sort on our side.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MacronutrientAverages {
    entries: Vec<(String, MacroBreakdown)>,
}

impl<'de> Deserialize<'de> for MacronutrientAverages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AveragesVisitor;

        impl<'de> serde::de::Visitor<'de> for AveragesVisitor {
            type Value = MacronutrientAverages;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of diet type to macronutrient averages")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, MacroBreakdown>()? {
                    entries.push(entry);
                }
                Ok(MacronutrientAverages { entries })
            }
        }

        deserializer.deserialize_map(AveragesVisitor)
    }
}

impl MacronutrientAverages {
    pub fn new(entries: Vec<(String, MacroBreakdown)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emits one row per diet type, in entry order, with absent nutrient
    /// values defaulting to 0.
    pub fn rows(&self) -> Vec<MacroRow> {
        self.entries
            .iter()
            .map(|(diet_type, macros)| MacroRow {
                diet_type: diet_type.clone(),
                protein: macros.protein.unwrap_or(0.0),
                carbs: macros.carbs.unwrap_or(0.0),
                fat: macros.fat.unwrap_or(0.0),
            })
            .collect()
    }
}

/// Cuisine recipe counts for one diet type, in the server's key order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CuisineCounts(Vec<(String, u32)>);

impl<'de> Deserialize<'de> for CuisineCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> serde::de::Visitor<'de> for CountsVisitor {
            type Value = CuisineCounts;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of cuisine name to recipe count")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, u32>()? {
                    counts.push(entry);
                }
                Ok(CuisineCounts(counts))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

impl CuisineCounts {
    pub fn new(counts: Vec<(String, u32)>) -> Self {
        Self(counts)
    }
}

/// A cuisine with its recipe count summed across all diet types.
#[derive(Clone, Debug, PartialEq)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: u32,
}

/// Per-diet cuisine counts as returned by `/cuisine-distribution`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CuisineDistribution {
    entries: Vec<(String, CuisineCounts)>,
}

impl<'de> Deserialize<'de> for CuisineDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DistributionVisitor;

        impl<'de> serde::de::Visitor<'de> for DistributionVisitor {
            type Value = CuisineDistribution;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of diet type to cuisine counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, CuisineCounts>()? {
                    entries.push(entry);
                }
                Ok(CuisineDistribution { entries })
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

impl CuisineDistribution {
    pub fn new(entries: Vec<(String, CuisineCounts)>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the per-diet counts into one total per cuisine, summed across
    /// all diet types, sorted descending and truncated to `limit`.
    ///
    /// Accumulation keeps first-seen cuisine order and the sort is stable, so
    /// equal counts stay in first-seen order.
    pub fn top_cuisines(&self, limit: usize) -> Vec<CuisineCount> {
        let mut totals: Vec<CuisineCount> = Vec::new();

        for (_, counts) in &self.entries {
            for (cuisine, count) in &counts.0 {
                match totals.iter_mut().find(|t| t.cuisine == *cuisine) {
                    Some(total) => total.count += count,
                    None => totals.push(CuisineCount {
                        cuisine: cuisine.clone(),
                        count: *count,
                    }),
                }
            }
        }

        totals.sort_by(|a, b| b.count.cmp(&a.count));
        totals.truncate(limit);
        totals
    }
}

/// One diet type's averages in the `/comparison` response.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ComparisonPoint {
    pub diet_type: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub total_recipes: u32,
}

impl ComparisonPoint {
    pub fn value_of(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Diet comparison data, plotted as-is without reshaping.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct DietComparison {
    points: Vec<ComparisonPoint>,
}

impl DietComparison {
    pub fn new(points: Vec<ComparisonPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ComparisonPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Projects two nutrients into (x, y) pairs for the scatter chart.
    pub fn scatter_points(&self, x: Nutrient, y: Nutrient) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.value_of(x), p.value_of(y)))
            .collect()
    }
}

/// A single recipe in the `/top-recipes` response.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub recipe_name: String,
    pub nutrient_value: f64,
    pub diet_type: String,
    pub cuisine_type: String,
}

/// A recipe paired with its 1-based position in the server's ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedRecipe {
    pub rank: usize,
    pub name: String,
    pub value: f64,
    pub diet_type: String,
    pub cuisine: String,
}

impl RankedRecipe {
    /// Label used for row tooltips.
    pub fn label(&self) -> String {
        format!(
            "#{} {} — {:.1}g ({}, {})",
            self.rank, self.name, self.value, self.diet_type, self.cuisine
        )
    }
}

/// Server-ranked recipes. The ordering is the server's own; rank is derived
/// purely from position and the list is never re-sorted here.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct TopRecipes {
    recipes: Vec<Recipe>,
}

impl TopRecipes {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Emits recipes in received order with `rank = index + 1`.
    pub fn ranked(&self) -> Vec<RankedRecipe> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| RankedRecipe {
                rank: index + 1,
                name: recipe.recipe_name.clone(),
                value: recipe.nutrient_value,
                diet_type: recipe.diet_type.clone(),
                cuisine: recipe.cuisine_type.clone(),
            })
            .collect()
    }

    /// Linear-scan lookup of a recipe by its 1-based rank.
    pub fn find_by_rank(&self, rank: usize) -> Option<RankedRecipe> {
        self.ranked().into_iter().find(|r| r.rank == rank)
    }
}

/// Dataset overview from `/summary`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DietSummary {
    pub total_recipes: u32,
    pub total_diet_types: u32,
    pub total_cuisine_types: u32,
    pub diet_types: Vec<String>,
    pub most_common_diet: String,
    pub most_common_cuisine: String,
}

/// Value spread for one nutrient from `/nutrient-ranges`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub median: f64,
}

/// Nutrient ranges keyed by nutrient name. Rendered by looking each
/// `Nutrient` up, so map ordering does not matter here.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct NutrientRanges {
    ranges: HashMap<String, NutrientRange>,
}

impl NutrientRanges {
    pub fn new(ranges: HashMap<String, NutrientRange>) -> Self {
        Self { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn for_nutrient(&self, nutrient: Nutrient) -> Option<&NutrientRange> {
        self.ranges.get(nutrient.as_str())
    }
}

/// Response of the `/health` probe.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
