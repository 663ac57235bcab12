#[cfg(test)]
mod tests {
    use diet_dashboard::hooks::DataState;
    use diet_dashboard::models::{
        error::AppError,
        nutrition::{
            ComparisonPoint, CuisineCounts, CuisineDistribution, DietComparison, DietSummary,
            MacroBreakdown, MacronutrientAverages, Nutrient, NutrientRanges, Recipe, TopRecipes,
        },
    };
    use std::rc::Rc;

    // Helper function to create test macronutrient averages
    fn create_test_averages() -> MacronutrientAverages {
        MacronutrientAverages::new(vec![
            (
                "Keto".to_string(),
                MacroBreakdown {
                    protein: Some(80.0),
                    carbs: Some(20.0),
                    fat: Some(150.0),
                },
            ),
            (
                "Vegan".to_string(),
                MacroBreakdown {
                    protein: Some(30.0),
                    carbs: Some(90.0),
                    fat: Some(25.0),
                },
            ),
            (
                "Paleo".to_string(),
                MacroBreakdown {
                    protein: Some(60.0),
                    carbs: Some(40.0),
                    fat: Some(70.0),
                },
            ),
        ])
    }

    // Helper function to create test recipes in server order
    fn create_test_recipes() -> TopRecipes {
        TopRecipes::new(vec![
            Recipe {
                recipe_name: "Grilled Chicken".to_string(),
                nutrient_value: 52.3,
                diet_type: "Paleo".to_string(),
                cuisine_type: "American".to_string(),
            },
            Recipe {
                recipe_name: "Tofu Stir Fry".to_string(),
                nutrient_value: 31.5,
                diet_type: "Vegan".to_string(),
                cuisine_type: "Chinese".to_string(),
            },
            Recipe {
                recipe_name: "Lentil Curry".to_string(),
                nutrient_value: 24.8,
                diet_type: "Vegan".to_string(),
                cuisine_type: "Indian".to_string(),
            },
        ])
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== Nutrient Tests =====

    #[test]
    fn test_nutrient_round_trip() {
        for nutrient in Nutrient::all() {
            let parsed: Nutrient = nutrient.as_str().parse().unwrap();
            assert_eq!(parsed, *nutrient);
        }
    }

    #[test]
    fn test_nutrient_rejects_unknown() {
        assert!("Sodium".parse::<Nutrient>().is_err());
        assert!("".parse::<Nutrient>().is_err());
    }

    #[test]
    fn test_nutrient_labels_include_unit() {
        assert_eq!(Nutrient::Protein.label(), "Protein (g)");
        assert_eq!(Nutrient::all().len(), 3);
    }

    // ===== Macronutrient Transformation Tests =====

    #[test]
    fn test_macro_rows_one_per_diet_type() {
        let averages = create_test_averages();
        let rows = averages.rows();

        assert_eq!(rows.len(), averages.len());
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_macro_rows_preserve_entry_order() {
        let rows = create_test_averages().rows();
        let order: Vec<&str> = rows.iter().map(|r| r.diet_type.as_str()).collect();
        assert_eq!(order, vec!["Keto", "Vegan", "Paleo"]);
    }

    #[test]
    fn test_macro_rows_absent_nutrient_defaults_to_zero() {
        // Carbs absent for Keto
        let averages = MacronutrientAverages::new(vec![(
            "Keto".to_string(),
            MacroBreakdown {
                protein: Some(80.0),
                carbs: None,
                fat: Some(150.0),
            },
        )]);

        let rows = averages.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].diet_type, "Keto");
        assert_eq!(rows[0].protein, 80.0);
        assert_eq!(rows[0].carbs, 0.0);
        assert_eq!(rows[0].fat, 150.0);
    }

    #[test]
    fn test_macro_rows_idempotent() {
        let averages = create_test_averages();
        assert_eq!(averages.rows(), averages.rows());
    }

    #[test]
    fn test_macro_rows_from_json_key_order() {
        let json = r#"{
            "Mediterranean": {"Protein": 40.0, "Carbs": 55.0, "Fat": 35.0},
            "DASH": {"Protein": 35.0, "Carbs": 60.0, "Fat": 30.0}
        }"#;

        let averages: MacronutrientAverages = serde_json::from_str(json).unwrap();
        let rows = averages.rows();
        assert_eq!(rows[0].diet_type, "Mediterranean");
        assert_eq!(rows[1].diet_type, "DASH");
    }

    // ===== Cuisine Distribution Tests =====

    #[test]
    fn test_top_cuisines_merges_across_diet_types() {
        let distribution = CuisineDistribution::new(vec![
            (
                "Keto".to_string(),
                CuisineCounts::new(vec![("Italian".to_string(), 3)]),
            ),
            (
                "Vegan".to_string(),
                CuisineCounts::new(vec![
                    ("Italian".to_string(), 2),
                    ("Thai".to_string(), 5),
                ]),
            ),
        ]);

        let top = distribution.top_cuisines(6);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].cuisine, "Italian");
        assert_eq!(top[0].count, 5);
        assert_eq!(top[1].cuisine, "Thai");
        assert_eq!(top[1].count, 5);
    }

    #[test]
    fn test_top_cuisines_ties_keep_first_seen_order() {
        // Italian is seen first, so it stays ahead of Thai at equal counts
        let distribution = CuisineDistribution::new(vec![(
            "Vegan".to_string(),
            CuisineCounts::new(vec![("Italian".to_string(), 5), ("Thai".to_string(), 5)]),
        )]);

        let top = distribution.top_cuisines(6);
        assert_eq!(top[0].cuisine, "Italian");
        assert_eq!(top[1].cuisine, "Thai");
    }

    #[test]
    fn test_top_cuisines_sorted_non_increasing_and_limited() {
        let counts: Vec<(String, u32)> = (0..10)
            .map(|i| (format!("cuisine-{i}"), i * 3 + 1))
            .collect();
        let distribution =
            CuisineDistribution::new(vec![("Keto".to_string(), CuisineCounts::new(counts))]);

        let top = distribution.top_cuisines(6);
        assert_eq!(top.len(), 6);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_cuisines_total_preserved_by_merge() {
        let distribution = CuisineDistribution::new(vec![
            (
                "Keto".to_string(),
                CuisineCounts::new(vec![("Italian".to_string(), 3), ("Thai".to_string(), 1)]),
            ),
            (
                "Vegan".to_string(),
                CuisineCounts::new(vec![("Italian".to_string(), 2)]),
            ),
        ]);

        let merged_total: u32 = distribution.top_cuisines(6).iter().map(|t| t.count).sum();
        assert_eq!(merged_total, 6);
    }

    #[test]
    fn test_top_cuisines_idempotent() {
        let distribution = CuisineDistribution::new(vec![(
            "Keto".to_string(),
            CuisineCounts::new(vec![("Italian".to_string(), 3), ("Thai".to_string(), 1)]),
        )]);

        assert_eq!(distribution.top_cuisines(6), distribution.top_cuisines(6));
    }

    #[test]
    fn test_top_cuisines_empty_distribution() {
        let distribution = CuisineDistribution::default();
        assert!(distribution.top_cuisines(6).is_empty());
    }

    // ===== Top Recipes Tests =====

    #[test]
    fn test_ranked_positions_are_one_based() {
        let ranked = create_test_recipes().ranked();
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ranked_never_reorders() {
        // Values deliberately unsorted: the server's ordering is trusted
        let recipes = TopRecipes::new(vec![
            Recipe {
                recipe_name: "A".to_string(),
                nutrient_value: 10.0,
                ..Recipe::default()
            },
            Recipe {
                recipe_name: "B".to_string(),
                nutrient_value: 99.0,
                ..Recipe::default()
            },
        ]);

        let ranked = recipes.ranked();
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].name, "B");
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_ranked_five_recipes_scenario() {
        let recipes = TopRecipes::new(
            (0..5)
                .map(|i| Recipe {
                    recipe_name: format!("recipe-{i}"),
                    nutrient_value: 50.0 - i as f64,
                    ..Recipe::default()
                })
                .collect(),
        );

        let ranks: Vec<usize> = recipes.ranked().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ranked_idempotent() {
        let recipes = create_test_recipes();
        assert_eq!(recipes.ranked(), recipes.ranked());
    }

    #[test]
    fn test_find_by_rank() {
        let recipes = create_test_recipes();

        let second = recipes.find_by_rank(2).unwrap();
        assert_eq!(second.name, "Tofu Stir Fry");
        assert!(recipes.find_by_rank(0).is_none());
        assert!(recipes.find_by_rank(4).is_none());
    }

    #[test]
    fn test_ranked_recipe_label() {
        let recipes = create_test_recipes();
        let label = recipes.find_by_rank(1).unwrap().label();
        assert!(label.contains("#1"));
        assert!(label.contains("Grilled Chicken"));
        assert!(label.contains("52.3"));
    }

    #[test]
    fn test_recipe_missing_fields_default() {
        let json = r#"[{"recipe_name": "Mystery Bowl"}]"#;
        let recipes: TopRecipes = serde_json::from_str(json).unwrap();

        let ranked = recipes.ranked();
        assert_eq!(ranked[0].value, 0.0);
        assert_eq!(ranked[0].diet_type, "");
    }

    // ===== Comparison Tests =====

    #[test]
    fn test_comparison_points_used_as_received() {
        let json = r#"[
            {"diet_type": "Keto", "protein": 80.0, "carbs": 20.0, "fat": 150.0, "total_recipes": 12},
            {"diet_type": "Vegan", "protein": 30.0, "carbs": 90.0, "fat": 25.0, "total_recipes": 30}
        ]"#;

        let comparison: DietComparison = serde_json::from_str(json).unwrap();
        assert_eq!(comparison.points().len(), 2);
        assert_eq!(comparison.points()[0].diet_type, "Keto");
        assert_eq!(comparison.points()[1].total_recipes, 30);
    }

    #[test]
    fn test_comparison_missing_fields_default_to_zero() {
        let json = r#"[{"diet_type": "Keto", "protein": 80.0}]"#;
        let comparison: DietComparison = serde_json::from_str(json).unwrap();

        let point = &comparison.points()[0];
        assert_eq!(point.carbs, 0.0);
        assert_eq!(point.fat, 0.0);
    }

    #[test]
    fn test_comparison_scatter_projection() {
        let comparison = DietComparison::new(vec![ComparisonPoint {
            diet_type: "Keto".to_string(),
            protein: 80.0,
            carbs: 20.0,
            fat: 150.0,
            total_recipes: 12,
        }]);

        assert_eq!(
            comparison.scatter_points(Nutrient::Protein, Nutrient::Carbs),
            vec![(80.0, 20.0)]
        );
        assert_eq!(
            comparison.scatter_points(Nutrient::Fat, Nutrient::Protein),
            vec![(150.0, 80.0)]
        );
    }

    // ===== Summary & Ranges Tests =====

    #[test]
    fn test_summary_parsing() {
        let json = r#"{
            "total_recipes": 7806,
            "total_diet_types": 5,
            "total_cuisine_types": 13,
            "diet_types": ["Keto", "Vegan", "Paleo", "Mediterranean", "DASH"],
            "most_common_diet": "Vegan",
            "most_common_cuisine": "American"
        }"#;

        let summary: DietSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_recipes, 7806);
        assert_eq!(summary.diet_types.len(), 5);
        assert_eq!(summary.most_common_cuisine, "American");
    }

    #[test]
    fn test_nutrient_ranges_lookup() {
        let json = r#"{
            "Protein": {"min": 0.0, "max": 120.5, "average": 32.1, "median": 28.7},
            "Fat": {"min": 0.2, "max": 210.0, "average": 45.9, "median": 40.0}
        }"#;

        let ranges: NutrientRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.for_nutrient(Nutrient::Protein).unwrap().max, 120.5);
        assert_eq!(ranges.for_nutrient(Nutrient::Fat).unwrap().median, 40.0);
        assert!(ranges.for_nutrient(Nutrient::Carbs).is_none());
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let averages = Rc::new(create_test_averages());
        let loaded = DataState::Loaded(averages.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &averages);

        let loading: DataState<MacronutrientAverages> = DataState::Loading;
        assert!(loading.data().is_none());
        assert!(loading.is_loading());

        let error: DataState<MacronutrientAverages> = DataState::Error("boom".to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some("boom"));
    }

    #[test]
    fn test_data_state_equality() {
        let state1: DataState<TopRecipes> = DataState::Idle;
        let state2: DataState<TopRecipes> = DataState::Idle;
        assert_eq!(state1, state2);

        let recipes1 = Rc::new(create_test_recipes());
        let recipes2 = Rc::new(create_test_recipes());
        assert_eq!(DataState::Loaded(recipes1), DataState::Loaded(recipes2));
    }
}
