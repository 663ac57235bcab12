use crate::models::{
    error::AppError,
    nutrition::{
        CuisineDistribution, DietComparison, DietSummary, HealthStatus, MacronutrientAverages,
        Nutrient, NutrientRanges, TopRecipes,
    },
};
use serde::de::DeserializeOwned;

// CONSTANTS
const BASE_URL: &str = "http://127.0.0.1:7071/api";
const PROCESSOR_PATH: &str = "diet-processor";

// API CONFIGURATION
/// Configuration for the diet processor API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the URL for the macronutrient averages resource.
    pub fn macronutrients_url(&self) -> String {
        self.operation_url("macronutrients")
    }

    /// Constructs the URL for the cuisine distribution resource.
    pub fn cuisine_distribution_url(&self) -> String {
        self.operation_url("cuisine-distribution")
    }

    /// Constructs the URL for the diet comparison resource.
    pub fn comparison_url(&self) -> String {
        self.operation_url("comparison")
    }

    /// Constructs the URL for the top-recipes resource. The nutrient and the
    /// requested count are echoed as query parameters.
    pub fn top_recipes_url(&self, nutrient: Nutrient, count: u32) -> String {
        format!(
            "{}?nutrient={}&n={}",
            self.operation_url("top-recipes"),
            nutrient.as_str(),
            count
        )
    }

    /// Constructs the URL for the dataset summary resource.
    pub fn summary_url(&self) -> String {
        self.operation_url("summary")
    }

    /// Constructs the URL for the nutrient ranges resource.
    pub fn nutrient_ranges_url(&self) -> String {
        self.operation_url("nutrient-ranges")
    }

    /// Constructs the URL for the health probe.
    pub fn health_url(&self) -> String {
        self.operation_url("health")
    }

    fn operation_url(&self, operation: &str) -> String {
        format!("{}/{PROCESSOR_PATH}/{operation}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// DIET PROCESSOR CLIENT
/// HTTP client for the diet processor API.
pub struct DietApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DietApiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches average macronutrients per diet type.
    pub async fn fetch_macronutrients(&self) -> Result<MacronutrientAverages, AppError> {
        self.fetch(&self.config.macronutrients_url()).await
    }

    /// Fetches per-diet cuisine recipe counts.
    pub async fn fetch_cuisine_distribution(&self) -> Result<CuisineDistribution, AppError> {
        self.fetch(&self.config.cuisine_distribution_url()).await
    }

    /// Fetches the diet comparison points.
    pub async fn fetch_comparison(&self) -> Result<DietComparison, AppError> {
        self.fetch(&self.config.comparison_url()).await
    }

    /// Fetches the server-ranked top recipes for a nutrient.
    pub async fn fetch_top_recipes(
        &self,
        nutrient: Nutrient,
        count: u32,
    ) -> Result<TopRecipes, AppError> {
        self.fetch(&self.config.top_recipes_url(nutrient, count))
            .await
    }

    /// Fetches the dataset summary.
    pub async fn fetch_summary(&self) -> Result<DietSummary, AppError> {
        self.fetch(&self.config.summary_url()).await
    }

    /// Fetches min/max/average/median per nutrient.
    pub async fn fetch_nutrient_ranges(&self) -> Result<NutrientRanges, AppError> {
        self.fetch(&self.config.nutrient_ranges_url()).await
    }

    /// Probes the API health endpoint.
    pub async fn fetch_health(&self) -> Result<HealthStatus, AppError> {
        self.fetch(&self.config.health_url()).await
    }

    /// Executes a single fetch attempt and decodes the JSON body.
    async fn fetch<T>(&self, url: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for DietApiClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches macronutrient averages using default configuration.
pub async fn fetch_macronutrients() -> Result<MacronutrientAverages, AppError> {
    DietApiClient::new()?.fetch_macronutrients().await
}

/// Fetches the cuisine distribution using default configuration.
pub async fn fetch_cuisine_distribution() -> Result<CuisineDistribution, AppError> {
    DietApiClient::new()?.fetch_cuisine_distribution().await
}

/// Fetches the diet comparison using default configuration.
pub async fn fetch_comparison() -> Result<DietComparison, AppError> {
    DietApiClient::new()?.fetch_comparison().await
}

/// Fetches top recipes for a nutrient using default configuration.
pub async fn fetch_top_recipes(nutrient: Nutrient, count: u32) -> Result<TopRecipes, AppError> {
    DietApiClient::new()?
        .fetch_top_recipes(nutrient, count)
        .await
}

/// Fetches the dataset summary using default configuration.
pub async fn fetch_summary() -> Result<DietSummary, AppError> {
    DietApiClient::new()?.fetch_summary().await
}

/// Fetches nutrient ranges using default configuration.
pub async fn fetch_nutrient_ranges() -> Result<NutrientRanges, AppError> {
    DietApiClient::new()?.fetch_nutrient_ranges().await
}

/// Probes API health using default configuration.
pub async fn fetch_health() -> Result<HealthStatus, AppError> {
    DietApiClient::new()?.fetch_health().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_parsing() {
        assert_eq!("Protein".parse::<Nutrient>().unwrap(), Nutrient::Protein);
        assert_eq!("carbs".parse::<Nutrient>().unwrap(), Nutrient::Carbs);
        assert_eq!("FAT".parse::<Nutrient>().unwrap(), Nutrient::Fat);
        assert!("Fiber".parse::<Nutrient>().is_err());
    }

    #[test]
    fn test_client_creation() {
        let client = DietApiClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert!(config.macronutrients_url().starts_with(BASE_URL));
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder()
            .base_url("https://diet.example.com/api")
            .build();
        assert_eq!(
            config.summary_url(),
            "https://diet.example.com/api/diet-processor/summary"
        );
    }

    #[test]
    fn test_operation_urls() {
        let config = ApiConfig::builder().base_url("http://host/api").build();
        assert_eq!(
            config.macronutrients_url(),
            "http://host/api/diet-processor/macronutrients"
        );
        assert_eq!(
            config.cuisine_distribution_url(),
            "http://host/api/diet-processor/cuisine-distribution"
        );
        assert_eq!(
            config.comparison_url(),
            "http://host/api/diet-processor/comparison"
        );
        assert_eq!(config.health_url(), "http://host/api/diet-processor/health");
    }

    #[test]
    fn test_top_recipes_url_carries_parameters() {
        let config = ApiConfig::builder().base_url("http://host/api").build();
        let url = config.top_recipes_url(Nutrient::Carbs, 15);
        assert_eq!(
            url,
            "http://host/api/diet-processor/top-recipes?nutrient=Carbs&n=15"
        );
    }

    #[test]
    fn test_macronutrients_response_parsing() {
        let json = r#"{
            "keto": {"Protein": 80.5, "Carbs": 20.1, "Fat": 150.0},
            "vegan": {"Protein": 30.2, "Carbs": 90.7, "Fat": 25.3}
        }"#;

        let averages: MacronutrientAverages = serde_json::from_str(json).unwrap();
        let rows = averages.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].diet_type, "keto");
        assert_eq!(rows[0].protein, 80.5);
        assert_eq!(rows[1].carbs, 90.7);
    }

    #[test]
    fn test_macronutrients_response_with_absent_fields() {
        let json = r#"{"keto": {"Protein": 80.0, "Fat": 150.0}}"#;

        let averages: MacronutrientAverages = serde_json::from_str(json).unwrap();
        let rows = averages.rows();
        assert_eq!(rows[0].protein, 80.0);
        assert_eq!(rows[0].carbs, 0.0);
        assert_eq!(rows[0].fat, 150.0);
    }

    #[test]
    fn test_cuisine_distribution_response_parsing() {
        let json = r#"{
            "keto": {"italian": 3, "mexican": 1},
            "vegan": {"italian": 2, "thai": 5}
        }"#;

        let distribution: CuisineDistribution = serde_json::from_str(json).unwrap();
        let top = distribution.top_cuisines(6);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].cuisine, "italian");
        assert_eq!(top[0].count, 5);
    }

    #[test]
    fn test_top_recipes_response_parsing() {
        let json = r#"[
            {"recipe_name": "Grilled Chicken", "nutrient_value": 52.3,
             "diet_type": "paleo", "cuisine_type": "american"},
            {"recipe_name": "Lentil Curry", "nutrient_value": 24.8,
             "diet_type": "vegan", "cuisine_type": "indian"}
        ]"#;

        let recipes: TopRecipes = serde_json::from_str(json).unwrap();
        assert_eq!(recipes.len(), 2);
        let ranked = recipes.ranked();
        assert_eq!(ranked[0].name, "Grilled Chicken");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_health_response_parsing() {
        let json = r#"{"status": "healthy", "message": "Function is running"}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.is_healthy());
    }
}
