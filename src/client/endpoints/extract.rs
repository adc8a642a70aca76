//! Text analysis: queries, instructions, ingredient lists, web pages.

use crate::client::{
    error::Result,
    types::{ApiRequest, ApiResponse, Params},
    SpoonacularClient,
};

impl SpoonacularClient {
    pub async fn analyze_a_recipe_search_query(&self, q: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("analyze_a_recipe_search_query", "recipes/queries/analyze")
            .query(Params::new().set("q", q));
        self.dispatch(request).await
    }

    pub async fn analyze_recipe_instructions(&self, instructions: &str) -> Result<ApiResponse> {
        let request =
            ApiRequest::post("analyze_recipe_instructions", "recipes/analyzeInstructions")
                .form(Params::new().set("instructions", instructions));
        self.dispatch(request).await
    }

    pub async fn detect_food_in_text(&self, text: &str) -> Result<ApiResponse> {
        let request = ApiRequest::post("detect_food_in_text", "food/detect")
            .form(Params::new().set("text", text));
        self.dispatch(request).await
    }

    pub async fn extract_recipe_from_website(
        &self,
        url: &str,
        force_extraction: Option<bool>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("extract_recipe_from_website", "recipes/extract").query(
            Params::new()
                .set("url", url)
                .opt("forceExtraction", force_extraction),
        );
        self.dispatch(request).await
    }

    /// Parses a newline separated ingredient list.
    ///
    /// The list and serving count travel in the form body; `includeNutrition`
    /// goes in the query string.
    pub async fn parse_ingredients(
        &self,
        ingredient_list: &str,
        servings: u32,
        include_nutrition: Option<bool>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post("parse_ingredients", "recipes/parseIngredients")
            .query(Params::new().opt("includeNutrition", include_nutrition))
            .form(
                Params::new()
                    .set("ingredientList", ingredient_list)
                    .set("servings", servings),
            );
        self.dispatch(request).await
    }
}
