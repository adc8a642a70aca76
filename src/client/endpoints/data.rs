//! Lookups by id: recipes, ingredients, products, menu items, trivia.

use crate::client::{
    error::Result,
    types::{segment, ApiRequest, ApiResponse, Params},
    SpoonacularClient,
};

impl SpoonacularClient {
    pub async fn get_a_random_food_joke(&self) -> Result<ApiResponse> {
        self.dispatch(ApiRequest::get("get_a_random_food_joke", "food/jokes/random"))
            .await
    }

    pub async fn get_analyzed_recipe_instructions(
        &self,
        id: u64,
        step_breakdown: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("recipes/{}/analyzedInstructions", segment(id)?);
        let request = ApiRequest::get("get_analyzed_recipe_instructions", path)
            .query(Params::new().opt("stepBreakdown", step_breakdown));
        self.dispatch(request).await
    }

    /// Ingredient details, optionally for a specific amount (e.g. 100 gram).
    pub async fn get_food_information(
        &self,
        id: u64,
        amount: Option<f64>,
        unit: Option<&str>,
    ) -> Result<ApiResponse> {
        let path = format!("food/ingredients/{}/information", segment(id)?);
        let request = ApiRequest::get("get_food_information", path)
            .query(Params::new().opt("amount", amount).opt("unit", unit));
        self.dispatch(request).await
    }

    pub async fn get_menu_item_information(&self, id: u64) -> Result<ApiResponse> {
        let path = format!("food/menuItems/{}", segment(id)?);
        self.dispatch(ApiRequest::get("get_menu_item_information", path))
            .await
    }

    pub async fn get_product_information(&self, id: u64) -> Result<ApiResponse> {
        let path = format!("food/products/{}", segment(id)?);
        self.dispatch(ApiRequest::get("get_product_information", path))
            .await
    }

    pub async fn get_random_food_trivia(&self) -> Result<ApiResponse> {
        self.dispatch(ApiRequest::get("get_random_food_trivia", "food/trivia/random"))
            .await
    }

    pub async fn get_recipe_information(
        &self,
        id: u64,
        include_nutrition: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("recipes/{}/information", segment(id)?);
        let request = ApiRequest::get("get_recipe_information", path)
            .query(Params::new().opt("includeNutrition", include_nutrition));
        self.dispatch(request).await
    }

    /// Several recipes in one call; `ids` are sent comma separated.
    pub async fn get_recipe_information_bulk(
        &self,
        ids: &[u64],
        include_nutrition: Option<bool>,
    ) -> Result<ApiResponse> {
        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let request = ApiRequest::get("get_recipe_information_bulk", "recipes/informationBulk")
            .query(
                Params::new()
                    .set("ids", ids)
                    .opt("includeNutrition", include_nutrition),
            );
        self.dispatch(request).await
    }
}
