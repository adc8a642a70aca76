//! Classification, conversion, meal planning and visualization widgets.

use serde_json::json;

use crate::client::{
    error::Result,
    params::{GroceryProduct, RecipeCard, WidgetStyle},
    types::{segment, ApiRequest, ApiResponse, Params},
    SpoonacularClient,
};

impl SpoonacularClient {
    /// Classifies one grocery product (sent as JSON).
    pub async fn classify_a_grocery_product(
        &self,
        product: &GroceryProduct,
        locale: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post("classify_a_grocery_product", "food/products/classify")
            .query(Params::new().opt("locale", locale))
            .json(product)?;
        self.dispatch(request).await
    }

    pub async fn classify_cuisine(&self, ingredient_list: &str, title: &str) -> Result<ApiResponse> {
        let request = ApiRequest::post("classify_cuisine", "recipes/cuisine").form(
            Params::new()
                .set("ingredientList", ingredient_list)
                .set("title", title),
        );
        self.dispatch(request).await
    }

    pub async fn classify_grocery_products_batch(
        &self,
        products: &[GroceryProduct],
        locale: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post(
            "classify_grocery_products_batch",
            "food/products/classifyBatch",
        )
        .query(Params::new().opt("locale", locale))
        .json(&products)?;
        self.dispatch(request).await
    }

    pub async fn convert_amounts(
        &self,
        ingredient_name: &str,
        source_amount: f64,
        source_unit: &str,
        target_unit: &str,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("convert_amounts", "recipes/convert").query(
            Params::new()
                .set("ingredientName", ingredient_name)
                .set("sourceAmount", source_amount)
                .set("sourceUnit", source_unit)
                .set("targetUnit", target_unit),
        );
        self.dispatch(request).await
    }

    pub async fn create_recipe_card(&self, card: &RecipeCard) -> Result<ApiResponse> {
        let request = ApiRequest::post("create_recipe_card", "recipes/visualizeRecipe")
            .form(Params::from_struct(card)?);
        self.dispatch(request).await
    }

    /// Generates a meal plan. `time_frame` is "day" or "week".
    pub async fn generate_meal_plan(
        &self,
        time_frame: Option<&str>,
        target_calories: Option<u32>,
        diet: Option<&str>,
        exclude: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("generate_meal_plan", "recipes/mealplans/generate").query(
            Params::new()
                .opt("timeFrame", time_frame)
                .opt("targetCalories", target_calories)
                .opt("diet", diet)
                .opt("exclude", exclude),
        );
        self.dispatch(request).await
    }

    pub async fn guess_nutrition_by_dish_name(&self, title: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("guess_nutrition_by_dish_name", "recipes/guessNutrition")
            .query(Params::new().set("title", title));
        self.dispatch(request).await
    }

    pub async fn map_ingredients_to_grocery_products(
        &self,
        ingredients: &[&str],
        servings: u32,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post(
            "map_ingredients_to_grocery_products",
            "food/ingredients/map",
        )
        .json(&json!({ "ingredients": ingredients, "servings": servings }))?;
        self.dispatch(request).await
    }

    pub async fn match_recipes_to_daily_calories(
        &self,
        target_calories: u32,
        time_frame: &str,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get(
            "match_recipes_to_daily_calories",
            "recipes/mealplans/generate",
        )
        .query(
            Params::new()
                .set("targetCalories", target_calories)
                .set("timeFrame", time_frame),
        );
        self.dispatch(request).await
    }

    /// Answers a nutrition question such as "How much vitamin c is in 2 apples?".
    pub async fn quick_answer(&self, q: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("quick_answer", "recipes/quickAnswer")
            .query(Params::new().set("q", q));
        self.dispatch(request).await
    }

    pub async fn summarize_recipe(&self, id: u64) -> Result<ApiResponse> {
        let path = format!("recipes/{}/summary", segment(id)?);
        self.dispatch(ApiRequest::get("summarize_recipe", path)).await
    }

    pub async fn visualize_equipment(
        &self,
        instructions: &str,
        style: &WidgetStyle,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post("visualize_equipment", "recipes/visualizeEquipment").form(
            Params::new()
                .set("instructions", instructions)
                .extend(Params::from_struct(style)?),
        );
        self.dispatch(request).await
    }

    /// `measure` is "metric" or "us".
    pub async fn visualize_ingredients(
        &self,
        ingredient_list: &str,
        servings: u32,
        measure: Option<&str>,
        style: &WidgetStyle,
    ) -> Result<ApiResponse> {
        let request =
            ApiRequest::post("visualize_ingredients", "recipes/visualizeIngredients").form(
                Params::new()
                    .set("ingredientList", ingredient_list)
                    .set("servings", servings)
                    .opt("measure", measure)
                    .extend(Params::from_struct(style)?),
            );
        self.dispatch(request).await
    }

    pub async fn visualize_menu_item_nutrition(
        &self,
        id: u64,
        default_css: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("food/menuItems/{}/nutritionWidget", segment(id)?);
        let request = ApiRequest::get("visualize_menu_item_nutrition", path)
            .query(Params::new().opt("defaultCss", default_css));
        self.dispatch(request).await
    }

    /// `mode` 1 shows a pie chart, 2 a bar chart.
    pub async fn visualize_price_breakdown(
        &self,
        ingredient_list: &str,
        servings: u32,
        mode: Option<u8>,
        style: &WidgetStyle,
    ) -> Result<ApiResponse> {
        let request =
            ApiRequest::post("visualize_price_breakdown", "recipes/visualizePriceEstimator").form(
                Params::new()
                    .set("ingredientList", ingredient_list)
                    .set("servings", servings)
                    .opt("mode", mode)
                    .extend(Params::from_struct(style)?),
            );
        self.dispatch(request).await
    }

    pub async fn visualize_product_nutrition(
        &self,
        id: u64,
        default_css: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("food/products/{}/nutritionWidget", segment(id)?);
        let request = ApiRequest::get("visualize_product_nutrition", path)
            .query(Params::new().opt("defaultCss", default_css));
        self.dispatch(request).await
    }

    pub async fn visualize_recipe_nutrition(
        &self,
        ingredient_list: &str,
        servings: u32,
        style: &WidgetStyle,
    ) -> Result<ApiResponse> {
        let request =
            ApiRequest::post("visualize_recipe_nutrition", "recipes/visualizeNutrition").form(
                Params::new()
                    .set("ingredientList", ingredient_list)
                    .set("servings", servings)
                    .extend(Params::from_struct(style)?),
            );
        self.dispatch(request).await
    }

    pub async fn visualize_recipe_nutrition_by_id(
        &self,
        id: u64,
        default_css: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("recipes/{}/nutritionWidget", segment(id)?);
        let request = ApiRequest::get("visualize_recipe_nutrition_by_id", path)
            .query(Params::new().opt("defaultCss", default_css));
        self.dispatch(request).await
    }
}
