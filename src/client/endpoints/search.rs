//! Recipe, product, menu item, video and wine searches.

use crate::client::{
    error::Result,
    params::{
        SearchFoodVideos, SearchGroceryProducts, SearchMenuItems, SearchRecipes,
        SearchRecipesByNutrients, SearchRecipesComplex,
    },
    types::{segment, ApiRequest, ApiResponse, Params},
    SpoonacularClient,
};

impl SpoonacularClient {
    pub async fn autocomplete_ingredient_search(
        &self,
        query: &str,
        number: Option<u32>,
        meta_information: Option<bool>,
        intolerances: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get(
            "autocomplete_ingredient_search",
            "food/ingredients/autocomplete",
        )
        .query(
            Params::new()
                .set("query", query)
                .opt("number", number)
                .opt("metaInformation", meta_information)
                .opt("intolerances", intolerances),
        );
        self.dispatch(request).await
    }

    pub async fn autocomplete_recipe_search(
        &self,
        query: &str,
        number: Option<u32>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("autocomplete_recipe_search", "recipes/autocomplete")
            .query(Params::new().set("query", query).opt("number", number));
        self.dispatch(request).await
    }

    pub async fn get_comparable_products(&self, upc: &str) -> Result<ApiResponse> {
        let path = format!("food/products/upc/{}/comparable", segment(upc)?);
        self.dispatch(ApiRequest::get("get_comparable_products", path))
            .await
    }

    pub async fn get_dish_pairing_for_wine(&self, wine: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_dish_pairing_for_wine", "food/wine/dishes")
            .query(Params::new().set("wine", wine));
        self.dispatch(request).await
    }

    pub async fn get_ingredient_substitutes(&self, ingredient_name: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_ingredient_substitutes", "food/ingredients/substitutes")
            .query(Params::new().set("ingredientName", ingredient_name));
        self.dispatch(request).await
    }

    pub async fn get_ingredient_substitutes_by_id(&self, id: u64) -> Result<ApiResponse> {
        let path = format!("food/ingredients/{}/substitutes", segment(id)?);
        self.dispatch(ApiRequest::get("get_ingredient_substitutes_by_id", path))
            .await
    }

    /// `tags` is a comma separated list such as "vegetarian,dessert".
    pub async fn get_random_recipes(
        &self,
        number: Option<u32>,
        tags: Option<&str>,
        limit_license: Option<bool>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_random_recipes", "recipes/random").query(
            Params::new()
                .opt("number", number)
                .opt("tags", tags)
                .opt("limitLicense", limit_license),
        );
        self.dispatch(request).await
    }

    pub async fn get_similar_recipes(
        &self,
        id: u64,
        number: Option<u32>,
        limit_license: Option<bool>,
    ) -> Result<ApiResponse> {
        let path = format!("recipes/{}/similar", segment(id)?);
        let request = ApiRequest::get("get_similar_recipes", path).query(
            Params::new()
                .opt("number", number)
                .opt("limitLicense", limit_license),
        );
        self.dispatch(request).await
    }

    pub async fn get_wine_description(&self, wine: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_wine_description", "food/wine/description")
            .query(Params::new().set("wine", wine));
        self.dispatch(request).await
    }

    pub async fn get_wine_pairing(&self, food: &str, max_price: Option<f64>) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_wine_pairing", "food/wine/pairing")
            .query(Params::new().set("food", food).opt("maxPrice", max_price));
        self.dispatch(request).await
    }

    pub async fn get_wine_recommendation(
        &self,
        wine: &str,
        max_price: Option<f64>,
        min_rating: Option<f64>,
        number: Option<u32>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_wine_recommendation", "food/wine/recommendation")
            .query(
                Params::new()
                    .set("wine", wine)
                    .opt("maxPrice", max_price)
                    .opt("minRating", min_rating)
                    .opt("number", number),
            );
        self.dispatch(request).await
    }

    pub async fn search_food_videos(&self, search: &SearchFoodVideos) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_food_videos", "food/videos/search")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    pub async fn search_grocery_products(
        &self,
        search: &SearchGroceryProducts,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_grocery_products", "food/products/search")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    pub async fn search_grocery_products_by_upc(&self, upc: &str) -> Result<ApiResponse> {
        let path = format!("food/products/upc/{}", segment(upc)?);
        self.dispatch(ApiRequest::get("search_grocery_products_by_upc", path))
            .await
    }

    pub async fn search_menu_items(&self, search: &SearchMenuItems) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_menu_items", "food/menuItems/search")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    pub async fn search_recipes(&self, search: &SearchRecipes) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_recipes", "recipes/search")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    /// Finds recipes that use as many of the given ingredients as possible.
    ///
    /// `ingredients` is comma separated. `ranking` 1 maximizes used
    /// ingredients, 2 minimizes missing ones.
    pub async fn search_recipes_by_ingredients(
        &self,
        ingredients: &str,
        number: Option<u32>,
        ranking: Option<u8>,
        fill_ingredients: Option<bool>,
        limit_license: Option<bool>,
        ignore_pantry: Option<bool>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_recipes_by_ingredients", "recipes/findByIngredients")
            .query(
                Params::new()
                    .set("ingredients", ingredients)
                    .opt("number", number)
                    .opt("ranking", ranking)
                    .opt("fillIngredients", fill_ingredients)
                    .opt("limitLicense", limit_license)
                    .opt("ignorePantry", ignore_pantry),
            );
        self.dispatch(request).await
    }

    pub async fn search_recipes_by_nutrients(
        &self,
        search: &SearchRecipesByNutrients,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_recipes_by_nutrients", "recipes/findByNutrients")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    pub async fn search_recipes_complex(
        &self,
        search: &SearchRecipesComplex,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_recipes_complex", "recipes/searchComplex")
            .query(Params::from_struct(search)?);
        self.dispatch(request).await
    }

    pub async fn search_site_content(&self, query: &str) -> Result<ApiResponse> {
        let request = ApiRequest::get("search_site_content", "food/site/search")
            .query(Params::new().set("query", query));
        self.dispatch(request).await
    }
}
