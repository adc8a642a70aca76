//! Parameter structs for endpoints that take many optional filters.
//!
//! Each struct serializes with camelCase keys. Fields left as `None` (or empty
//! lists) are dropped when the struct is flattened into [`Params`](crate::client::types::Params).

use std::collections::BTreeMap;

use serde::Serialize;

/// Nutrients the search endpoints can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    Alcohol,
    Caffeine,
    Calcium,
    Calories,
    Carbs,
    Cholesterol,
    Choline,
    Copper,
    Fat,
    Fiber,
    Fluoride,
    Folate,
    FolicAcid,
    Iodine,
    Iron,
    Magnesium,
    Manganese,
    Phosphorus,
    Potassium,
    Protein,
    SaturatedFat,
    Selenium,
    Sodium,
    Sugar,
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB5,
    VitaminB6,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Zinc,
}

impl Nutrient {
    /// Suffix used after `min`/`max` in query keys.
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Alcohol => "Alcohol",
            Nutrient::Caffeine => "Caffeine",
            Nutrient::Calcium => "Calcium",
            Nutrient::Calories => "Calories",
            Nutrient::Carbs => "Carbs",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Choline => "Choline",
            Nutrient::Copper => "Copper",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Fluoride => "Fluoride",
            Nutrient::Folate => "Folate",
            Nutrient::FolicAcid => "FolicAcid",
            Nutrient::Iodine => "Iodine",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Manganese => "Manganese",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
            Nutrient::Protein => "Protein",
            Nutrient::SaturatedFat => "SaturatedFat",
            Nutrient::Selenium => "Selenium",
            Nutrient::Sodium => "Sodium",
            Nutrient::Sugar => "Sugar",
            Nutrient::VitaminA => "VitaminA",
            Nutrient::VitaminB1 => "VitaminB1",
            Nutrient::VitaminB2 => "VitaminB2",
            Nutrient::VitaminB3 => "VitaminB3",
            Nutrient::VitaminB5 => "VitaminB5",
            Nutrient::VitaminB6 => "VitaminB6",
            Nutrient::VitaminB12 => "VitaminB12",
            Nutrient::VitaminC => "VitaminC",
            Nutrient::VitaminD => "VitaminD",
            Nutrient::VitaminE => "VitaminE",
            Nutrient::VitaminK => "VitaminK",
            Nutrient::Zinc => "Zinc",
        }
    }
}

/// Lower and upper bounds per nutrient, serialized as `minX` / `maxX` keys.
///
/// ```
/// use mcp_spoonacular::client::params::{Nutrient, NutrientFilter};
///
/// let filter = NutrientFilter::new()
///     .min(Nutrient::Protein, 20.0)
///     .max(Nutrient::Calories, 600.0);
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutrientFilter(BTreeMap<String, f64>);

impl NutrientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a lower bound. A NaN or infinite value leaves the bound unset.
    pub fn min(self, nutrient: Nutrient, value: f64) -> Self {
        self.bound(format!("min{}", nutrient.key()), value)
    }

    /// Sets an upper bound. A NaN or infinite value leaves the bound unset.
    pub fn max(self, nutrient: Nutrient, value: f64) -> Self {
        self.bound(format!("max{}", nutrient.key()), value)
    }

    fn bound(mut self, key: String, value: f64) -> Self {
        if value.is_finite() {
            self.0.insert(key, value);
        } else {
            tracing::warn!("Ignoring non-finite nutrient bound {} = {}", key, value);
            self.0.remove(&key);
        }
        self
    }

    pub fn range(self, nutrient: Nutrient, min: f64, max: f64) -> Self {
        self.min(nutrient, min).max(nutrient, max)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipes {
    pub query: String,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub exclude_ingredients: Vec<String>,
    pub intolerances: Vec<String>,
    pub offset: Option<u32>,
    pub number: Option<u32>,
    pub limit_license: Option<bool>,
    pub instructions_required: Option<bool>,
    /// Dish type, e.g. "main course"
    #[serde(rename = "type")]
    pub dish_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesComplex {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub exclude_cuisine: Option<String>,
    pub diet: Option<String>,
    pub intolerances: Vec<String>,
    pub equipment: Vec<String>,
    pub include_ingredients: Vec<String>,
    pub exclude_ingredients: Vec<String>,
    #[serde(rename = "type")]
    pub dish_type: Option<String>,
    pub instructions_required: Option<bool>,
    pub fill_ingredients: Option<bool>,
    pub add_recipe_information: Option<bool>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub title_match: Option<String>,
    pub max_ready_time: Option<u32>,
    pub ignore_pantry: Option<bool>,
    pub sort: Option<String>,
    pub sort_direction: Option<String>,
    pub ranking: Option<u8>,
    pub offset: Option<u32>,
    pub number: Option<u32>,
    pub limit_license: Option<bool>,
    #[serde(flatten)]
    pub nutrients: NutrientFilter,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesByNutrients {
    #[serde(flatten)]
    pub nutrients: NutrientFilter,
    pub offset: Option<u32>,
    pub number: Option<u32>,
    pub random: Option<bool>,
    pub limit_license: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroceryProducts {
    pub query: String,
    #[serde(flatten)]
    pub nutrients: NutrientFilter,
    pub offset: Option<u32>,
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMenuItems {
    pub query: String,
    #[serde(flatten)]
    pub nutrients: NutrientFilter,
    pub offset: Option<u32>,
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoodVideos {
    pub query: String,
    #[serde(rename = "type")]
    pub dish_type: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub include_ingredients: Vec<String>,
    pub exclude_ingredients: Vec<String>,
    /// Minimum video length in seconds
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub offset: Option<u32>,
    pub number: Option<u32>,
}

/// Form fields for the recipe card generator.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub title: String,
    /// Image URL shown on the card
    pub image: String,
    /// Ingredients, one per line
    pub ingredients: String,
    /// Instructions, one step per line
    pub instructions: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    /// One of "ellipseMask", "diamondMask", "starMask", "heartMask", "potMask", "fishMask"
    pub mask: String,
    /// One of "none", "background1", "background2"
    pub background_image: String,
    pub author: Option<String>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub source: Option<String>,
}

/// Presentation options shared by the visualization widgets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStyle {
    /// "grid" or "list"
    pub view: Option<String>,
    pub default_css: Option<bool>,
    pub show_backlink: Option<bool>,
}

/// A grocery product to classify.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroceryProduct {
    pub title: String,
    pub upc: String,
    pub plu_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::Params;
    use pretty_assertions::assert_eq;

    #[test]
    fn nutrient_bounds_flatten_into_the_query() {
        let search = SearchRecipesByNutrients {
            nutrients: NutrientFilter::new()
                .range(Nutrient::Carbs, 10.0, 50.0)
                .min(Nutrient::VitaminB12, 1.5),
            number: Some(3),
            ..Default::default()
        };

        let params = Params::from_struct(&search).unwrap();

        assert_eq!(params.get("minCarbs"), Some("10.0"));
        assert_eq!(params.get("maxCarbs"), Some("50.0"));
        assert_eq!(params.get("minVitaminB12"), Some("1.5"));
        assert_eq!(params.get("number"), Some("3"));
        assert_eq!(params.get("offset"), None);
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn non_finite_bounds_are_left_unset() {
        let filter = NutrientFilter::new()
            .min(Nutrient::Fat, 5.0)
            .min(Nutrient::Fat, f64::NAN)
            .max(Nutrient::Sodium, f64::INFINITY)
            .max(Nutrient::Sugar, 12.0);

        let search = SearchRecipesByNutrients {
            nutrients: filter,
            ..Default::default()
        };
        let params = Params::from_struct(&search).unwrap();

        assert_eq!(params.get("minFat"), None);
        assert_eq!(params.get("maxSodium"), None);
        assert_eq!(params.get("maxSugar"), Some("12.0"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn complex_search_uses_upstream_key_names() {
        let search = SearchRecipesComplex {
            query: Some("pasta".to_string()),
            dish_type: Some("main course".to_string()),
            include_ingredients: vec!["tomato".to_string(), "cheese".to_string()],
            max_ready_time: Some(20),
            ..Default::default()
        };

        let params = Params::from_struct(&search).unwrap();

        assert_eq!(params.get("query"), Some("pasta"));
        assert_eq!(params.get("type"), Some("main course"));
        assert_eq!(params.get("includeIngredients"), Some("tomato,cheese"));
        assert_eq!(params.get("maxReadyTime"), Some("20"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn recipe_card_keeps_required_fields() {
        let card = RecipeCard {
            title: "Pork tenderloin".to_string(),
            ready_in_minutes: 45,
            servings: 2,
            mask: "ellipseMask".to_string(),
            ..Default::default()
        };

        let params = Params::from_struct(&card).unwrap();

        assert_eq!(params.get("readyInMinutes"), Some("45"));
        assert_eq!(params.get("backgroundImage"), Some(""));
        assert_eq!(params.get("author"), None);
    }
}
