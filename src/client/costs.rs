//! Documented per-endpoint cost, by quota category.
//!
//! This is reference data only. The dispatcher logs the expected cost of each
//! call but never uses it to decide whether a call may go out; the upstream
//! counters in [`QuotaSnapshot`](crate::client::quota::QuotaSnapshot) are the
//! source of truth.

use serde::Serialize;

use crate::client::quota::QuotaCategory;

/// Cost in one quota category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cost {
    pub amount: u32,
    /// How the amount scales, e.g. "per result"
    pub qualifier: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointCost {
    /// Wrapper method name
    pub endpoint: &'static str,
    /// Display name used in the upstream documentation
    pub name: &'static str,
    pub requests: Cost,
    pub tiny_requests: Cost,
    pub results: Cost,
}

impl EndpointCost {
    pub fn cost(&self, category: QuotaCategory) -> Cost {
        match category {
            QuotaCategory::Requests => self.requests,
            QuotaCategory::TinyRequests => self.tiny_requests,
            QuotaCategory::Results => self.results,
        }
    }
}

/// Looks up the documented cost of a wrapper by name.
pub fn endpoint_cost(endpoint: &str) -> Option<&'static EndpointCost> {
    ENDPOINT_COSTS.iter().find(|cost| cost.endpoint == endpoint)
}

pub static ENDPOINT_COSTS: &[EndpointCost] = &[
    EndpointCost {
        endpoint: "classify_a_grocery_product",
        name: "Classify a Grocery Product",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "classify_cuisine",
        name: "Classify Cuisine",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "classify_grocery_products_batch",
        name: "Classify Grocery Products (Batch)",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: Some("per product") },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "convert_amounts",
        name: "Convert Amounts",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "create_recipe_card",
        name: "Create Recipe Card",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "generate_meal_plan",
        name: "Generate Meal Plan",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "map_ingredients_to_grocery_products",
        name: "Map Ingredients to Grocery Products",
        requests: Cost { amount: 1, qualifier: Some("per ingredient") },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "match_recipes_to_daily_calories",
        name: "Match Recipes to Daily Calories",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "quick_answer",
        name: "Quick Answer",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "summarize_recipe",
        name: "Summarize Recipe",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_equipment",
        name: "Visualize Equipment",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_ingredients",
        name: "Visualize Ingredients",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_recipe_nutrition",
        name: "Visualize Recipe Nutrition",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_product_nutrition",
        name: "Visualize Product Nutrition",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_menu_item_nutrition",
        name: "Visualize Menu Item Nutrition",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "visualize_price_breakdown",
        name: "Visualize Price Breakdown",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "analyze_a_recipe_search_query",
        name: "Analyze a Recipe Search Query",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "analyze_recipe_instructions",
        name: "Analyze Recipe Instructions",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "detect_food_in_text",
        name: "Detect Food in Text",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "extract_recipe_from_website",
        name: "Extract Recipe from Website",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "parse_ingredients",
        name: "Parse Ingredients",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per parsed ingredient") },
    },
    EndpointCost {
        endpoint: "autocomplete_ingredient_search",
        name: "Autocomplete Ingredient Search",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "autocomplete_recipe_search",
        name: "Autocomplete Recipe Search",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_ingredient_substitutes",
        name: "Get Ingredient Substitutes",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_ingredient_substitutes_by_id",
        name: "Get Ingredient Substitutes by Id",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_random_recipes",
        name: "Get Random Recipes",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "get_similar_recipes",
        name: "Get Similar Recipes",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_food_videos",
        name: "Search Food Videos",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_menu_items",
        name: "Search Menu Items",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_grocery_products",
        name: "Search Grocery Products",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_grocery_products_by_upc",
        name: "Search Grocery Products by UPC",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_recipes",
        name: "Search Recipes",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_recipes_by_ingredients",
        name: "Search Recipes by Ingredients",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_recipes_by_nutrients",
        name: "Search Recipes by Nutrients",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_recipes_complex",
        name: "Search Recipes Complex",
        requests: Cost { amount: 3, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 1, qualifier: Some("per result") },
    },
    EndpointCost {
        endpoint: "search_site_content",
        name: "Search Site Content",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_a_random_food_joke",
        name: "Get a Random Food Joke",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_analyzed_recipe_instructions",
        name: "Get Analyzed Recipe Instructions",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_food_information",
        name: "Get Food Information",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_product_information",
        name: "Get Product Information",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_menu_item_information",
        name: "Get Menu Item Information",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_random_food_trivia",
        name: "Get Random Food Trivia",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_recipe_information",
        name: "Get Recipe Information",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_recipe_information_bulk",
        name: "Get Recipe Information Bulk",
        requests: Cost { amount: 1, qualifier: Some("per recipe") },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "get_conversation_suggests",
        name: "Get Conversation Suggests",
        requests: Cost { amount: 0, qualifier: None },
        tiny_requests: Cost { amount: 1, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
    EndpointCost {
        endpoint: "talk_to_a_chatbot",
        name: "Talk to a chatbot",
        requests: Cost { amount: 1, qualifier: None },
        tiny_requests: Cost { amount: 0, qualifier: None },
        results: Cost { amount: 0, qualifier: None },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_by_wrapper_name() {
        let cost = endpoint_cost("search_recipes_complex").unwrap();
        assert_eq!(cost.name, "Search Recipes Complex");
        assert_eq!(cost.cost(QuotaCategory::Requests).amount, 3);
        assert_eq!(
            cost.cost(QuotaCategory::Results).qualifier,
            Some("per result")
        );
    }

    #[test]
    fn lightweight_endpoints_only_cost_tiny_requests() {
        let cost = endpoint_cost("autocomplete_recipe_search").unwrap();
        assert_eq!(cost.requests.amount, 0);
        assert_eq!(cost.tiny_requests.amount, 1);
        assert_eq!(cost.results.amount, 0);
    }

    #[test]
    fn unknown_endpoints_have_no_entry() {
        assert!(endpoint_cost("get_wine_pairing").is_none());
    }

    #[test]
    fn entries_are_unique() {
        for (i, cost) in ENDPOINT_COSTS.iter().enumerate() {
            assert!(
                ENDPOINT_COSTS[i + 1..].iter().all(|other| other.endpoint != cost.endpoint),
                "duplicate entry for {}",
                cost.endpoint
            );
        }
    }
}
