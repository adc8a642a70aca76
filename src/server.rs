use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{
    params::SearchRecipesComplex, ApiResponse, Error, Result as ClientResult, SpoonacularClient,
};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindByIngredientsParams {
    /// Comma separated ingredient names
    pub ingredients: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub ranking: Option<u8>,
    #[serde(default)]
    pub ignore_pantry: Option<bool>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchRecipesParams {
    pub query: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub max_ready_time: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RecipeInformationParams {
    pub id: u64,
    #[serde(default)]
    pub include_nutrition: Option<bool>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SimilarRecipesParams {
    pub id: u64,
    #[serde(default)]
    pub number: Option<u32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RandomRecipesParams {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ParseIngredientsParams {
    /// One ingredient per line
    pub ingredient_list: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub include_nutrition: Option<bool>,
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ConvertAmountsParams {
    pub ingredient_name: String,
    pub source_amount: f64,
    pub source_unit: String,
    pub target_unit: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SubstitutesParams {
    pub ingredient_name: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct MealPlanParams {
    /// "day" or "week"
    #[serde(default)]
    pub time_frame: Option<String>,
    #[serde(default)]
    pub target_calories: Option<u32>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub exclude: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WinePairingParams {
    pub food: String,
    #[serde(default)]
    pub max_price: Option<f64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct QuickAnswerParams {
    pub question: String,
}

/// Turns a client outcome into a tool result. Bodies are forwarded untouched.
fn tool_result(action: &str, outcome: ClientResult<ApiResponse>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(response) => Ok(CallToolResult::success(vec![Content::text(response.body)])),
        Err(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            Ok(CallToolResult::error(vec![Content::text(
                error_details(action, &e).to_string(),
            )]))
        }
    }
}

fn error_details(action: &str, error: &Error) -> serde_json::Value {
    let mut details = json!({
        "error": format!("Failed to {action}"),
        "details": error.to_string(),
    });
    if let Some(suggestion) = error.suggestion() {
        details["suggestion"] = json!(suggestion);
    }
    if let Some(response) = error.response() {
        details["status"] = json!(response.status.as_u16());
        details["body"] = json!(response.body);
    }
    details
}

#[derive(Clone)]
pub struct SpoonacularMcpServer {
    client: Arc<SpoonacularClient>,
    tool_router: ToolRouter<SpoonacularMcpServer>,
}

#[tool_router]
impl SpoonacularMcpServer {
    /// Wraps a shared client. All sessions built from the same `Arc` share one throttle.
    pub fn new(client: Arc<SpoonacularClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &SpoonacularClient {
        &self.client
    }

    #[tool(description = "Find recipes that use as many of the given ingredients as possible")]
    async fn search_recipes_by_ingredients(
        &self,
        Parameters(params): Parameters<FindByIngredientsParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .search_recipes_by_ingredients(
                &params.ingredients,
                params.number,
                params.ranking,
                None,
                None,
                params.ignore_pantry,
            )
            .await;
        tool_result("search recipes by ingredients", outcome)
    }

    #[tool(description = "Search recipes by free text with optional cuisine, diet and time filters")]
    async fn search_recipes(
        &self,
        Parameters(params): Parameters<SearchRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        let search = SearchRecipesComplex {
            query: Some(params.query),
            cuisine: params.cuisine,
            diet: params.diet,
            max_ready_time: params.max_ready_time,
            number: params.number,
            ..Default::default()
        };
        let outcome = self.client.search_recipes_complex(&search).await;
        tool_result("search recipes", outcome)
    }

    #[tool(description = "Get full information about a recipe by id")]
    async fn get_recipe_information(
        &self,
        Parameters(params): Parameters<RecipeInformationParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .get_recipe_information(params.id, params.include_nutrition)
            .await;
        tool_result("get recipe information", outcome)
    }

    #[tool(description = "Find recipes similar to the given recipe id")]
    async fn get_similar_recipes(
        &self,
        Parameters(params): Parameters<SimilarRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .get_similar_recipes(params.id, params.number, None)
            .await;
        tool_result("get similar recipes", outcome)
    }

    #[tool(description = "Get random recipes, optionally filtered by comma separated tags")]
    async fn get_random_recipes(
        &self,
        Parameters(params): Parameters<RandomRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .get_random_recipes(params.number, params.tags.as_deref(), None)
            .await;
        tool_result("get random recipes", outcome)
    }

    #[tool(description = "Parse a newline separated ingredient list into structured ingredients")]
    async fn parse_ingredients(
        &self,
        Parameters(params): Parameters<ParseIngredientsParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .parse_ingredients(&params.ingredient_list, params.servings, params.include_nutrition)
            .await;
        tool_result("parse ingredients", outcome)
    }

    #[tool(description = "Convert an ingredient amount between units")]
    async fn convert_amounts(
        &self,
        Parameters(params): Parameters<ConvertAmountsParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .convert_amounts(
                &params.ingredient_name,
                params.source_amount,
                &params.source_unit,
                &params.target_unit,
            )
            .await;
        tool_result("convert amounts", outcome)
    }

    #[tool(description = "Get substitutes for an ingredient")]
    async fn get_ingredient_substitutes(
        &self,
        Parameters(params): Parameters<SubstitutesParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .get_ingredient_substitutes(&params.ingredient_name)
            .await;
        tool_result("get ingredient substitutes", outcome)
    }

    #[tool(description = "Generate a meal plan for a day or a week")]
    async fn generate_meal_plan(
        &self,
        Parameters(params): Parameters<MealPlanParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .generate_meal_plan(
                params.time_frame.as_deref(),
                params.target_calories,
                params.diet.as_deref(),
                params.exclude.as_deref(),
            )
            .await;
        tool_result("generate meal plan", outcome)
    }

    #[tool(description = "Suggest wines that go well with a dish or cuisine")]
    async fn get_wine_pairing(
        &self,
        Parameters(params): Parameters<WinePairingParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .client
            .get_wine_pairing(&params.food, params.max_price)
            .await;
        tool_result("get wine pairing", outcome)
    }

    #[tool(description = "Answer a nutrition question in natural language")]
    async fn quick_answer(
        &self,
        Parameters(params): Parameters<QuickAnswerParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.client.quick_answer(&params.question).await;
        tool_result("answer question", outcome)
    }

    #[tool(description = "Show the remaining API quota reported by the last response")]
    async fn get_quota(&self) -> Result<CallToolResult, McpError> {
        let config = self.client.config();
        let result = match self.client.quota().await {
            Some(snapshot) => json!({
                "remaining": snapshot.iter().collect::<std::collections::BTreeMap<_, _>>(),
                "captured_at": snapshot.captured_at(),
                "threshold": config.quota_threshold(),
                "allow_extra_calls": config.allow_extra_calls(),
            }),
            None => json!({
                "remaining": null,
                "message": "No request has been made yet",
                "threshold": config.quota_threshold(),
                "allow_extra_calls": config.allow_extra_calls(),
            }),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string()),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for SpoonacularMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server exposes the Spoonacular food API: recipe search by text or ingredients, recipe details and similar recipes, ingredient parsing, unit conversion, substitutes, meal plans, wine pairing and nutrition questions. Responses are returned as the raw JSON the API produced. Calls are throttled and count against a daily quota; use get_quota to check what is left.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
