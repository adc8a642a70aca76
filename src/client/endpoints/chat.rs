use crate::client::{
    error::Result,
    types::{ApiRequest, ApiResponse, Params},
    SpoonacularClient,
};

impl SpoonacularClient {
    pub async fn get_conversation_suggests(
        &self,
        query: &str,
        number: Option<u32>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("get_conversation_suggests", "food/converse/suggest")
            .query(Params::new().set("query", query).opt("number", number));
        self.dispatch(request).await
    }

    /// Sends one chat message. Pass the same `context_id` to keep a conversation going.
    pub async fn talk_to_a_chatbot(
        &self,
        text: &str,
        context_id: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get("talk_to_a_chatbot", "food/converse")
            .query(Params::new().set("text", text).opt("contextId", context_id));
        self.dispatch(request).await
    }
}
