use std::sync::Arc;

use ip_core::IndicPhone;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Clone)]
pub struct IpServer {
    tokenizer: Arc<IndicPhone>,
    tool_router: ToolRouter<Self>,
}

impl IpServer {
    pub fn new(tokenizer: IndicPhone) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
            tool_router: Self::tool_router(),
        }
    }

    fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct TokensRequest {
    /// Text to tokenize; words are separated by single spaces
    text: String,
    /// Language tag, e.g. "kannada", "malayalam", "odia"
    language: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct QueryRequest {
    /// Search phrase, encoded as a single unit
    text: String,
    /// Language tag, e.g. "kannada", "malayalam", "odia"
    language: String,
}

#[tool_router]
impl IpServer {
    #[tool(
        description = "Phonetic index tokens for a text. Returns a Postgres tsvector literal and the weighted tokens it was built from (weight 3 = most specific key, 1 = most relaxed). An empty tsvector means the text carries no phonetic signal and should not be indexed."
    )]
    async fn phonetic_tokens(
        &self,
        Parameters(req): Parameters<TokensRequest>,
    ) -> Result<CallToolResult, McpError> {
        let vector = self
            .tokenizer
            .tokenize(&req.text, &req.language)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::debug!("phonetic_tokens: {} tokens", vector.len());

        Self::json_result(&serde_json::json!({
            "tsvector": vector.to_tsvector(),
            "tokens": vector,
        }))
    }

    #[tool(
        description = "Phonetic search expression for a phrase, in Postgres tsquery syntax. An empty query means nothing can match; do not run it as a wildcard."
    )]
    async fn phonetic_query(
        &self,
        Parameters(req): Parameters<QueryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let query = self
            .tokenizer
            .query(&req.text, &req.language)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        Self::json_result(&serde_json::json!({ "query": query }))
    }

    #[tool(description = "List the language tags this server can tokenize.")]
    async fn phonetic_languages(&self) -> Result<CallToolResult, McpError> {
        let languages: Vec<&str> = self.tokenizer.languages().map(|l| l.as_str()).collect();
        Self::json_result(&serde_json::json!({ "languages": languages }))
    }
}

#[tool_handler]
impl ServerHandler for IpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Phonetic tokenization for Indian languages.\n\n\
                 - phonetic_tokens: weighted phonetic keys for indexing a text (tsvector).\n\
                 - phonetic_query: tsquery expression for searching a phrase by sound.\n\
                 - phonetic_languages: supported language tags.\n\n\
                 Empty results are not errors: they mean the input has no phonetic signal."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
