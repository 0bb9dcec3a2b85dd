//! MCP server handler and lifecycle management.
//!
//! `SatPromptServer` is the composition root: it builds the prompt registry
//! from configuration and implements the MCP protocol by delegating to the
//! prompt service.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::prompts::{PromptRegistry, PromptService, PromptStats};

/// The main MCP server handler.
#[derive(Clone)]
pub struct SatPromptServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared prompt catalog.
    registry: Arc<PromptRegistry>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl SatPromptServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails only if the configured prompt data directory cannot be read.
    pub fn new(config: Config) -> Result<Self> {
        let registry = Arc::new(PromptRegistry::from_config(&config.prompts)?);
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: Arc<PromptRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            prompt_service: Arc::new(PromptService::new(Arc::clone(&registry))),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &Arc<PromptRegistry> {
        &self.registry
    }

    /// Preload configured domains, then load the full catalog.
    ///
    /// A domain that fails to preload is reported and retried by the full
    /// load; only strict mode turns load failures into an error here.
    pub async fn warm_up(&self) -> Result<PromptStats> {
        for domain in &self.config.prompts.preload {
            match self.registry.preload_domain(domain).await {
                Ok(count) => info!("Preloaded domain {} ({} prompts)", domain, count),
                Err(e) => warn!("Could not preload domain {}: {}", domain, e),
            }
        }

        self.registry.initialize().await?;
        let stats = self.registry.prompt_stats().await?;

        info!(
            "Prompt catalog loaded: {} prompts across {} domains and {} skills",
            stats.total_prompts, stats.total_domains, stats.total_skills
        );
        if !stats.failed_domains.is_empty() {
            warn!(
                "Serving without domains: {}",
                stats.failed_domains.join(", ")
            );
        }
        Ok(stats)
    }
}

impl ServerHandler for SatPromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Serves SAT practice-question generation prompts. Call the \
                 'sat_question' prompt with a skill, domain and difficulty."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Non-string argument values are ignored.
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
