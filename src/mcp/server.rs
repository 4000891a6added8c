//! MCP server implementation
//!
//! One tool, `create_merge_request`, served with the rmcp SDK over stdio.
//! Every outcome, failures included, comes back as a text result: the caller
//! reads the message rather than a protocol error.

use crate::config::GitLabConfig;
use crate::error::Error;
use crate::mcp::tool::CreateMergeRequestInput;
use crate::merge_request;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, ErrorData, Implementation, ProtocolVersion, ServerCapabilities,
        ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tracing::info;

/// Name advertised to MCP clients
const SERVER_NAME: &str = "gitlab-pr-server";

/// MCP server for GitLab merge requests
#[derive(Clone)]
pub struct GitLabMrServer {
    tool_router: ToolRouter<Self>,
    config: Arc<GitLabConfig>,
}

impl std::fmt::Debug for GitLabMrServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabMrServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GitLabMrServer {
    /// Create a server bound to one GitLab configuration
    pub fn new(config: GitLabConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config: Arc::new(config),
        }
    }
}

#[tool_router]
impl GitLabMrServer {
    /// Create a new merge request in GitLab.
    #[tool(
        name = "create_merge_request",
        description = "Create a new merge request in GitLab. Requires source_branch and target_branch; optionally takes a title and a comma-separated list of reviewer email addresses, which are resolved to GitLab users before the merge request is opened."
    )]
    pub async fn create_merge_request(
        &self,
        Parameters(input): Parameters<CreateMergeRequestInput>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(
            source = %input.source_branch,
            target = %input.target_branch,
            "Executing create_merge_request"
        );

        let outcome = merge_request::create_merge_request(&self.config, input.into()).await;

        info!(success = outcome.is_success(), "create_merge_request completed");
        Ok(CallToolResult::success(vec![Content::text(
            outcome.to_string(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for GitLabMrServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Opens GitLab merge requests. Use the create_merge_request tool with a \
                source and target branch; reviewers may be given by email address."
                    .to_string(),
            ),
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects
pub async fn run_mcp_server(config: GitLabConfig) -> crate::error::Result<()> {
    info!(
        base_url = config.base_url(),
        project_id = ?config.project_id(),
        has_token = config.has_token(),
        "Starting MCP server"
    );

    let server = GitLabMrServer::new(config);

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    info!("MCP server started, waiting for client requests");

    service
        .waiting()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    info!("MCP server shutting down");
    Ok(())
}
