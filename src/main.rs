//! gitlab-mr-mcp binary: serve the merge request tool over stdio

use anyhow::Result;
use clap::Parser;
use gitlab_mr_mcp::config::{
    DEFAULT_GITLAB_URL, GitLabConfig, PROJECT_ID_VAR, TOKEN_VAR, URL_VAR,
};
use gitlab_mr_mcp::mcp::run_mcp_server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitlab-mr-mcp")]
#[command(about = "MCP server that opens GitLab merge requests")]
#[command(version)]
struct Cli {
    /// GitLab base URL
    #[arg(long, env = URL_VAR, default_value = DEFAULT_GITLAB_URL)]
    gitlab_url: String,

    /// Project id or `group/project` path
    #[arg(long, env = PROJECT_ID_VAR)]
    project_id: Option<String>,

    /// Personal access token with `api` scope
    #[arg(long, env = TOKEN_VAR, hide_env_values = true)]
    token: Option<String>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the MCP protocol; logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = GitLabConfig::new(Some(cli.gitlab_url), cli.project_id, cli.token);
    run_mcp_server(config).await?;
    Ok(())
}
