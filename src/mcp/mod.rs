//! MCP server exposing the `create_merge_request` tool over stdio

mod server;
mod tool;

pub use server::{GitLabMrServer, run_mcp_server};
pub use tool::CreateMergeRequestInput;
