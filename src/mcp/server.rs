//! MCP server coordinator.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};

use crate::client::VikunjaClient;

use super::tools;

/// Tool handler backed by one shared [`VikunjaClient`].
///
/// Each resource family under [`tools`] contributes its own router; they are
/// merged here into the single router rmcp dispatches through.
#[derive(Clone)]
pub struct VikunjaServer {
    client: Arc<VikunjaClient>,
    tool_router: ToolRouter<Self>,
}

impl VikunjaServer {
    pub fn new(client: impl Into<Arc<VikunjaClient>>) -> Self {
        Self {
            client: client.into(),
            tool_router: tools::projects::router()
                + tools::views::router()
                + tools::buckets::router()
                + tools::tasks::router()
                + tools::labels::router()
                + tools::comments::router()
                + tools::relations::router()
                + tools::assignees::router()
                + tools::attachments::router(),
        }
    }

    pub(crate) fn client(&self) -> &VikunjaClient {
        &self.client
    }

    /// Every registered tool with its parameter schema.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Names of every registered tool, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for VikunjaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Vikunja MCP Server - Manage projects, views, kanban buckets, tasks, labels, comments, relations, assignees, and attachments"
                .to_string(),
        )
    }
}
