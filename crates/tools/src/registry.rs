//! Dispatch from tool name and JSON arguments to the graph façade.

use graph::{FailureSentinel, GraphClient, RpcInvoker};
use serde_json::Value;

use crate::args::Arguments;
use crate::{Tool, ToolError};

/// Forwards validated tool calls to a [`GraphClient`] and serializes its
/// result unchanged.
#[derive(Debug, Clone)]
pub struct ToolRegistry<I> {
    client: GraphClient<I>,
}

impl<I: RpcInvoker> ToolRegistry<I> {
    pub fn new(client: GraphClient<I>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphClient<I> {
        &self.client
    }

    /// Validates `arguments` for the named tool and runs it.
    ///
    /// `Err` means the request itself was malformed. A failed remote call is
    /// still `Ok`: read tools report it as empty/`null`, mutations return the
    /// failure body.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = Tool::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = Arguments::parse(arguments)?;
        let output = self.dispatch(tool, &args).await?;

        if let Some(sentinel) = FailureSentinel::from_value(&output) {
            tracing::warn!(tool = tool.name(), error = %sentinel, "tool returned a transport failure");
        }
        Ok(output)
    }

    async fn dispatch(&self, tool: Tool, args: &Arguments) -> Result<Value, ToolError> {
        let c = &self.client;
        let output = match tool {
            Tool::GetCurrentGraph => c.get_current_graph().await,
            Tool::GetAllPages => Value::Array(c.get_all_pages().await),
            Tool::GetPage => c.get_page(&args.page_name("name")?).await.unwrap_or(Value::Null),
            Tool::CreatePage => {
                c.create_page(&args.page_name("name")?, args.properties("properties")?)
                    .await
            }
            Tool::DeletePage => c.delete_page(&args.page_name("name")?).await,
            Tool::GetPageLinkedReferences => {
                Value::Array(c.get_page_linked_references(&args.page_name("page_name")?).await)
            }
            Tool::GetPageBlocks => Value::Array(c.get_page_blocks(&args.page_name("page_name")?).await),
            Tool::GetBlock => c.get_block(&args.block_id("block_id")?).await.unwrap_or(Value::Null),
            Tool::GetBlockProperties => Value::Object(c.get_block_properties(&args.block_id("block_id")?).await),
            Tool::CreateBlock => {
                c.create_block(
                    &args.page_name("page_name")?,
                    args.string("content")?,
                    args.properties("properties")?,
                )
                .await
            }
            Tool::InsertBlock => {
                c.insert_block(
                    &args.block_id("parent_block_id")?,
                    args.string("content")?,
                    args.properties("properties")?,
                    args.flag("before")?,
                )
                .await
            }
            Tool::UpdateBlock => {
                c.update_block(
                    &args.block_id("block_id")?,
                    args.string("content")?,
                    args.properties("properties")?,
                )
                .await
            }
            Tool::MoveBlock => {
                c.move_block(
                    &args.block_id("block_id")?,
                    &args.block_id("target_block_id")?,
                    args.flag("as_child")?,
                )
                .await
            }
            Tool::RemoveBlock => c.remove_block(&args.block_id("block_id")?).await,
            Tool::SearchBlocks => Value::Array(c.search_blocks(args.string("query")?).await),
        };
        Ok(output)
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
