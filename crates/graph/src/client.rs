//! The operation façade.
//!
//! [`GraphClient`] exposes one method per logical graph operation. Each method
//! builds the remote argument list, sends it through the configured
//! [`RpcInvoker`], and normalizes the raw response with the policy carried by
//! its [`Operation`]. No method returns `Err` or panics: the declared return
//! type is the whole contract, whatever the remote endpoint sends back.

use serde_json::{json, Map, Value};

use crate::operations::{self as ops, Operation, Policy};
use crate::{BlockId, PageName, RpcInvoker};

/// Optional property map attached to a created or updated page or block.
pub type Properties = Map<String, Value>;

/// Typed access to a Logseq graph over a generic RPC invoker.
#[derive(Debug, Clone)]
pub struct GraphClient<I> {
    invoker: I,
}

impl<I: RpcInvoker> GraphClient<I> {
    /// Wraps an invoker. The client holds no other state.
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// Returns the underlying invoker.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    // -----------------------------------------------------------------------
    // Graph
    // -----------------------------------------------------------------------

    /// Information about the currently open graph.
    pub async fn get_current_graph(&self) -> Value {
        self.run(ops::GET_CURRENT_GRAPH, Vec::new()).await
    }

    // -----------------------------------------------------------------------
    // Pages
    // -----------------------------------------------------------------------

    /// All pages in the graph. Journal pages carry `"journal?": true` and a
    /// numeric `journalDay` (`YYYYMMDD`).
    pub async fn get_all_pages(&self) -> Vec<Value> {
        self.run(ops::GET_ALL_PAGES, Vec::new()).await
    }

    /// A page by name, or `None` when it does not exist or the call failed.
    pub async fn get_page(&self, name: &PageName) -> Option<Value> {
        self.run(ops::GET_PAGE, vec![name.into()]).await
    }

    pub async fn create_page(&self, name: &PageName, properties: Option<&Properties>) -> Value {
        let args = with_properties(vec![name.into()], properties);
        self.run(ops::CREATE_PAGE, args).await
    }

    /// Deletes a page and all of its blocks.
    pub async fn delete_page(&self, name: &PageName) -> Value {
        self.run(ops::DELETE_PAGE, vec![name.into()]).await
    }

    /// Blocks on other pages that link to `name`.
    pub async fn get_page_linked_references(&self, name: &PageName) -> Vec<Value> {
        self.run(ops::GET_PAGE_LINKED_REFERENCES, vec![name.into()]).await
    }

    /// The block tree of a page.
    pub async fn get_page_blocks(&self, name: &PageName) -> Vec<Value> {
        self.run(ops::GET_PAGE_BLOCKS, vec![name.into()]).await
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    /// A block by id, or `None` when it does not exist or the call failed.
    pub async fn get_block(&self, id: &BlockId) -> Option<Value> {
        self.run(ops::GET_BLOCK, vec![id.into()]).await
    }

    pub async fn get_block_properties(&self, id: &BlockId) -> Properties {
        self.run(ops::GET_BLOCK_PROPERTIES, vec![id.into()]).await
    }

    /// Appends a block to the end of a page.
    pub async fn create_block(&self, page: &PageName, content: &str, properties: Option<&Properties>) -> Value {
        let args = with_properties(vec![page.into(), json!(content)], properties);
        self.run(ops::CREATE_BLOCK, args).await
    }

    /// Inserts a child block under `parent`.
    ///
    /// `before` selects the remote method: `true` prepends as the first child,
    /// `false` appends as the last. The argument list is the same either way.
    pub async fn insert_block(
        &self,
        parent: &BlockId,
        content: &str,
        properties: Option<&Properties>,
        before: bool,
    ) -> Value {
        let op = if before { ops::PREPEND_BLOCK } else { ops::INSERT_BLOCK };
        let args = with_properties(vec![parent.into(), json!(content)], properties);
        self.run(op, args).await
    }

    pub async fn update_block(&self, id: &BlockId, content: &str, properties: Option<&Properties>) -> Value {
        let args = with_properties(vec![id.into(), json!(content)], properties);
        self.run(ops::UPDATE_BLOCK, args).await
    }

    /// Moves a block, with its children, next to or under `target`.
    ///
    /// The remote method takes a single record rather than positional
    /// arguments.
    pub async fn move_block(&self, id: &BlockId, target: &BlockId, as_child: bool) -> Value {
        let record = json!({
            "srcUUID": id.as_str(),
            "targetUUID": target.as_str(),
            "isChild": as_child,
        });
        self.run(ops::MOVE_BLOCK, vec![record]).await
    }

    /// Removes a block and all of its children.
    pub async fn remove_block(&self, id: &BlockId) -> Value {
        self.run(ops::REMOVE_BLOCK, vec![id.into()]).await
    }

    /// Full-text block search. Failures yield an empty list.
    pub async fn search_blocks(&self, query: &str) -> Vec<Value> {
        self.run(ops::SEARCH_BLOCKS, vec![json!(query)]).await
    }

    async fn run<P: Policy>(&self, op: Operation<P>, args: Vec<Value>) -> P::Output {
        tracing::debug!(method = op.method, shape = ?op.shape(), arg_count = args.len(), "graph operation");
        let raw = self.invoker.invoke(op.method, args).await;
        op.normalize(raw)
    }
}

/// Appends `properties` as the trailing argument when present and non-empty.
fn with_properties(mut args: Vec<Value>, properties: Option<&Properties>) -> Vec<Value> {
    if let Some(props) = properties.filter(|p| !p.is_empty()) {
        args.push(Value::Object(props.clone()));
    }
    args
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
