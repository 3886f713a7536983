//! The static catalogue of exposed tools.
//!
//! Descriptions are written for the calling agent: they carry the page naming
//! conventions and the warnings for destructive operations.

use serde_json::{json, Value};

/// Every tool the registry can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    GetCurrentGraph,
    GetAllPages,
    GetPage,
    CreatePage,
    DeletePage,
    GetPageLinkedReferences,
    GetPageBlocks,
    GetBlock,
    GetBlockProperties,
    CreateBlock,
    InsertBlock,
    UpdateBlock,
    MoveBlock,
    RemoveBlock,
    SearchBlocks,
}

impl Tool {
    pub const ALL: [Tool; 15] = [
        Tool::GetCurrentGraph,
        Tool::GetAllPages,
        Tool::GetPage,
        Tool::CreatePage,
        Tool::DeletePage,
        Tool::GetPageLinkedReferences,
        Tool::GetPageBlocks,
        Tool::GetBlock,
        Tool::GetBlockProperties,
        Tool::CreateBlock,
        Tool::InsertBlock,
        Tool::UpdateBlock,
        Tool::MoveBlock,
        Tool::RemoveBlock,
        Tool::SearchBlocks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::GetCurrentGraph => "get_current_graph",
            Tool::GetAllPages => "get_all_pages",
            Tool::GetPage => "get_page",
            Tool::CreatePage => "create_page",
            Tool::DeletePage => "delete_page",
            Tool::GetPageLinkedReferences => "get_page_linked_references",
            Tool::GetPageBlocks => "get_page_blocks",
            Tool::GetBlock => "get_block",
            Tool::GetBlockProperties => "get_block_properties",
            Tool::CreateBlock => "create_block",
            Tool::InsertBlock => "insert_block",
            Tool::UpdateBlock => "update_block",
            Tool::MoveBlock => "move_block",
            Tool::RemoveBlock => "remove_block",
            Tool::SearchBlocks => "search_blocks",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::GetCurrentGraph => "Gets information about the Logseq graph that is currently open.",
            Tool::GetAllPages => {
                "Gets all pages from the Logseq graph. Journal pages have \"journal?\": true and a \
                 \"journalDay\" attribute in the format YYYYMMDD."
            }
            Tool::GetPage => {
                "Gets a page by name, or null if it does not exist. For journal pages use the format \
                 \"mmm dth, yyyy\" (e.g. \"Apr 4th, 2025\")."
            }
            Tool::CreatePage => {
                "Creates a new page, optionally with properties. For journal pages use the format \
                 \"mmm dth, yyyy\"; Logseq sets \"journal?\" and \"journalDay\" automatically."
            }
            Tool::DeletePage => "Deletes a page and all of its blocks. This cannot be undone.",
            Tool::GetPageLinkedReferences => {
                "Gets the blocks that contain [[Page Name]] links to the given page."
            }
            Tool::GetPageBlocks => {
                "Gets the block tree of a page. Blocks carry \"parent\", \"level\" (1 for top-level) \
                 and \"left\" to describe the hierarchy."
            }
            Tool::GetBlock => "Gets a block by its UUID, or null if it does not exist.",
            Tool::GetBlockProperties => "Gets the property map of a block; empty when it has none.",
            Tool::CreateBlock => {
                "Appends a new block to the end of a page. Use [[Page Name]] in the content to link \
                 to other pages."
            }
            Tool::InsertBlock => {
                "Inserts a new block as a child of the given parent block: first child when \
                 before=true, last child otherwise."
            }
            Tool::UpdateBlock => "Replaces the content (and optionally properties) of an existing block.",
            Tool::MoveBlock => {
                "Moves a block and its children. as_child=true makes it a child of the target; \
                 otherwise it becomes the sibling after the target."
            }
            Tool::RemoveBlock => "Removes a block and all of its children. This cannot be undone.",
            Tool::SearchBlocks => {
                "Searches for blocks matching a query, e.g. page:\"Page Name\", \"search term\" or \
                 [[Page Name]]."
            }
        }
    }

    /// JSON Schema for the tool's `arguments` object.
    pub fn input_schema(self) -> Value {
        let page_name = json!({ "type": "string", "description": "Name of the page." });
        let block_id = json!({ "type": "string", "description": "UUID of the block." });
        let content = json!({ "type": "string", "description": "Block content (Markdown)." });
        let properties = json!({ "type": "object", "description": "Optional properties to set." });

        match self {
            Tool::GetCurrentGraph | Tool::GetAllPages => object_schema(json!({}), &[]),
            Tool::GetPage | Tool::DeletePage => object_schema(json!({ "name": page_name }), &["name"]),
            Tool::CreatePage => object_schema(
                json!({ "name": page_name, "properties": properties }),
                &["name"],
            ),
            Tool::GetPageLinkedReferences | Tool::GetPageBlocks => {
                object_schema(json!({ "page_name": page_name }), &["page_name"])
            }
            Tool::GetBlock | Tool::GetBlockProperties | Tool::RemoveBlock => {
                object_schema(json!({ "block_id": block_id }), &["block_id"])
            }
            Tool::CreateBlock => object_schema(
                json!({ "page_name": page_name, "content": content, "properties": properties }),
                &["page_name", "content"],
            ),
            Tool::InsertBlock => object_schema(
                json!({
                    "parent_block_id": block_id,
                    "content": content,
                    "properties": properties,
                    "before": { "type": "boolean", "default": false, "description": "Insert as the first child instead of the last." }
                }),
                &["parent_block_id", "content"],
            ),
            Tool::UpdateBlock => object_schema(
                json!({ "block_id": block_id, "content": content, "properties": properties }),
                &["block_id", "content"],
            ),
            Tool::MoveBlock => object_schema(
                json!({
                    "block_id": block_id,
                    "target_block_id": { "type": "string", "description": "UUID of the target block." },
                    "as_child": { "type": "boolean", "default": false, "description": "Make the block a child of the target." }
                }),
                &["block_id", "target_block_id"],
            ),
            Tool::SearchBlocks => object_schema(
                json!({ "query": { "type": "string", "description": "Search query." } }),
                &["query"],
            ),
        }
    }

    /// The MCP `tools/list` entry for this tool.
    pub fn definition(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}

/// MCP `tools/list` entries for every tool, in catalogue order.
pub fn tool_definitions() -> Vec<Value> {
    Tool::ALL.into_iter().map(Tool::definition).collect()
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
