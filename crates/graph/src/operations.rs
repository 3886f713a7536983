//! The fixed table of logical graph operations.
//!
//! Each [`Operation`] pairs a remote method name with the [`Policy`] that
//! normalizes its response. The policy is part of the operation's type, so
//! [`GraphClient`](crate::GraphClient) runs every call through one helper and
//! the return type follows from the constant it is given. Argument shapes are
//! built by the matching `GraphClient` method.

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::response::{into_list, into_opaque, into_properties, into_search_results, into_single};
use crate::RawResponse;

/// Normalization policy selected by an operation.
///
/// See [`crate::response`] for the rules behind each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// `Vec<Value>`; failures absorbed into an empty list.
    List,
    /// `Vec<Value>` with the extra `{blocks: …}` envelope.
    Search,
    /// `Option<Value>`; failures absorbed into `None`.
    SingleObject,
    /// `Value`; `result` unwrapped, failures surfaced.
    Opaque,
    /// `Map<String, Value>`; anything that is not a map becomes empty.
    Properties,
}

/// Turns a raw response into the fixed result type of an operation.
pub trait Policy {
    const SHAPE: ResultShape;
    type Output;

    fn normalize(raw: RawResponse) -> Self::Output;
}

/// Marker policies, one per [`ResultShape`].
pub mod policy {
    use super::*;

    pub enum List {}
    pub enum Search {}
    pub enum SingleObject {}
    pub enum Opaque {}
    pub enum Properties {}

    impl Policy for List {
        const SHAPE: ResultShape = ResultShape::List;
        type Output = Vec<Value>;

        fn normalize(raw: RawResponse) -> Self::Output {
            into_list(raw)
        }
    }

    impl Policy for Search {
        const SHAPE: ResultShape = ResultShape::Search;
        type Output = Vec<Value>;

        fn normalize(raw: RawResponse) -> Self::Output {
            into_search_results(raw)
        }
    }

    impl Policy for SingleObject {
        const SHAPE: ResultShape = ResultShape::SingleObject;
        type Output = Option<Value>;

        fn normalize(raw: RawResponse) -> Self::Output {
            into_single(raw)
        }
    }

    impl Policy for Opaque {
        const SHAPE: ResultShape = ResultShape::Opaque;
        type Output = Value;

        fn normalize(raw: RawResponse) -> Self::Output {
            into_opaque(raw)
        }
    }

    impl Policy for Properties {
        const SHAPE: ResultShape = ResultShape::Properties;
        type Output = Map<String, Value>;

        fn normalize(raw: RawResponse) -> Self::Output {
            into_properties(raw)
        }
    }
}

use policy::{List, Opaque, Properties, Search, SingleObject};

/// A remote method name and its result policy.
pub struct Operation<P> {
    /// Fully qualified plugin API method, e.g. `"logseq.Editor.getPage"`.
    pub method: &'static str,
    policy: PhantomData<fn() -> P>,
}

impl<P: Policy> Operation<P> {
    const fn new(method: &'static str) -> Self {
        Self {
            method,
            policy: PhantomData,
        }
    }

    pub fn shape(&self) -> ResultShape {
        P::SHAPE
    }

    pub fn normalize(&self, raw: RawResponse) -> P::Output {
        P::normalize(raw)
    }
}

impl<P> Clone for Operation<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Operation<P> {}

impl<P: Policy> fmt::Debug for Operation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("method", &self.method)
            .field("shape", &P::SHAPE)
            .finish()
    }
}

pub const GET_CURRENT_GRAPH: Operation<Opaque> = Operation::new("logseq.App.getCurrentGraph");
pub const GET_ALL_PAGES: Operation<List> = Operation::new("logseq.Editor.getAllPages");
pub const GET_PAGE: Operation<SingleObject> = Operation::new("logseq.Editor.getPage");
pub const CREATE_PAGE: Operation<Opaque> = Operation::new("logseq.Editor.createPage");
pub const DELETE_PAGE: Operation<Opaque> = Operation::new("logseq.Editor.deletePage");
pub const GET_PAGE_LINKED_REFERENCES: Operation<List> = Operation::new("logseq.Editor.getPageLinkedReferences");
pub const GET_PAGE_BLOCKS: Operation<List> = Operation::new("logseq.Editor.getPageBlocksTree");
pub const GET_BLOCK: Operation<SingleObject> = Operation::new("logseq.Editor.getBlock");
pub const GET_BLOCK_PROPERTIES: Operation<Properties> = Operation::new("logseq.Editor.getBlockProperties");
pub const CREATE_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.appendBlockInPage");
/// Insert as the last child of the parent.
pub const INSERT_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.insertBlock");
/// Insert as the first child of the parent.
pub const PREPEND_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.prependBlock");
pub const UPDATE_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.updateBlock");
pub const MOVE_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.moveBlock");
pub const REMOVE_BLOCK: Operation<Opaque> = Operation::new("logseq.Editor.removeBlock");
pub const SEARCH_BLOCKS: Operation<Search> = Operation::new("logseq.Editor.search");

#[cfg(test)]
#[path = "operations_test.rs"]
mod tests;
