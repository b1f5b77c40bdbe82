//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`GlintError`] covers the failure modes of graph
//! traversal and flattening:
//! - Stale or missing node handles
//! - Broken parent back-references
//! - Runaway traversals (a cyclic graph)
//! - Missing material assets during flattening
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, GlintError>`.

use thiserror::Error;

use crate::scene::{MaterialKey, NodeKey};

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum GlintError {
    // ========================================================================
    // Graph Errors
    // ========================================================================
    /// A node handle did not resolve in the scene graph.
    #[error("node not found in scene graph: {0:?}")]
    NodeNotFound(NodeKey),

    /// A parent back-reference pointed at a node that no longer exists.
    #[error("dangling parent reference {parent:?} on node {node:?}")]
    DanglingParent {
        /// The node whose back-reference list is broken
        node: NodeKey,
        /// The stale parent handle
        parent: NodeKey,
    },

    /// Traversal descended past the depth budget. Scene graphs must be
    /// acyclic; hitting this almost always means a cycle was wired in.
    #[error("traversal exceeded maximum depth {max_depth}; the scene graph may contain a cycle")]
    TraversalDepthExceeded {
        /// The depth budget that was exhausted
        max_depth: usize,
    },

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// A material referenced by the graph was removed from the pool.
    #[error("material not found: {0:?}")]
    MaterialNotFound(MaterialKey),
}

/// Alias for `Result<T, GlintError>`.
pub type Result<T> = std::result::Result<T, GlintError>;
