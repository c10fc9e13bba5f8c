//! A headless, slab-backed node tree for the graft component engine.
//!
//! The tree is deliberately minimal: nodes carry a name, an ordered attribute
//! list and structural links, nothing else. All structural mutation goes
//! through [`DocumentMutator`], which records the roots of inserted and
//! removed subtrees and flushes them as one [`ChangeBatch`](graft_traits::ChangeBatch)
//! when it is dropped, the same "mutate, then flush deferred work on drop"
//! shape a browser's coalesced mutation notifications have. The engine drains
//! those batches and never observes a half-applied mutation.

mod document;
mod mutator;
mod node;
mod traversal;

pub use document::Document;
pub use mutator::DocumentMutator;
pub use node::{Attribute, Attributes, ElementData, Node, NodeData, TextData};
pub use traversal::{AncestorTraverser, TreeTraverser};
