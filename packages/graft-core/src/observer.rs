//! Turns batched subtree insertions/removals into per-node lifecycle events.
//!
//! For each added subtree root, a depth-first pre-order walk emits `added`
//! for every relevant descendant (the root included); once a relevant node's
//! *entire* descendant walk has finished, `searched` fires for it, so
//! `searched` arrives bottom-up, and a parent can rely on its descendants
//! being fully constructed by the time it initializes. Removed subtrees get
//! the same walk emitting `removed`, with no `searched` phase.

use graft_dom::Document;
use graft_traits::{ChangeBatch, TreeChange};

/// Receives lifecycle-relevant tree events for nodes matching its own
/// relevance predicate.
pub trait TreeEventHandler {
    /// Whether this node carries anything the handler cares about.
    fn is_relevant(&self, doc: &Document, node_id: usize) -> bool;

    /// A relevant node entered the observed tree.
    fn added(&mut self, doc: &Document, node_id: usize);

    /// A relevant node's entire subtree has finished its `added` walk.
    fn searched(&mut self, doc: &Document, node_id: usize);

    /// A relevant node left the observed tree. Also fired for a removed
    /// root that is no longer readable, whose relevance cannot be checked.
    fn removed(&mut self, doc: &Document, node_id: usize);
}

/// Process one change batch to completion, in batch order.
pub fn process_batch<H: TreeEventHandler>(doc: &Document, batch: &ChangeBatch, handler: &mut H) {
    for change in batch {
        match *change {
            TreeChange::Added(root_id) => walk_added(doc, root_id, handler),
            TreeChange::Removed(root_id) => walk_removed(doc, root_id, handler),
        }
    }
}

/// Walk an added subtree, emitting `added` pre-order and `searched`
/// post-order for relevant nodes.
pub fn walk_added<H: TreeEventHandler>(doc: &Document, node_id: usize, handler: &mut H) {
    let Some(node) = doc.get_node(node_id) else {
        return;
    };
    if !node.is_element() {
        return;
    }

    let relevant = handler.is_relevant(doc, node_id);
    if relevant {
        handler.added(doc, node_id);
    }

    for child_id in node.children.iter().copied() {
        walk_added(doc, child_id, handler);
    }

    if relevant {
        handler.searched(doc, node_id);
    }
}

/// Walk a removed subtree, emitting `removed` pre-order for relevant nodes.
///
/// A root that is already gone from the document (dropped before its batch
/// was processed) is still reported: its descendants can no longer be
/// walked, so handlers tracking per-node state must treat a missing node as
/// "its whole subtree left".
pub fn walk_removed<H: TreeEventHandler>(doc: &Document, node_id: usize, handler: &mut H) {
    let Some(node) = doc.get_node(node_id) else {
        handler.removed(doc, node_id);
        return;
    };
    if !node.is_element() {
        return;
    }

    if handler.is_relevant(doc, node_id) {
        handler.removed(doc, node_id);
    }

    for child_id in node.children.iter().copied() {
        walk_removed(doc, child_id, handler);
    }
}
