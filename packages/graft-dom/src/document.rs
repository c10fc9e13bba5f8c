use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use graft_traits::ChangeBatch;
use slab::Slab;

use crate::mutator::DocumentMutator;
use crate::node::{Attribute, Attributes, ElementData, Node, NodeData, TextData};
use crate::traversal::AncestorTraverser;

/// A slab-backed tree of nodes.
///
/// The document owns the nodes and a queue of pending [`ChangeBatch`]es
/// recorded by [`DocumentMutator`]. Detached subtrees stay in the slab until
/// explicitly dropped, so a consumer processing a `Removed` record can still
/// walk the subtree it names.
pub struct Document {
    pub(crate) nodes: Box<Slab<Node>>,
    root_id: usize,
    pending: VecDeque<ChangeBatch>,
}

impl Document {
    /// Create a new document containing only a root element.
    pub fn new() -> Self {
        let mut nodes = Box::new(Slab::new());
        let entry = nodes.vacant_entry();
        let root_id = entry.key();
        entry.insert(Node::new(
            root_id,
            NodeData::Element(ElementData {
                name: "root".to_string(),
                attrs: Attributes::default(),
            }),
        ));

        Self {
            nodes,
            root_id,
            pending: VecDeque::new(),
        }
    }

    pub fn root_id(&self) -> usize {
        self.root_id
    }

    pub fn get_node(&self, node_id: usize) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_node_mut(&mut self, node_id: usize) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn create_node(&mut self, data: NodeData) -> usize {
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, data));
        id
    }

    pub fn create_element(&mut self, name: &str, attrs: Vec<Attribute>) -> usize {
        self.create_node(NodeData::Element(ElementData {
            name: name.to_string(),
            attrs: Attributes::new(attrs),
        }))
    }

    pub fn create_text_node(&mut self, text: &str) -> usize {
        self.create_node(NodeData::Text(TextData {
            content: text.to_string(),
        }))
    }

    /// Whether the node is reachable from the root (detached subtrees and
    /// freshly created nodes are not).
    pub fn is_attached(&self, node_id: usize) -> bool {
        let mut current = node_id;
        loop {
            if current == self.root_id {
                return true;
            }
            match self.nodes.get(current).and_then(|node| node.parent) {
                Some(parent_id) => current = parent_id,
                None => return false,
            }
        }
    }

    /// The node's ancestor ids, nearest first.
    pub fn ancestor_ids(&self, node_id: usize) -> AncestorTraverser<'_> {
        AncestorTraverser::new(self, node_id)
    }

    /// Begin a batch of mutations. The batch is flushed into the pending
    /// change queue when the returned mutator is dropped.
    pub fn mutate(&mut self) -> DocumentMutator<'_> {
        DocumentMutator::new(self)
    }

    /// Pop the oldest unprocessed change batch, if any.
    pub fn next_batch(&mut self) -> Option<ChangeBatch> {
        self.pending.pop_front()
    }

    pub(crate) fn push_batch(&mut self, batch: ChangeBatch) {
        self.pending.push_back(batch);
    }

    pub(crate) fn append(&mut self, parent_id: usize, child_id: usize) {
        self.nodes[parent_id].children.push(child_id);
        self.nodes[child_id].parent = Some(parent_id);
    }

    pub(crate) fn insert_before(&mut self, anchor_id: usize, new_id: usize) {
        let parent_id = self.nodes[anchor_id]
            .parent
            .expect("insert_before anchor has no parent");
        let index = self.nodes[parent_id]
            .children
            .iter()
            .position(|id| *id == anchor_id)
            .expect("anchor is not a child of its parent");
        self.nodes[parent_id].children.insert(index, new_id);
        self.nodes[new_id].parent = Some(parent_id);
    }

    /// Unlink the node from its parent. The subtree stays in the slab.
    pub(crate) fn detach(&mut self, node_id: usize) {
        if let Some(parent_id) = self.nodes[node_id].parent.take() {
            self.nodes[parent_id].children.retain(|id| *id != node_id);
        }
    }

    /// Drop a detached subtree from the slab, freeing its nodes.
    ///
    /// A pending batch may still name the subtree's root; consumers see the
    /// `Removed` record but can no longer walk the nodes it covered, so
    /// dropping is best deferred until pending batches have been processed.
    pub fn drop_subtree(&mut self, node_id: usize) {
        let Some(node) = self.nodes.get(node_id) else {
            return;
        };
        debug_assert!(node.parent.is_none(), "dropping an attached subtree");

        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            let node = self.nodes.remove(id);
            stack.extend(node.children);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Document {
    type Output = Node;
    fn index(&self, node_id: usize) -> &Self::Output {
        &self.nodes[node_id]
    }
}

impl IndexMut<usize> for Document {
    fn index_mut(&mut self, node_id: usize) -> &mut Self::Output {
        &mut self.nodes[node_id]
    }
}
