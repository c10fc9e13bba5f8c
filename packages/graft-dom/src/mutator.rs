use graft_traits::TreeChange;

use crate::document::Document;
use crate::node::Attribute;

pub enum SetTextErr {
    /// The node is not a text node
    NotTextNode,
}

/// Records a batch of structural mutations against a [`Document`].
///
/// Only the roots of subtrees that cross the attached/detached boundary are
/// recorded: building up a detached subtree produces no records, and
/// attaching it later produces a single `Added` for its root. A node moved
/// between two attached positions produces `Removed` then `Added`, in that
/// order. The batch is flushed into the document's pending queue on drop.
pub struct DocumentMutator<'doc> {
    /// Document is public as an escape hatch, but users of this API should
    /// ideally avoid using it and prefer exposing additional functionality
    /// in DocumentMutator.
    pub doc: &'doc mut Document,
    changes: Vec<TreeChange>,
}

impl Drop for DocumentMutator<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl DocumentMutator<'_> {
    pub fn new(doc: &mut Document) -> DocumentMutator<'_> {
        DocumentMutator {
            doc,
            changes: Vec::new(),
        }
    }

    pub fn create_element(&mut self, name: &str, attrs: Vec<Attribute>) -> usize {
        self.doc.create_element(name, attrs)
    }

    pub fn create_text_node(&mut self, text: &str) -> usize {
        self.doc.create_text_node(text)
    }

    pub fn append_children(&mut self, parent_id: usize, child_ids: &[usize]) {
        for child_id in child_ids.iter().copied() {
            self.detach_recorded(child_id);
            self.doc.append(parent_id, child_id);
            if self.doc.is_attached(parent_id) {
                self.changes.push(TreeChange::Added(child_id));
            }
        }
    }

    pub fn insert_nodes_before(&mut self, anchor_id: usize, new_ids: &[usize]) {
        for new_id in new_ids.iter().copied() {
            self.detach_recorded(new_id);
            self.doc.insert_before(anchor_id, new_id);
            if self.doc.is_attached(anchor_id) {
                self.changes.push(TreeChange::Added(new_id));
            }
        }
    }

    pub fn insert_nodes_after(&mut self, anchor_id: usize, new_ids: &[usize]) {
        let next_sibling_id = self.next_sibling_id(anchor_id);
        match next_sibling_id {
            Some(anchor_id) => self.insert_nodes_before(anchor_id, new_ids),
            None => {
                let parent_id = self.doc[anchor_id]
                    .parent
                    .expect("insert_nodes_after anchor has no parent");
                self.append_children(parent_id, new_ids);
            }
        }
    }

    /// Detach the subtree rooted at `node_id`. The nodes stay readable until
    /// the batch has been processed; use [`Document::drop_subtree`] afterwards
    /// to free them.
    pub fn remove_node(&mut self, node_id: usize) {
        self.detach_recorded(node_id);
    }

    pub fn set_attribute(&mut self, node_id: usize, name: &str, value: &str) {
        if let Some(element) = self.doc[node_id].element_data_mut() {
            element.attrs.set(name, value);
        }
    }

    pub fn clear_attribute(&mut self, node_id: usize, name: &str) {
        if let Some(element) = self.doc[node_id].element_data_mut() {
            element.attrs.remove(name);
        }
    }

    pub fn set_node_text(&mut self, node_id: usize, value: &str) -> Result<(), SetTextErr> {
        match self.doc[node_id].text_data_mut() {
            Some(data) => {
                data.content.clear();
                data.content.push_str(value);
                Ok(())
            }
            None => Err(SetTextErr::NotTextNode),
        }
    }

    pub fn next_sibling_id(&self, node_id: usize) -> Option<usize> {
        let parent_id = self.doc[node_id].parent?;
        let siblings = &self.doc[parent_id].children;
        let index = siblings.iter().position(|id| *id == node_id)?;
        siblings.get(index + 1).copied()
    }

    pub fn flush(&mut self) {
        if !self.changes.is_empty() {
            let batch = std::mem::take(&mut self.changes);
            self.doc.push_batch(batch);
        }
    }

    fn detach_recorded(&mut self, node_id: usize) {
        if self.doc.is_attached(node_id) {
            self.changes.push(TreeChange::Removed(node_id));
        }
        self.doc.detach(node_id);
    }
}
