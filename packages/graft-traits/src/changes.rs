/// A single structural change to the tree, identified by the root node of the
/// inserted or removed subtree.
///
/// Changes only ever name subtree *roots*: a node that is already inside a
/// still-attached subtree is never reported again. A node that moves within
/// the tree is reported as `Removed` followed by `Added`, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeChange {
    /// The subtree rooted at this node was attached to the observed tree.
    Added(usize),
    /// The subtree rooted at this node was detached from the observed tree.
    /// The nodes themselves remain readable until the batch has been processed.
    Removed(usize),
}

/// One coalesced notification of tree insertions and removals, in the order
/// the underlying mutations occurred. The engine processes a whole batch to
/// completion before starting the next one.
pub type ChangeBatch = Vec<TreeChange>;
