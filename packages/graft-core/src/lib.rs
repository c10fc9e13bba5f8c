//! The declarative component attachment engine.
//!
//! This crate watches a live, mutable tree of nodes
//! ([`Document`](graft_dom::Document)), detects component declarations
//! encoded in node attributes (`ob-slider="..."`, `ob-slider-slide`), and
//! manages the creation, initialization, parent-linking and destruction of
//! the component instances bound to those nodes as the tree changes.
//!
//! The pieces, leaves first:
//!
//!  - [`declaration`]: the attribute naming grammar. `ob-slider-slide`
//!    parses into an id path (`slider-slide`), a leaf name (`slide`) and the
//!    attribute naming the parent declaration (`ob-slider`).
//!  - [`parse_value`]: the attribute payload grammar, strict JSON for
//!    payloads starting with `{`, a permissive shorthand config grammar for
//!    everything else.
//!  - [`Registry`]: the injectable map from id paths to
//!    [`ComponentDefinition`](graft_traits::ComponentDefinition)s, with
//!    nested child lookup.
//!  - [`observer`]: turns `Added`/`Removed` subtree roots from a
//!    [`ChangeBatch`](graft_traits::ChangeBatch) into per-node `added`,
//!    `searched` (bottom-up) and `removed` events.
//!  - [`Watcher`]: the lifecycle orchestrator tying the above together. Call
//!    [`Watcher::attach`] to perform the initial walk and [`Watcher::poll`]
//!    whenever the document may have pending change batches.

mod config;
pub mod declaration;
pub mod observer;
mod registry;
mod value;
mod watcher;

pub use declaration::{AttrSchema, Declaration, has_declarations, parse_declarations};
pub use observer::{TreeEventHandler, process_batch, walk_added, walk_removed};
pub use registry::{DefinitionEntry, NestedDefinitions, Registry, ResolveError};
pub use value::{ValueParseError, parse_value};
pub use watcher::{AttachError, Watcher};
