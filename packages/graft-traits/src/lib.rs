//! Trait seams and shared types for the graft component engine.
//!
//! This crate defines the boundary between the attachment engine
//! ([graft-core](https://docs.rs/graft-core)) and the code on either side of it:
//!
//!  - The tree side produces [`TreeChange`] records grouped into [`ChangeBatch`]es
//!    (one producer is `graft_dom::DocumentMutator`, but any source of batches
//!    can drive the engine).
//!  - The component side implements [`ComponentDefinition`] (a constructor,
//!    optionally with a registry of child definitions) and [`Component`]
//!    (the instance capability surface: `init` and `destroy`).

mod changes;
mod component;
pub mod options;

pub use changes::{ChangeBatch, TreeChange};
pub use component::{Component, ComponentDefinition, Input, SharedComponent, shared};
