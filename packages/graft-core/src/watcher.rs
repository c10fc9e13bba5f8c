use graft_dom::Document;
use graft_traits::SharedComponent;
use rustc_hash::FxHashMap;

use crate::declaration::{self, AttrSchema, Declaration};
use crate::observer::{self, TreeEventHandler};
use crate::registry::{Registry, ResolveError};
use crate::value::{self, ValueParseError};

/// A failure attaching one declaration. Always contained to that single
/// declaration: sibling declarations, other nodes and later batches are
/// unaffected.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// No ancestor carries the declaration's parent attribute, or the
    /// ancestor that does has no live instance under the expected id.
    #[error("component `{id}` has no parent instance `{parent_id}` on any ancestor")]
    MissingParentInstance { id: String, parent_id: String },
    #[error(transparent)]
    Value(#[from] ValueParseError),
    /// The definition's own constructor failed.
    #[error("component construction failed: {0}")]
    Create(Box<dyn std::error::Error>),
}

struct HostedComponent {
    instance: SharedComponent,
    initialized: bool,
}

/// Per-node store of live component instances, keyed by declared id.
type Host = FxHashMap<String, HostedComponent>;

/// The lifecycle orchestrator.
///
/// Subscribes to the document's change batches, drives the declaration
/// parser and the registry to instantiate components, tracks instances per
/// node, performs the two-phase bring-up (instantiate the whole subtree,
/// then initialize bottom-up) and the teardown pass, and resolves
/// parent/child component references across nodes.
///
/// Owns its [`Registry`] rather than reading ambient global state, so
/// multiple independent watchers can coexist in one process.
pub struct Watcher {
    schema: AttrSchema,
    registry: Registry,
    hosts: FxHashMap<usize, Host>,
}

impl Watcher {
    pub fn new(registry: Registry) -> Self {
        Self::with_schema(registry, AttrSchema::default())
    }

    pub fn with_schema(registry: Registry, schema: AttrSchema) -> Self {
        Self {
            schema,
            registry,
            hosts: FxHashMap::default(),
        }
    }

    pub fn schema(&self) -> &AttrSchema {
        &self.schema
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registration is expected during startup/configuration, but merging
    /// more definitions between polls is safe.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The live instance for `(node, declared id)`, if one exists.
    pub fn instance(&self, node_id: usize, id: &str) -> Option<SharedComponent> {
        self.hosts
            .get(&node_id)
            .and_then(|host| host.get(id))
            .map(|hosted| hosted.instance.clone())
    }

    /// Whether the node currently hosts at least one live instance.
    pub fn has_instances(&self, node_id: usize) -> bool {
        self.hosts.contains_key(&node_id)
    }

    /// Entry point: begin managing `root_id`'s subtree, walking it as if it
    /// had just been added.
    pub fn attach(&mut self, doc: &Document, root_id: usize) {
        observer::walk_added(doc, root_id, self);
    }

    /// Drain and process the document's pending change batches. Each batch
    /// runs to completion before the next one starts.
    pub fn poll(&mut self, doc: &mut Document) {
        while let Some(batch) = doc.next_batch() {
            observer::process_batch(doc, &batch, self);
        }
    }

    fn create_components(&mut self, doc: &Document, node_id: usize) {
        let Some(node) = doc.get_node(node_id) else {
            return;
        };

        for decl in declaration::parse_declarations(node, &self.schema) {
            let already_hosted = self
                .hosts
                .get(&node_id)
                .is_some_and(|host| host.contains_key(&decl.id));
            if already_hosted {
                // Creation is idempotent: re-observing an instantiated id is
                // a no-op.
                continue;
            }

            match self.create_component(doc, node_id, &decl) {
                Ok(instance) => {
                    self.hosts.entry(node_id).or_default().insert(
                        decl.id.clone(),
                        HostedComponent {
                            instance,
                            initialized: false,
                        },
                    );
                }
                Err(AttachError::Resolve(ResolveError::MissingDefinition { .. }))
                    if decl.parent_attr.is_none() =>
                {
                    // Not a child awaiting a parent and no definition exists:
                    // unresolvable by design, not by error.
                    #[cfg(feature = "tracing")]
                    tracing::warn!("definition of component `{}` not found", decl.id);
                }
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("failed to attach component `{}`: {_err}", decl.id);
                }
            }
        }
    }

    fn create_component(
        &self,
        doc: &Document,
        node_id: usize,
        decl: &Declaration,
    ) -> Result<SharedComponent, AttachError> {
        let definition = self.registry.resolve(&decl.id, self.schema.separator)?;

        let parent = match decl.parent_attr.as_deref() {
            Some(parent_attr) => Some(self.resolve_parent(doc, node_id, decl, parent_attr)?),
            None => None,
        };

        let input = value::parse_value(&decl.raw_value)?;
        definition
            .create(node_id, &input, parent.as_ref())
            .map_err(AttachError::Create)
    }

    /// Locate the parent instance for a nested declaration by walking the
    /// node's ancestors until one carries the parent attribute, then looking
    /// up the parent id in that ancestor's host. Failure is permanent for
    /// this mutation; a later attribute change counts as a new declaration.
    fn resolve_parent(
        &self,
        doc: &Document,
        node_id: usize,
        decl: &Declaration,
        parent_attr: &str,
    ) -> Result<SharedComponent, AttachError> {
        let parent_id = decl.parent_id.as_deref().unwrap_or_default();
        let missing = || AttachError::MissingParentInstance {
            id: decl.id.clone(),
            parent_id: parent_id.to_string(),
        };

        for ancestor_id in doc.ancestor_ids(node_id) {
            let Some(ancestor) = doc.get_node(ancestor_id) else {
                continue;
            };
            if ancestor.attr(parent_attr).is_some() {
                return self
                    .hosts
                    .get(&ancestor_id)
                    .and_then(|host| host.get(parent_id))
                    .map(|hosted| hosted.instance.clone())
                    .ok_or_else(missing);
            }
        }

        Err(missing())
    }

    fn init_components(&mut self, node_id: usize) {
        let Some(host) = self.hosts.get_mut(&node_id) else {
            return;
        };
        for hosted in host.values_mut() {
            if !hosted.initialized {
                hosted.instance.borrow_mut().init();
                hosted.initialized = true;
            }
        }
    }

    fn destroy_components(&mut self, node_id: usize) {
        let Some(host) = self.hosts.remove(&node_id) else {
            return;
        };
        for hosted in host.into_values() {
            hosted.instance.borrow_mut().destroy();
        }
    }

    /// Destroy every host whose node is gone from the document. Reached when
    /// a removed subtree was dropped before its batch was processed: the
    /// batch still names the root, but the descendants carrying the other
    /// hosts can no longer be walked. The sweep also keeps a stale host from
    /// shadowing a new node that reuses the freed id.
    fn destroy_dangling_components(&mut self, doc: &Document) {
        let dangling: Vec<usize> = self
            .hosts
            .keys()
            .copied()
            .filter(|node_id| doc.get_node(*node_id).is_none())
            .collect();
        for node_id in dangling {
            self.destroy_components(node_id);
        }
    }
}

impl TreeEventHandler for Watcher {
    fn is_relevant(&self, doc: &Document, node_id: usize) -> bool {
        declaration::has_declarations(&doc[node_id], &self.schema)
    }

    fn added(&mut self, doc: &Document, node_id: usize) {
        self.create_components(doc, node_id);
    }

    fn searched(&mut self, _doc: &Document, node_id: usize) {
        self.init_components(node_id);
    }

    fn removed(&mut self, doc: &Document, node_id: usize) {
        self.destroy_components(node_id);
        if doc.get_node(node_id).is_none() {
            self.destroy_dangling_components(doc);
        }
    }
}
