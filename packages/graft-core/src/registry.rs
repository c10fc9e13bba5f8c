use std::sync::Arc;

use graft_traits::ComponentDefinition;
use rustc_hash::FxHashMap;

/// A registered entry: either a constructor, or a nested map of child
/// entries with an optional base constructor standing in for the map itself.
#[derive(Clone)]
pub enum DefinitionEntry {
    Definition(Arc<dyn ComponentDefinition>),
    Nested(NestedDefinitions),
}

impl DefinitionEntry {
    pub fn definition<D: ComponentDefinition + 'static>(definition: D) -> Self {
        Self::Definition(Arc::new(definition))
    }
}

#[derive(Clone, Default)]
pub struct NestedDefinitions {
    /// Fallback constructor used when the id path ends on this map.
    pub base: Option<Arc<dyn ComponentDefinition>>,
    pub children: FxHashMap<String, DefinitionEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No constructor exists for the id: either its first segment is
    /// unregistered, or the path ends on a nested map with no base.
    #[error("no definition registered for component `{id}`")]
    MissingDefinition { id: String },
    /// An intermediate segment of a nested id path is missing.
    #[error("component `{id}` has no child definition `{segment}`")]
    MissingChildDefinition { id: String, segment: String },
}

/// The component registry: a mapping from top-level names to definitions,
/// supporting nested child lookup for multi-segment id paths.
///
/// Explicit and injectable: pass one into a
/// [`Watcher`](crate::Watcher) rather than reading ambient global state, so
/// independent orchestrators can coexist in one process. Append-only for the
/// registry's lifetime; `resolve` is a pure read.
#[derive(Clone, Default)]
pub struct Registry {
    entries: FxHashMap<String, DefinitionEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge entries into the registry. Later registrations for the same
    /// top-level name replace earlier ones (last-write-wins, no conflict
    /// detection). The whole merge is applied atomically as one call.
    pub fn register<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, DefinitionEntry)>,
    {
        self.entries.extend(entries);
    }

    /// Resolve a full id path (`slider-slide-handle`) to its constructor.
    ///
    /// The first segment is looked up in the top-level map; every remaining
    /// segment is looked up in the previously resolved entry's child
    /// registry: the nested map for [`DefinitionEntry::Nested`], the
    /// definition's own [`child`](ComponentDefinition::child) lookup for
    /// [`DefinitionEntry::Definition`].
    pub fn resolve(
        &self,
        id: &str,
        separator: char,
    ) -> Result<Arc<dyn ComponentDefinition>, ResolveError> {
        let mut segments = id.split(separator);
        let first = segments.next().unwrap_or_default();

        let mut cursor = match self.entries.get(first) {
            Some(entry) => Cursor::new(entry),
            None => {
                return Err(ResolveError::MissingDefinition { id: id.to_string() });
            }
        };

        for segment in segments {
            cursor = cursor
                .child(segment)
                .ok_or_else(|| ResolveError::MissingChildDefinition {
                    id: id.to_string(),
                    segment: segment.to_string(),
                })?;
        }

        cursor
            .into_definition()
            .ok_or_else(|| ResolveError::MissingDefinition { id: id.to_string() })
    }
}

enum Cursor<'a> {
    Definition(Arc<dyn ComponentDefinition>),
    Nested(&'a NestedDefinitions),
}

impl<'a> Cursor<'a> {
    fn new(entry: &'a DefinitionEntry) -> Self {
        match entry {
            DefinitionEntry::Definition(definition) => Self::Definition(definition.clone()),
            DefinitionEntry::Nested(nested) => Self::Nested(nested),
        }
    }

    fn child(self, segment: &str) -> Option<Cursor<'a>> {
        match self {
            Self::Definition(definition) => definition.child(segment).map(Self::Definition),
            Self::Nested(nested) => nested.children.get(segment).map(Self::new),
        }
    }

    fn into_definition(self) -> Option<Arc<dyn ComponentDefinition>> {
        match self {
            Self::Definition(definition) => Some(definition),
            Self::Nested(nested) => nested.base.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_traits::{Component, Input, SharedComponent, shared};
    use std::any::Any;
    use std::error::Error;

    struct Leaf;
    impl Component for Leaf {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct LeafDef {
        children: FxHashMap<String, Arc<dyn ComponentDefinition>>,
    }

    impl LeafDef {
        fn new() -> Self {
            Self {
                children: FxHashMap::default(),
            }
        }

        fn with_child(name: &str, child: LeafDef) -> Self {
            let mut def = Self::new();
            def.children.insert(name.to_string(), Arc::new(child));
            def
        }
    }

    impl ComponentDefinition for LeafDef {
        fn create(
            &self,
            _node_id: usize,
            _input: &Input,
            _parent: Option<&SharedComponent>,
        ) -> Result<SharedComponent, Box<dyn Error>> {
            Ok(shared(Leaf))
        }

        fn child(&self, name: &str) -> Option<Arc<dyn ComponentDefinition>> {
            self.children.get(name).cloned()
        }
    }

    #[test]
    fn resolves_through_a_definition_child_registry() {
        let mut registry = Registry::new();
        registry.register([(
            "slider".to_string(),
            DefinitionEntry::definition(LeafDef::with_child(
                "slide",
                LeafDef::with_child("handle", LeafDef::new()),
            )),
        )]);

        assert!(registry.resolve("slider", '-').is_ok());
        assert!(registry.resolve("slider-slide", '-').is_ok());
        assert!(registry.resolve("slider-slide-handle", '-').is_ok());
    }

    #[test]
    fn missing_child_segment_names_the_segment() {
        let mut registry = Registry::new();
        registry.register([(
            "slider".to_string(),
            DefinitionEntry::definition(LeafDef::new()),
        )]);

        assert_eq!(
            registry.resolve("slider-rail", '-').map(|_| ()),
            Err(ResolveError::MissingChildDefinition {
                id: "slider-rail".to_string(),
                segment: "rail".to_string(),
            })
        );
    }

    #[test]
    fn unregistered_top_level_name_is_missing_definition() {
        let registry = Registry::new();
        assert_eq!(
            registry.resolve("card", '-').map(|_| ()),
            Err(ResolveError::MissingDefinition {
                id: "card".to_string(),
            })
        );
    }

    #[test]
    fn nested_map_without_base_is_not_invocable() {
        let mut registry = Registry::new();
        let mut nested = NestedDefinitions::default();
        nested
            .children
            .insert("slide".to_string(), DefinitionEntry::definition(LeafDef::new()));
        registry.register([("slider".to_string(), DefinitionEntry::Nested(nested))]);

        assert_eq!(
            registry.resolve("slider", '-').map(|_| ()),
            Err(ResolveError::MissingDefinition {
                id: "slider".to_string(),
            })
        );
        assert!(registry.resolve("slider-slide", '-').is_ok());
    }

    #[test]
    fn nested_map_base_is_the_fallback_constructor() {
        let mut registry = Registry::new();
        let nested = NestedDefinitions {
            base: Some(Arc::new(LeafDef::new())),
            children: FxHashMap::default(),
        };
        registry.register([("slider".to_string(), DefinitionEntry::Nested(nested))]);

        assert!(registry.resolve("slider", '-').is_ok());
    }

    #[test]
    fn later_registrations_replace_earlier_ones() {
        let mut registry = Registry::new();
        registry.register([(
            "card".to_string(),
            DefinitionEntry::definition(LeafDef::new()),
        )]);
        registry.register([(
            "card".to_string(),
            DefinitionEntry::definition(LeafDef::with_child("title", LeafDef::new())),
        )]);

        assert!(registry.resolve("card-title", '-').is_ok());
    }
}
