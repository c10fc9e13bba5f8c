//! The attribute naming grammar for component declarations.

use graft_dom::Node;
use smallvec::SmallVec;

/// The declaration grammar: a required prefix token and a separator
/// character. An attribute matches when its name begins with
/// `prefix + separator`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrSchema {
    pub prefix: String,
    pub separator: char,
}

impl AttrSchema {
    pub fn new(prefix: &str, separator: char) -> Self {
        Self {
            prefix: prefix.to_string(),
            separator,
        }
    }

    /// The attribute name declaring `id` under this schema.
    pub fn attr_name(&self, id: &str) -> String {
        format!("{}{}{}", self.prefix, self.separator, id)
    }

    fn strip<'a>(&self, attr_name: &'a str) -> Option<&'a str> {
        attr_name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix(self.separator)
    }
}

impl Default for AttrSchema {
    fn default() -> Self {
        Self::new("ob", '-')
    }
}

/// One component declaration extracted from a node attribute.
///
/// Ephemeral: recomputed on every observation pass, never persisted.
/// A `Some` parent triple means the component is declared as a nested child
/// of another declared component on an ancestor node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// The full attribute name, e.g. `ob-slider-slide`
    pub attr: String,
    /// The dash-joined id path, e.g. `slider-slide`
    pub id: String,
    /// The last id segment, e.g. `slide`
    pub name: String,
    /// The attribute declaring the parent component, e.g. `ob-slider`
    pub parent_attr: Option<String>,
    /// The parent's id path, e.g. `slider`
    pub parent_id: Option<String>,
    /// The parent's last id segment
    pub parent_name: Option<String>,
    /// The raw, unparsed attribute value
    pub raw_value: String,
}

/// Whether the node carries at least one attribute matching the schema.
/// This is the observer's relevance predicate.
pub fn has_declarations(node: &Node, schema: &AttrSchema) -> bool {
    node.element_data()
        .is_some_and(|el| {
            el.attrs
                .iter()
                .any(|attr| schema.strip(&attr.name).is_some_and(|id| !id.is_empty()))
        })
}

/// Extract the declarations from a node's current attribute snapshot.
///
/// Pure: does not mutate the node or consult any registry. Attributes that
/// do not match the schema are ignored.
pub fn parse_declarations(node: &Node, schema: &AttrSchema) -> SmallVec<[Declaration; 4]> {
    let Some(element) = node.element_data() else {
        return SmallVec::new();
    };

    element
        .attrs
        .iter()
        .filter_map(|attr| {
            let id = schema.strip(&attr.name).filter(|id| !id.is_empty())?;
            Some(parse_id(id, &attr.name, &attr.value, schema))
        })
        .collect()
}

fn parse_id(id: &str, attr: &str, raw_value: &str, schema: &AttrSchema) -> Declaration {
    let mut segments: Vec<&str> = id.split(schema.separator).collect();
    let name = segments.pop().unwrap_or_default();

    let (parent_attr, parent_id, parent_name) = match segments.last() {
        Some(parent_name) => {
            let parent_id = segments.join(&schema.separator.to_string());
            let parent_attr = schema.attr_name(&parent_id);
            (
                Some(parent_attr),
                Some(parent_id),
                Some(parent_name.to_string()),
            )
        }
        None => (None, None, None),
    };

    Declaration {
        attr: attr.to_string(),
        id: id.to_string(),
        name: name.to_string(),
        parent_attr,
        parent_id,
        parent_name,
        raw_value: raw_value.to_string(),
    }
}
