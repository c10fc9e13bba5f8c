use std::ops::{Deref, DerefMut};

/// A node attribute, e.g. the `ob-slider="..."` in `<div ob-slider="...">`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An ordered attribute list.
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    inner: Vec<Attribute>,
}

impl Attributes {
    pub fn new(inner: Vec<Attribute>) -> Self {
        Self { inner }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        let existing_attr = self.inner.iter_mut().find(|a| a.name == name);
        if let Some(existing_attr) = existing_attr {
            existing_attr.value.clear();
            existing_attr.value.push_str(value);
        } else {
            self.inner.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        let idx = self.inner.iter().position(|attr| attr.name == name);
        idx.map(|idx| self.inner.remove(idx))
    }
}

impl Deref for Attributes {
    type Target = Vec<Attribute>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

/// Element-specific data: a tag name and the attribute list the engine
/// scans for declarations.
#[derive(Clone, Debug)]
pub struct ElementData {
    pub name: String,
    pub attrs: Attributes,
}

#[derive(Clone, Debug, Default)]
pub struct TextData {
    pub content: String,
}

/// Node type specific data.
#[derive(Clone, Debug)]
pub enum NodeData {
    Element(ElementData),
    Text(TextData),
}

pub struct Node {
    /// Our id within the tree's slab
    pub id: usize,
    /// Our parent's id
    pub parent: Option<usize>,
    /// Our children's ids, in tree order
    pub children: Vec<usize>,
    /// Node type (element, text) specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(id: usize, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            children: vec![],
            data,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        match self.data {
            NodeData::Element(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn element_data_mut(&mut self) -> Option<&mut ElementData> {
        match self.data {
            NodeData::Element(ref mut data) => Some(data),
            _ => None,
        }
    }

    pub fn text_data_mut(&mut self) -> Option<&mut TextData> {
        match self.data {
            NodeData::Text(ref mut data) => Some(data),
            _ => None,
        }
    }

    /// The value of the named attribute, if this node is an element carrying it.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element_data().and_then(|el| el.attrs.get(name))
    }
}
