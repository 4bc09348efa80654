//! Source value model
//!
//! A field value from a parsed V2 message: a primitive leaf, a composite with
//! positionally significant components, or a choice-typed (`Varies`) wrapper whose
//! concrete shape was decided elsewhere in the message.
//!
//! Values are built by the upstream message parser. The converter only reads them.

mod tag;
pub mod timestamp;

pub use tag::V2Tag;

use crate::error::TimestampError;
use v2fhir_models::TemporalValue;

const COMPONENT_SEPARATOR: char = '^';
const SUBCOMPONENT_SEPARATOR: char = '&';

/// A V2 field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum V2Type {
    Primitive(Primitive),
    Composite(Composite),
    Varies(Varies),
}

/// A single string-valued leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    pub tag: V2Tag,
    pub value: Option<String>,
}

/// An ordered, fixed-position sequence of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub tag: V2Tag,
    pub components: Vec<V2Type>,
}

/// A choice-typed wrapper. `data` is `None` when the concrete type was never resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Varies {
    pub data: Option<Box<V2Type>>,
}

impl V2Type {
    pub fn primitive(tag: V2Tag, value: impl Into<String>) -> Self {
        V2Type::Primitive(Primitive {
            tag,
            value: Some(value.into()),
        })
    }

    /// A primitive with no value, as produced for an empty component.
    pub fn empty(tag: V2Tag) -> Self {
        V2Type::Primitive(Primitive { tag, value: None })
    }

    pub fn composite(tag: V2Tag, components: impl IntoIterator<Item = V2Type>) -> Self {
        V2Type::Composite(Composite {
            tag,
            components: components.into_iter().collect(),
        })
    }

    pub fn varies(data: Option<V2Type>) -> Self {
        V2Type::Varies(Varies {
            data: data.map(Box::new),
        })
    }

    /// Variant tag of the value, looking through choice wrappers.
    pub fn tag(&self) -> V2Tag {
        match self {
            V2Type::Primitive(p) => p.tag,
            V2Type::Composite(c) => c.tag,
            V2Type::Varies(v) => v.data.as_deref().map_or(V2Tag::Unknown, V2Type::tag),
        }
    }

    /// Components of a composite; empty for anything else.
    pub fn components(&self) -> &[V2Type] {
        match self {
            V2Type::Composite(c) => &c.components,
            _ => &[],
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            V2Type::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            V2Type::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Generic string view: a primitive's value, or the text of a composite's first
    /// component.
    pub fn text(&self) -> Option<&str> {
        match self {
            V2Type::Primitive(p) => p.value.as_deref(),
            V2Type::Composite(c) => c.components.first().and_then(V2Type::text),
            V2Type::Varies(v) => v.data.as_deref().and_then(V2Type::text),
        }
    }

    /// True when no leaf carries non-whitespace text.
    pub fn is_blank(&self) -> bool {
        match self {
            V2Type::Primitive(p) => p.value.as_deref().map_or(true, |s| s.trim().is_empty()),
            V2Type::Composite(c) => c.components.iter().all(V2Type::is_blank),
            V2Type::Varies(v) => v.data.as_deref().map_or(true, V2Type::is_blank),
        }
    }

    /// Encodes the value with the default `^` and `&` separators, dropping trailing
    /// empty components.
    pub fn encode(&self) -> String {
        self.encode_with(COMPONENT_SEPARATOR)
    }

    fn encode_with(&self, separator: char) -> String {
        match self {
            V2Type::Primitive(p) => p.value.clone().unwrap_or_default(),
            V2Type::Varies(v) => v
                .data
                .as_deref()
                .map(|d| d.encode_with(separator))
                .unwrap_or_default(),
            V2Type::Composite(c) => {
                let mut parts: Vec<String> = c
                    .components
                    .iter()
                    .map(|component| component.encode_with(SUBCOMPONENT_SEPARATOR))
                    .collect();
                while parts.last().is_some_and(|p| p.is_empty()) {
                    parts.pop();
                }
                parts.join(&separator.to_string())
            }
        }
    }
}

impl Primitive {
    /// Native timestamp accessor. `None` unless this is a `DTM` value.
    pub fn timestamp(&self) -> Option<Result<TemporalValue, TimestampError>> {
        if self.tag != V2Tag::DTM {
            return None;
        }
        Some(match self.value.as_deref() {
            Some(v) => timestamp::parse_v2_timestamp(v),
            None => Err(TimestampError::Empty),
        })
    }
}
