//! Type-erased content values.
//!
//! Items hosted by a selection-aware container control are opaque data
//! elements. [`Content`] is the type-erased value that flows from an item
//! into its container and out through the control's selected-content
//! projection. Cloning is cheap: custom payloads are reference-counted.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased content value.
///
/// `Content` can hold the common scalar shapes directly, or any
/// `Send + Sync` payload via [`Content::custom`]. The `None` variant is the
/// "nothing here" value used by projections when no container is resolvable.
///
/// # Equality
///
/// Scalar variants compare by value. `Custom` payloads compare by identity
/// (`Arc::ptr_eq`): two custom values are equal only when they are the same
/// allocation. This matches how containers are tracked - by reference, not
/// by structure.
///
/// # Example
///
/// ```
/// use trellis_view::Content;
///
/// let content = Content::from("General");
/// assert_eq!(content.as_str(), Some("General"));
///
/// let custom = Content::custom(vec![1u8, 2, 3]);
/// assert_eq!(custom.downcast::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
/// ```
#[derive(Clone, Default)]
pub enum Content {
    /// No content.
    #[default]
    None,
    /// String content.
    String(String),
    /// Integer content.
    Int(i64),
    /// Floating point content.
    Float(f64),
    /// Boolean content.
    Bool(bool),
    /// Custom content (type-erased, identity-compared).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Content {
    /// Creates custom content from any `Send + Sync` value.
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Content::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `Content::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Content::None)
    }

    /// Returns `true` if this holds some content.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the content as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Content::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the content as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Content::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the content as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Content::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the content as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Content::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to downcast custom content to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            Content::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::None, Content::None) => true,
            (Content::String(a), Content::String(b)) => a == b,
            (Content::Int(a), Content::Int(b)) => a == b,
            (Content::Float(a), Content::Float(b)) => a == b,
            (Content::Bool(a), Content::Bool(b)) => a == b,
            (Content::Custom(a), Content::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::None => write!(f, "None"),
            Content::String(s) => f.debug_tuple("String").field(s).finish(),
            Content::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Content::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Content::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Content::Custom(data) => write!(f, "Custom({:p})", Arc::as_ptr(data)),
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::String(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::String(s.to_string())
    }
}

impl From<i64> for Content {
    fn from(n: i64) -> Self {
        Content::Int(n)
    }
}

impl From<i32> for Content {
    fn from(n: i32) -> Self {
        Content::Int(n as i64)
    }
}

impl From<f64> for Content {
    fn from(n: f64) -> Self {
        Content::Float(n)
    }
}

impl From<bool> for Content {
    fn from(b: bool) -> Self {
        Content::Bool(b)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Content::None,
        }
    }
}
