//! Content templates.
//!
//! A content template is a factory that turns a data value into its display
//! representation. Containers may carry their own template; a control may
//! also hold an ambient default that is propagated to containers prepared
//! without one.
//!
//! Templates are tracked by identity: the selected-content projection copies
//! template *references* around and compares them with [`template_eq`], it
//! never inspects their structure.

use std::sync::Arc;

use crate::content::Content;

/// A factory that realizes a display representation for a piece of content.
///
/// In this control layer the realized representation is itself a
/// [`Content`] - typically a string, or a custom handle to whatever the
/// embedding toolkit uses as its visual element. Realizing a full visual
/// tree is out of scope here.
///
/// # Example
///
/// ```
/// use trellis_view::{Content, ContentTemplate, FuncTemplate};
///
/// let upper = FuncTemplate::new(|content: &Content| {
///     match content.as_str() {
///         Some(s) => Content::from(s.to_uppercase()),
///         None => Content::None,
///     }
/// });
///
/// assert_eq!(upper.realize(&Content::from("tab")).as_str(), Some("TAB"));
/// ```
pub trait ContentTemplate: Send + Sync {
    /// Whether this template can realize the given content.
    ///
    /// The default accepts everything. Presenters use this to fall back to
    /// another template when a template declines a value.
    fn matches(&self, content: &Content) -> bool {
        let _ = content;
        true
    }

    /// Realize the content into its display representation.
    fn realize(&self, content: &Content) -> Content;
}

/// A shared, identity-compared handle to a content template.
pub type SharedTemplate = Arc<dyn ContentTemplate>;

/// Compares two optional template handles by identity.
///
/// Two handles are equal when both are absent or both point at the same
/// template allocation. Structural comparison of templates is meaningless;
/// the projection only cares whether the *reference* changed.
pub fn template_eq(a: Option<&SharedTemplate>, b: Option<&SharedTemplate>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// A closure-backed content template.
pub struct FuncTemplate {
    build: Box<dyn Fn(&Content) -> Content + Send + Sync>,
}

impl FuncTemplate {
    /// Create a template from a realize closure.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(&Content) -> Content + Send + Sync + 'static,
    {
        Self {
            build: Box::new(build),
        }
    }

    /// Create a shared template handle from a realize closure.
    pub fn shared<F>(build: F) -> SharedTemplate
    where
        F: Fn(&Content) -> Content + Send + Sync + 'static,
    {
        Arc::new(Self::new(build))
    }
}

impl ContentTemplate for FuncTemplate {
    fn realize(&self, content: &Content) -> Content {
        (self.build)(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_func_template_realize() {
        let template = FuncTemplate::new(|c| match c.as_int() {
            Some(n) => Content::from(n * 2),
            None => Content::None,
        });

        assert_eq!(template.realize(&Content::from(21)).as_int(), Some(42));
        assert!(template.realize(&Content::from("x")).is_none());
        assert!(template.matches(&Content::None));
    }

    #[test]
    fn test_template_eq_identity() {
        let a = FuncTemplate::shared(|c| c.clone());
        let b = FuncTemplate::shared(|c| c.clone());
        let a2 = a.clone();

        assert!(template_eq(None, None));
        assert!(template_eq(Some(&a), Some(&a2)));
        assert!(!template_eq(Some(&a), Some(&b)));
        assert!(!template_eq(Some(&a), None));
    }
}
