//! Content presentation.
//!
//! A [`ContentPresenter`] is the consumer side of a control's
//! selected-content projection: it takes a `(content, template)` pair and
//! produces the realized representation, falling back to a presenter-local
//! template when the projected one is absent or declines the value.

use crate::content::Content;
use crate::tab_view::TabView;
use crate::template::SharedTemplate;

/// Realizes content through a template, with fallback.
///
/// Resolution order for [`present`](Self::present): the supplied template if
/// it [`matches`](crate::ContentTemplate::matches) the content, then the
/// presenter's fallback template if it matches, then the content passed
/// through untouched.
#[derive(Default)]
pub struct ContentPresenter {
    fallback: Option<SharedTemplate>,
}

impl ContentPresenter {
    /// Create a presenter without a fallback template.
    pub fn new() -> Self {
        Self { fallback: None }
    }

    /// Set a fallback template using the builder pattern.
    pub fn with_fallback(mut self, template: SharedTemplate) -> Self {
        self.fallback = Some(template);
        self
    }

    /// The fallback template, if any.
    pub fn fallback(&self) -> Option<SharedTemplate> {
        self.fallback.clone()
    }

    /// Realize `content` through `template`, the fallback, or pass-through.
    pub fn present(&self, content: &Content, template: Option<&SharedTemplate>) -> Content {
        if let Some(template) = template {
            if template.matches(content) {
                return template.realize(content);
            }
        }
        if let Some(fallback) = &self.fallback {
            if fallback.matches(content) {
                return fallback.realize(content);
            }
        }
        content.clone()
    }

    /// Realize a control's current projection.
    pub fn sync_from(&self, view: &TabView) -> Content {
        let template = view.selected_content_template().get();
        view.selected_content()
            .with(|content| self.present(content, template.as_ref()))
    }
}
