//! Template-data adapter: binds a [`RenderContext`] to the expander's
//! callback protocol.

use std::borrow::Cow;

use hostel_render::TemplateSource;

use crate::context::RenderContext;

/// Adapter implementing [`TemplateSource`] over a render context.
///
/// Holds the only mutable state on the render path: the navigation
/// cursor. One adapter is created per render call and never shared, so
/// concurrent requests cannot observe each other's iteration state.
pub struct TemplateData<'a> {
    ctx: &'a RenderContext,
    /// `Some(ix)` while iterating inside `{{#nav}}`.
    nav_cursor: Option<usize>,
}

impl<'a> TemplateData<'a> {
    /// Create an adapter positioned outside any section.
    #[must_use]
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self {
            ctx,
            nav_cursor: None,
        }
    }
}

impl TemplateSource for TemplateData<'_> {
    fn enter_section(&mut self, name: &str) -> bool {
        // "nav" is the only recognized section. An empty navigation
        // list renders the block zero times.
        if name == "nav" && !self.ctx.nav.is_empty() {
            self.nav_cursor = Some(0);
            true
        } else {
            false
        }
    }

    fn next_item(&mut self) -> bool {
        match self.nav_cursor {
            Some(ix) if ix + 1 < self.ctx.nav.len() => {
                self.nav_cursor = Some(ix + 1);
                true
            }
            _ => false,
        }
    }

    fn leave_section(&mut self) {
        self.nav_cursor = None;
    }

    fn resolve(&self, name: &str) -> Cow<'_, str> {
        // Inside the nav section only the entry's own fields resolve.
        if let Some(ix) = self.nav_cursor {
            let Some(entry) = self.ctx.nav.get(ix) else {
                return Cow::Borrowed("");
            };
            return match name {
                "title" => Cow::Borrowed(entry.title.as_str()),
                "url" => Cow::Borrowed(entry.url.as_str()),
                _ => Cow::Borrowed(""),
            };
        }

        match name {
            "title" => Cow::Borrowed(self.ctx.page.title()),
            "content" => Cow::Borrowed(self.ctx.page.html()),
            "language" => Cow::Borrowed(self.ctx.language.as_str()),
            _ => self
                .ctx
                .items
                .iter()
                .find(|item| item.key == name)
                .map_or(Cow::Borrowed(""), |item| Cow::Borrowed(item.value.as_str())),
        }
    }
}
