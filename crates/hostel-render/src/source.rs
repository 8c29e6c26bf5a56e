//! The value-source contract driven by the template expander.

use std::borrow::Cow;

/// Supplies values and section iteration to [`expand`](crate::expand).
///
/// The expander walks the template and calls back into the source:
///
/// 1. On `{{#name}}` it calls [`enter_section`](Self::enter_section).
///    `false` means the section is not recognized and its block renders
///    zero times. `true` positions the source on the section's first
///    item.
/// 2. After each pass over the block it calls
///    [`next_item`](Self::next_item); `true` advances to the next item
///    and triggers another pass, `false` ends the loop.
/// 3. On `{{/name}}` it calls [`leave_section`](Self::leave_section).
/// 4. `{{name}}` anywhere calls [`resolve`](Self::resolve); unknown
///    names must resolve to the empty string, not an error.
///
/// Implementations hold the iteration cursor and must not be shared
/// across concurrent renders; create one source per render call.
pub trait TemplateSource {
    /// Enter the named section, positioning on its first item.
    fn enter_section(&mut self, name: &str) -> bool;

    /// Advance to the next item of the current section.
    ///
    /// Returns `false` once the last item has been consumed; the cursor
    /// does not wrap.
    fn next_item(&mut self) -> bool;

    /// Leave the current section. Idempotent.
    fn leave_section(&mut self);

    /// Resolve a name to its value in the current scope.
    fn resolve(&self, name: &str) -> Cow<'_, str>;
}
