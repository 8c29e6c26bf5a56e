//! Template expansion and markdown conversion for the Hostel content
//! server.
//!
//! The template language is deliberately small: `{{name}}` interpolates
//! a value and `{{#name}}...{{/name}}` repeats a block over an iterable
//! context value. The expander knows nothing about where values come
//! from; it drives a [`TemplateSource`] through a four-callback
//! protocol (enter a section, advance to the next item, leave the
//! section, resolve a name). The source owns whatever cursor state the
//! iteration needs.
//!
//! Interpolation inserts resolved values verbatim. Page bodies are
//! already HTML by the time they reach a template, so the engine does
//! no escaping of its own.

pub mod markdown;
mod source;
mod template;

pub use source::TemplateSource;
pub use template::{TemplateError, expand};
