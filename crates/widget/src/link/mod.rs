//! A button-styled link that dispatches clicks without a full page reload.
//!
//! This module provides the [`Link`] widget plus the capabilities its
//! children fulfil:
//! - [`icon`] - the optional leading pictogram
//! - [`label`] - the bound text
//! - [`splitter`] - the spacer shown only when both icon and label content
//!   are present
//!
//! # Example
//! ```
//! use trellis_widget::appearance::Variant;
//! use trellis_widget::core::RequestContext;
//! use trellis_widget::link::{Glyph, Link};
//!
//! // A link whose handler only needs the request context.
//! let mut save: Link = Link::on_click("save", Variant::Primary, |ctx| {
//!     ctx.mark("status");
//! });
//!
//! // A link whose handler mutates the link itself.
//! let mut toggle: Link = Link::on_click_self("toggle", Variant::Secondary, |link, _ctx| {
//!     link.set_glyph(Some(Glyph::new("fa fa-check")));
//! });
//!
//! let mut ctx = RequestContext::new();
//! save.click(&mut ctx);
//! toggle.click(&mut ctx);
//! ```

mod widget;

pub mod icon;
pub mod label;
pub mod splitter;

mod tests;

pub use icon::{Glyph, Icon, IconLike};
pub use label::{Label, LabelLike};
pub use splitter::{Splitter, SplitterLike};
pub use widget::*;
