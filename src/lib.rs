//! trellis is a small toolkit for server-rendered interactive widgets.
//!
//! A trellis widget lives in a host page's component tree, renders through
//! an external templating collaborator, and receives user-interaction
//! events from an external transport collaborator, all without a full
//! page reload. The widget core stays synchronous and in-memory; the
//! collaborators own markup resolution, delivery, and patching.
//!
//! # The Pocket Guide
//! Construct a widget, configure it with its fluent setters, and hand it
//! to your host:
//!
//! ```
//! use trellis::link::Link;
//! use trellis::{Glyph, RequestContext, Value, Variant};
//!
//! let mut save: Link = Link::on_click("save", Variant::Primary, |ctx| {
//!     ctx.mark("status");
//! });
//! save.set_label(Value::of("Save"))
//!     .set_glyph(Some(Glyph::new("fa fa-floppy-disk")));
//!
//! // The transport collaborator delivers each user click exactly once:
//! let mut ctx = RequestContext::new();
//! save.click(&mut ctx);
//!
//! assert_eq!(ctx.updates().len(), 1);
//! ```
//!
//! Rendering goes through the protocol documented in
//! [`core::component`](crate::core::component): prepare first, then read
//! visibility, then emit bodies in registration order. The reference
//! driver in [`render`] implements it:
//!
//! ```
//! use trellis::link::Link;
//! use trellis::{Glyph, Value, Variant, render};
//!
//! let mut save: Link = Link::new("save", Variant::Primary);
//! save.set_label(Value::of("Save"))
//!     .set_glyph(Some(Glyph::new("fa fa-floppy-disk")));
//!
//! assert_eq!(
//!     render::render(&mut save),
//!     "<i class=\"fa fa-floppy-disk\"></i>&nbsp;Save",
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use trellis_core as core;
pub use trellis_widget as widget;

pub use crate::core::render;
pub use crate::core::{Component, Error, Id, MarkupSourcing, RequestContext};
pub use crate::core::{Dynamic, Shared, TextSource, Value, ValueSource};

pub use crate::widget::appearance::{Appearance, Catalog, ClassNames, Size, Variant};
pub use crate::widget::link;
pub use crate::widget::link::{Builder, Glyph, Icon, Label, Link, Splitter};

/// The result of a fallible trellis operation.
pub type Result<T> = std::result::Result<T, Error>;
