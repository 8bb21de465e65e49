//! The built-in widgets for trellis.
//!
//! # Example
//! ```
//! use trellis_widget::appearance::Variant;
//! use trellis_widget::core::{RequestContext, Value};
//! use trellis_widget::link::{Glyph, Link};
//!
//! let mut save: Link = Link::on_click("save", Variant::Primary, |ctx| {
//!     ctx.mark("status");
//! });
//! save.set_label(Value::of("Save"))
//!     .set_glyph(Some(Glyph::new("fa fa-floppy-disk")));
//!
//! let mut ctx = RequestContext::new();
//! save.click(&mut ctx);
//! assert_eq!(ctx.updates().len(), 1);
//! ```

pub use trellis_core as core;

pub mod appearance;
pub mod link;

pub use appearance::{Appearance, Catalog, ClassNames, Size, Variant};
pub use link::{Builder, Glyph, Icon, Label, Link, Splitter, link};
