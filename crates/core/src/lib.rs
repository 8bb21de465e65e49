//! The essential ideas of trellis.
//!
//! This crate defines what every trellis widget shares: an identity inside
//! the host page's component tree, the render protocol that turns the tree
//! into markup, swappable sources for the values a widget displays or
//! carries, and the request context a transport collaborator threads
//! through user-interaction events.
//!
//! The crate is deliberately free of any templating engine or wire
//! protocol; those live in the host. What the host must honor is small and
//! documented on [`Component`]: call [`Component::prepare`] before reading
//! [`Component::visible`], render children in registration order, and
//! escape bodies unless a component opts out.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod component;
pub mod markup;
pub mod model;
pub mod render;
pub mod transport;

mod error;
mod id;

pub use component::Component;
pub use error::Error;
pub use id::Id;
pub use markup::MarkupSourcing;
pub use model::{Dynamic, Shared, TextSource, Value, ValueSource};
pub use transport::RequestContext;
