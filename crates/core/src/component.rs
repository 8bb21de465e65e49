//! The contract between a component and its render collaborator.
//!
//! # The render protocol
//!
//! A render collaborator MUST call [`Component::prepare`] before reading
//! [`Component::visible`] in a render pass. `prepare` is where a component
//! refreshes derived state (most notably the visibility of children that
//! depend on sibling state), so reading visibility without preparing first
//! observes the previous pass. After the visibility check, the collaborator
//! emits the component's [`body`](Component::body) (escaped unless the
//! component opts out) and recurses into children in registration order.
//!
//! The reference driver in [`crate::render`] implements this protocol and
//! is what the built-in tests and demos use; real templating engines only
//! have to honor the same ordering.

use std::borrow::Cow;

use crate::Id;
use crate::markup::MarkupSourcing;

/// A node in the host page's component tree.
pub trait Component {
    /// The identifier the host uses to locate this component.
    fn id(&self) -> &Id;

    /// Refreshes derived state ahead of a render pass.
    ///
    /// Render collaborators are contractually required to call this before
    /// reading [`visible`](Component::visible); see the module docs.
    fn prepare(&mut self) {}

    /// Whether the component renders at all this pass.
    fn visible(&self) -> bool {
        true
    }

    /// The component's own body text, if it has one.
    fn body(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Whether [`body`](Component::body) must be escaped before it reaches
    /// the page.
    fn escape_body(&self) -> bool {
        true
    }

    /// How the component's markup is sourced.
    fn markup_sourcing(&self) -> MarkupSourcing {
        MarkupSourcing::default()
    }

    /// Visits the component's direct children in registration order.
    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut dyn Component)) {
        let _ = visit;
    }
}
