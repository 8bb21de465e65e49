//! The transport seam: request contexts for interaction dispatch.
//!
//! The transport collaborator delivers a user-interaction event to a
//! widget together with a [`RequestContext`]. The widget never inspects
//! the context; it only threads it through to the application handler,
//! which may queue components for a partial page update. Applying the
//! queued updates is the collaborator's business, as is any retry,
//! debounce, or double-submit protection.

use crate::Id;

/// The per-request handle threaded through interaction dispatch.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    updates: Vec<Id>,
}

impl RequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the component with `id` for a partial re-render once the
    /// handler returns.
    pub fn mark(&mut self, id: impl Into<Id>) {
        self.updates.push(id.into());
    }

    /// The components queued for partial re-render, in queue order.
    pub fn updates(&self) -> &[Id] {
        &self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::RequestContext;
    use crate::Id;

    #[test]
    fn marked_components_are_kept_in_order() {
        let mut ctx = RequestContext::new();
        ctx.mark("status");
        ctx.mark(Id::new("counter"));

        assert_eq!(ctx.updates(), [Id::new("status"), Id::new("counter")]);
    }
}
