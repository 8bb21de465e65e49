//! The reference render driver.
//!
//! Templating engines live outside this crate; this driver exists so tests
//! and demo hosts have one honest implementation of the render protocol
//! documented in [`crate::component`]: prepare first, then read
//! visibility, then emit the body and recurse into children in
//! registration order.

use crate::Component;
use crate::markup;

/// Renders `component` and its children into `out`.
///
/// Invisible components contribute nothing. Bodies are escaped unless the
/// component opts out.
pub fn render_into(component: &mut dyn Component, out: &mut String) {
    component.prepare();

    if !component.visible() {
        log::trace!("skipping invisible component '{}'", component.id());
        return;
    }

    if let Some(body) = component.body() {
        if component.escape_body() {
            out.push_str(&markup::escape(&body));
        } else {
            out.push_str(&body);
        }
    }

    component.for_each_child(&mut |child| render_into(child, out));
}

/// Renders `component` to a fresh string.
pub fn render(component: &mut dyn Component) -> String {
    let mut out = String::new();
    render_into(component, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::cell::Cell;
    use std::rc::Rc;

    use super::render;
    use crate::{Component, Id};

    struct Probe {
        id: Id,
        visible: bool,
        body: &'static str,
        escape: bool,
        prepared: Cell<bool>,
        visible_read_after_prepare: Rc<Cell<bool>>,
    }

    impl Probe {
        fn new(id: &str, visible: bool, body: &'static str, escape: bool) -> Self {
            Self {
                id: Id::new(id),
                visible,
                body,
                escape,
                prepared: Cell::new(false),
                visible_read_after_prepare: Rc::new(Cell::new(false)),
            }
        }
    }

    impl Component for Probe {
        fn id(&self) -> &Id {
            &self.id
        }

        fn prepare(&mut self) {
            self.prepared.set(true);
        }

        fn visible(&self) -> bool {
            self.visible_read_after_prepare.set(self.prepared.get());
            self.visible
        }

        fn body(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.body))
        }

        fn escape_body(&self) -> bool {
            self.escape
        }
    }

    #[test]
    fn prepare_runs_before_visibility_is_read() {
        let mut probe = Probe::new("p", true, "x", true);
        let order = Rc::clone(&probe.visible_read_after_prepare);

        let _ = render(&mut probe);

        assert!(order.get());
    }

    #[test]
    fn invisible_components_contribute_nothing() {
        let mut probe = Probe::new("p", false, "x", true);

        assert_eq!(render(&mut probe), "");
    }

    #[test]
    fn bodies_are_escaped_unless_opted_out() {
        let mut escaped = Probe::new("a", true, "<i/>", true);
        let mut raw = Probe::new("b", true, "<i/>", false);

        assert_eq!(render(&mut escaped), "&lt;i/&gt;");
        assert_eq!(render(&mut raw), "<i/>");
    }
}
