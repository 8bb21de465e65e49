//! The cosmetic spacer between a link's icon and label.

use std::borrow::Cow;

use trellis_core::{Component, Id};

/// The capability a link requires from its splitter child.
pub trait SplitterLike: Component {
    /// Sets the computed visibility.
    ///
    /// Only the owning link writes this, from its pre-render recompute;
    /// callers never set it directly.
    fn set_visible(&mut self, visible: bool);
}

/// The standard splitter child.
///
/// A non-breaking space rendered unescaped, shown only when the owning
/// link decides both icon and label content are present.
#[derive(Debug, Clone)]
pub struct Splitter {
    id: Id,
    visible: bool,
}

impl Splitter {
    /// Creates a hidden splitter under `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            visible: false,
        }
    }
}

impl Component for Splitter {
    fn id(&self) -> &Id {
        &self.id
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn body(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("&nbsp;"))
    }

    fn escape_body(&self) -> bool {
        false
    }
}

impl SplitterLike for Splitter {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
