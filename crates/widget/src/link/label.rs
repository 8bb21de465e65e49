//! The text child of a link.

use std::borrow::Cow;
use std::fmt;

use trellis_core::model::{AsText, TextSource, ValueSource};
use trellis_core::{Component, Id};

/// The capability a link requires from its label child.
///
/// Implementations must render body-only: the bound text and nothing
/// around it.
pub trait LabelLike: Component {
    /// Replaces the bound source.
    fn rebind(&mut self, source: Box<dyn TextSource>);

    /// The bound value coerced to its string form; empty when unbound.
    fn text(&self) -> String;
}

/// The standard label child: renders its bound value, nothing more.
pub struct Label {
    id: Id,
    source: Option<Box<dyn TextSource>>,
}

impl Label {
    /// Creates a label bound to nothing; it renders as the empty string.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            source: None,
        }
    }

    /// Creates a label bound to `source`.
    pub fn bound<S>(id: impl Into<Id>, source: S) -> Self
    where
        S: ValueSource + 'static,
        S::Value: fmt::Display,
    {
        let mut label = Self::new(id);
        label.rebind(Box::new(AsText(source)));
        label
    }
}

impl Component for Label {
    fn id(&self) -> &Id {
        &self.id
    }

    fn body(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.text()))
    }
}

impl LabelLike for Label {
    fn rebind(&mut self, source: Box<dyn TextSource>) {
        self.source = Some(source);
    }

    fn text(&self) -> String {
        self.source
            .as_ref()
            .map(|source| source.text())
            .unwrap_or_default()
    }
}
