//! The optional pictogram in front of a link's label.

use std::borrow::Cow;

use smol_str::SmolStr;
use trellis_core::{Component, Id};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An icon's visual symbol identifier.
///
/// The name is the class string the host's icon font understands (for
/// example `"fa fa-floppy-disk"`); absence of a glyph means no icon is
/// shown at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glyph(SmolStr);

impl Glyph {
    /// Creates a glyph identifier from the given class name.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    /// The glyph's class name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Glyph {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The capability a link requires from its icon child.
pub trait IconLike: Component {
    /// The glyph currently assigned, if any.
    fn glyph(&self) -> Option<&Glyph>;

    /// Assigns or clears the glyph.
    fn set_glyph(&mut self, glyph: Option<Glyph>);

    /// Whether a glyph is currently assigned.
    fn has_glyph(&self) -> bool {
        self.glyph().is_some()
    }
}

/// The standard icon child.
///
/// Renders an `<i>` element carrying the glyph's class name, and nothing
/// at all while no glyph is assigned.
#[derive(Debug, Clone)]
pub struct Icon {
    id: Id,
    glyph: Option<Glyph>,
}

impl Icon {
    /// Creates an icon with no glyph under `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            glyph: None,
        }
    }
}

impl Component for Icon {
    fn id(&self) -> &Id {
        &self.id
    }

    fn visible(&self) -> bool {
        self.glyph.is_some()
    }

    fn body(&self) -> Option<Cow<'_, str>> {
        self.glyph
            .as_ref()
            .map(|glyph| Cow::Owned(format!("<i class=\"{}\"></i>", glyph.name())))
    }

    fn escape_body(&self) -> bool {
        false
    }
}

impl IconLike for Icon {
    fn glyph(&self) -> Option<&Glyph> {
        self.glyph.as_ref()
    }

    fn set_glyph(&mut self, glyph: Option<Glyph>) {
        self.glyph = glyph;
    }
}
