//! Button appearance: visual variant, size, and the class-name catalog.
//!
//! [`Appearance`] is the reusable behavior every button-styled widget
//! attaches: a mutable `(variant, size)` pair that is contributed to the
//! page as a deterministic style classifier at render time. The mapping
//! from the pair to concrete class names belongs to the styling
//! collaborator via [`Catalog`]; [`ClassNames`] is the built-in table.
//!
//! # Example
//! ```
//! use trellis_widget::appearance::{Appearance, ClassNames, Size, Variant};
//!
//! let mut appearance = Appearance::new(Variant::Danger);
//! appearance.set_size(Size::Large);
//!
//! let classes = appearance.classify(&ClassNames);
//! assert_eq!(classes, ["btn", "btn-danger", "btn-lg"]);
//! ```

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The visual intent of a button-styled widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// A main action.
    Primary,
    /// A complementary action.
    Secondary,
    /// A good outcome.
    Success,
    /// A neutral informational action.
    Info,
    /// A risky action.
    Warning,
    /// A destructive action.
    Danger,
    /// Styled like plain link text.
    Link,
}

/// The rendered size of a button-styled widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Size {
    /// A compact control.
    Small,
    /// The default size.
    #[default]
    Medium,
    /// An emphasized, larger control.
    Large,
}

/// The mutable appearance attached to a button-styled widget.
///
/// Last write wins; no history is kept. The pair is never validated here;
/// rejecting combinations a theme cannot express is the [`Catalog`]
/// implementation's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    variant: Variant,
    size: Size,
}

impl Appearance {
    /// Creates an appearance with the given variant and the default
    /// [`Size::Medium`].
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            size: Size::Medium,
        }
    }

    /// The current variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replaces the variant.
    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.variant = variant;
        self
    }

    /// Replaces the size.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.size = size;
        self
    }

    /// The style classifier for the current `(variant, size)` pair,
    /// resolved through `catalog`.
    ///
    /// Equal pairs always classify to equal class lists.
    pub fn classify(&self, catalog: &dyn Catalog) -> Vec<SmolStr> {
        catalog.classes(self)
    }
}

/// Maps appearances to concrete class names.
///
/// Implemented by the styling collaborator. The widget core only
/// guarantees that the `(variant, size)` pair it hands over reflects the
/// most recent setter calls.
pub trait Catalog {
    /// The class names for `appearance`, in emission order.
    fn classes(&self, appearance: &Appearance) -> Vec<SmolStr>;
}

/// The built-in class-name table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNames;

impl Catalog for ClassNames {
    fn classes(&self, appearance: &Appearance) -> Vec<SmolStr> {
        let mut classes = vec![SmolStr::new_static("btn")];

        classes.push(SmolStr::new_static(match appearance.variant() {
            Variant::Primary => "btn-primary",
            Variant::Secondary => "btn-secondary",
            Variant::Success => "btn-success",
            Variant::Info => "btn-info",
            Variant::Warning => "btn-warning",
            Variant::Danger => "btn-danger",
            Variant::Link => "btn-link",
        }));

        match appearance.size() {
            Size::Small => classes.push(SmolStr::new_static("btn-sm")),
            // Medium is the theme default and contributes no class of its own.
            Size::Medium => {}
            Size::Large => classes.push(SmolStr::new_static("btn-lg")),
        }

        classes
    }
}
