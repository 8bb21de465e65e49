//! Swappable sources for the values a component displays or carries.
//!
//! Widgets hold *sources* rather than values: a [`ValueSource`] is asked
//! for the current value on every read, so the data a widget shows can
//! change between render cycles without the widget being rebuilt.
//!
//! Three implementations cover the common cases:
//! - [`Value`] - a fixed value ([`Value::of`])
//! - [`Dynamic`] - recomputed from a closure on every read
//! - [`Shared`] - shared mutable state a host keeps writing
//!
//! [`TextSource`] is the object-safe string-rendering face a label holds;
//! any source with a displayable value adapts through [`AsText`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A caller-supplied "get current value" source.
pub trait ValueSource {
    /// The type of value the source yields.
    type Value;

    /// Returns the current value.
    fn get(&self) -> Self::Value;
}

/// A source holding a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T>(T);

impl<T: Clone> Value<T> {
    /// Creates a source that always yields `value`.
    pub fn of(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone> ValueSource for Value<T> {
    type Value = T;

    fn get(&self) -> T {
        self.0.clone()
    }
}

/// A source recomputed from a closure on every read.
pub struct Dynamic<F>(F);

impl<T, F: Fn() -> T> Dynamic<F> {
    /// Creates a source backed by `produce`.
    pub fn new(produce: F) -> Self {
        Self(produce)
    }
}

impl<T, F: Fn() -> T> ValueSource for Dynamic<F> {
    type Value = T;

    fn get(&self) -> T {
        (self.0)()
    }
}

/// A source reading from shared mutable state.
///
/// Cloning a [`Shared`] yields another handle onto the same value, so a
/// host can keep writing a value that a widget keeps displaying.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Creates a shared value.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Replaces the shared value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Clone> ValueSource for Shared<T> {
    type Value = T;

    fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

/// The object-safe string-rendering face of a source.
pub trait TextSource {
    /// The current value, coerced to its string form.
    fn text(&self) -> String;
}

/// Adapts any displayable [`ValueSource`] into a [`TextSource`].
pub struct AsText<S>(
    /// The adapted source.
    pub S,
);

impl<S> TextSource for AsText<S>
where
    S: ValueSource,
    S::Value: fmt::Display,
{
    fn text(&self) -> String {
        self.0.get().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{AsText, Dynamic, Shared, TextSource, Value, ValueSource};

    #[test]
    fn fixed_value_repeats() {
        let source = Value::of("Save");

        assert_eq!(source.get(), "Save");
        assert_eq!(source.get(), "Save");
    }

    #[test]
    fn dynamic_recomputes_on_every_read() {
        let backing = Shared::new(1);
        let reader = backing.clone();
        let source = Dynamic::new(move || reader.get() * 10);

        assert_eq!(source.get(), 10);
        backing.set(4);
        assert_eq!(source.get(), 40);
    }

    #[test]
    fn shared_handles_see_the_same_value() {
        let a = Shared::new(String::from("one"));
        let b = a.clone();

        b.set(String::from("two"));

        assert_eq!(a.get(), "two");
    }

    #[test]
    fn as_text_coerces_to_display_form() {
        let source = AsText(Value::of(42));

        assert_eq!(source.text(), "42");
    }
}
