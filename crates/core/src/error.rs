use thiserror::Error;

/// An error produced while configuring a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was not supplied.
    ///
    /// Raised synchronously; the widget under construction is never
    /// observable in a partial state.
    #[error("invalid argument: `{0}` is required")]
    InvalidArgument(&'static str),
}
