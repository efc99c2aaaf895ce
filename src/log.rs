// used to print out the logged form of a container
use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::tristate::Tristate;

/// The logged form of a present or absent container: the payload, or `null`.
pub struct LogValue<'a, T>(&'a Tristate<T>);

impl<T: fmt::Display> fmt::Display for LogValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tristate::Present(value) => value.fmt(f),
            _ => write!(f, "null"),
        }
    }
}

impl<T: fmt::Display> Tristate<T> {
    /// A tracing field for this container. Unset containers yield `None`,
    /// which tracing leaves out of the event altogether.
    ///
    /// ```
    /// use tristate::Tristate;
    /// let name = Tristate::present("alice");
    /// tracing::info!(name = name.log_field(), "user updated");
    /// ```
    pub fn log_field(&self) -> Option<DisplayValue<LogValue<'_, T>>> {
        match self {
            Tristate::Unset => None,
            _ => Some(display(LogValue(self))),
        }
    }
}
