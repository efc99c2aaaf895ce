// used to print out readable forms of a container
use std::fmt;
// used to name the container type in panic messages
use std::any::type_name;
use std::panic::Location;

/// A value that is either never assigned, explicitly cleared, or present.
///
/// The zero value (`Tristate::default()`) is `Unset`. It is a first class
/// state and no constructor call is needed to reach it.
///
/// ```
/// use tristate::Tristate;
///
/// let unset: Tristate<i32> = Tristate::default();
/// let absent: Tristate<i32> = Tristate::absent();
/// assert!(unset.is_unset());
/// assert!(absent.is_absent());
/// assert_ne!(unset, absent);
/// assert_eq!(Tristate::present(2).value_or(1), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tristate<T> {
    /// Never assigned, analogous to a field that was not touched.
    Unset,
    /// Explicitly cleared, analogous to a field set to null.
    Absent,
    /// Holds a payload.
    Present(T),
}

/// The state of a [`Tristate`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    Unset,
    Absent,
    Present,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            State::Unset => write!(f, "unset"),
            State::Absent => write!(f, "absent"),
            State::Present => write!(f, "present"),
        }
    }
}

impl<T> Tristate<T> {
    pub const fn unset() -> Self {
        Tristate::Unset
    }
    pub const fn absent() -> Self {
        Tristate::Absent
    }
    pub const fn present(value: T) -> Self {
        Tristate::Present(value)
    }
    /// Lifts a borrowed optional payload, cloning it so the container owns
    /// an independent copy.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        value.cloned().into()
    }

    pub const fn state(&self) -> State {
        match self {
            Tristate::Unset => State::Unset,
            Tristate::Absent => State::Absent,
            Tristate::Present(_) => State::Present,
        }
    }
    pub const fn is_present(&self) -> bool {
        matches!(self, Tristate::Present(_))
    }
    pub const fn is_absent(&self) -> bool {
        matches!(self, Tristate::Absent)
    }
    pub const fn is_unset(&self) -> bool {
        matches!(self, Tristate::Unset)
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics when the container is not present. The message names the
    /// container type and the caller's location, e.g.
    /// `tristate: tristate::Tristate<i32> is absent in src/main.rs:7`.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Tristate::Present(value) => value,
            _ => self.not_present(Location::caller()),
        }
    }
    /// Consuming form of [`Tristate::value`], with the same panics.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Tristate::Present(value) => value,
            _ => self.not_present(Location::caller()),
        }
    }
    #[cold]
    fn not_present(&self, caller: &Location<'_>) -> ! {
        panic!(
            "tristate: {} is {} in {}:{}",
            type_name::<Self>(),
            self.state(),
            caller.file(),
            caller.line()
        )
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Tristate::Present(value) => value,
            _ => fallback,
        }
    }
    /// Returns the payload, or the result of `compute` when not present.
    /// `compute` is never called for a present container.
    pub fn value_or_else<F: FnOnce() -> T>(self, compute: F) -> T {
        match self {
            Tristate::Present(value) => value,
            _ => compute(),
        }
    }
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// An independent copy of the payload. Changing the returned value never
    /// affects the container.
    pub fn to_option(&self) -> Option<T>
    where
        T: Clone,
    {
        self.as_option().cloned()
    }
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Tristate::Present(value) => Some(value),
            _ => None,
        }
    }
    pub fn into_option(self) -> Option<T> {
        match self {
            Tristate::Present(value) => Some(value),
            _ => None,
        }
    }
    pub const fn as_ref(&self) -> Tristate<&T> {
        match self {
            Tristate::Unset => Tristate::Unset,
            Tristate::Absent => Tristate::Absent,
            Tristate::Present(value) => Tristate::Present(value),
        }
    }
    /// Maps the payload, keeping unset and absent as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Tristate<U> {
        match self {
            Tristate::Unset => Tristate::Unset,
            Tristate::Absent => Tristate::Absent,
            Tristate::Present(value) => Tristate::Present(f(value)),
        }
    }

    /// Compares two containers of possibly different payload types. The
    /// states must match, and `eq` decides only when both are present.
    pub fn eq_with<U, F>(&self, other: &Tristate<U>, eq: F) -> bool
    where
        F: FnOnce(&T, &U) -> bool,
    {
        match (self, other) {
            (Tristate::Present(l), Tristate::Present(r)) => eq(l, r),
            (l, r) => l.state() == r.state(),
        }
    }
}

/// The first present item. When none is present the result is absent if any
/// item was absent, otherwise unset.
pub fn first_present<T, I>(items: I) -> Tristate<T>
where
    I: IntoIterator<Item = Tristate<T>>,
{
    let mut seen = Tristate::Unset;
    for item in items {
        match item {
            Tristate::Present(_) => return item,
            Tristate::Absent => seen = Tristate::Absent,
            Tristate::Unset => {}
        }
    }
    seen
}

// written out so that the payload needs no Default of its own
impl<T> Default for Tristate<T> {
    fn default() -> Self {
        Tristate::Unset
    }
}

impl<T> From<Option<T>> for Tristate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Tristate::Present(value),
            None => Tristate::Absent,
        }
    }
}
impl<T> From<Tristate<T>> for Option<T> {
    fn from(value: Tristate<T>) -> Self {
        value.into_option()
    }
}

// Display is for humans only and is never parsed back. An absent container
// has no payload to print, so it renders like its JSON form.
impl<T: fmt::Display> fmt::Display for Tristate<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tristate::Unset => Ok(()),
            Tristate::Absent => write!(f, "null"),
            Tristate::Present(value) => value.fmt(f),
        }
    }
}
