//! Lifting raw values into presence tracking by their zero value.

use std::collections::{BTreeMap, HashMap};

use crate::tristate::Tristate;

/// A payload that can tell whether it holds its type's zero value, and
/// optionally whether it represents an explicit "none".
pub trait Zeroable {
    fn is_zero(&self) -> bool;
    /// Defaults to `false`: most types have no notion of an explicit none.
    fn is_none(&self) -> bool {
        false
    }
}

impl<T> Tristate<T> {
    /// `Unset` when `value` is its type's zero value, `Present` otherwise.
    ///
    /// ```
    /// use tristate::Tristate;
    /// assert!(Tristate::from_zeroable(0).is_unset());
    /// assert_eq!(Tristate::from_zeroable("x"), Tristate::present("x"));
    /// ```
    pub fn from_zeroable(value: T) -> Self
    where
        T: Zeroable,
    {
        if value.is_zero() {
            Tristate::Unset
        } else {
            Tristate::Present(value)
        }
    }
    /// Like [`Tristate::from_zeroable`], but a value reporting itself as
    /// none becomes `Absent`. The none check wins over the zero check.
    pub fn from_nullable(value: T) -> Self
    where
        T: Zeroable,
    {
        if value.is_none() {
            Tristate::Absent
        } else {
            Tristate::from_zeroable(value)
        }
    }
}

macro_rules! zeroable_numbers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0 as $ty
                }
            }
        )+
    };
}

zeroable_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Zeroable for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}
impl Zeroable for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}
impl Zeroable for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
impl Zeroable for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
impl<T> Zeroable for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
impl<K, V, S> Zeroable for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
impl<K, V> Zeroable for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
impl Zeroable for chrono::Duration {
    fn is_zero(&self) -> bool {
        chrono::Duration::is_zero(self)
    }
}
impl<T: Zeroable + ?Sized> Zeroable for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
    fn is_none(&self) -> bool {
        (**self).is_none()
    }
}
impl<T: Zeroable + ?Sized> Zeroable for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
    fn is_none(&self) -> bool {
        (**self).is_none()
    }
}
// A missing Option plays the role of a nil pointer: both zero and none.
impl<T> Zeroable for Option<T> {
    fn is_zero(&self) -> bool {
        Option::is_none(self)
    }
    fn is_none(&self) -> bool {
        Option::is_none(self)
    }
}
impl<T> Zeroable for Tristate<T> {
    fn is_zero(&self) -> bool {
        self.is_unset()
    }
    fn is_none(&self) -> bool {
        self.is_absent()
    }
}
