//! Structured-data adapter.
//!
//! Through serde, `Absent` maps to `null` and `Present` to the payload. A
//! serde format cannot express "write nothing", so an `Unset` value refuses to
//! serialize; fields should be declared as
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! # use tristate::Tristate;
//! #[derive(Serialize, Deserialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Tristate::is_unset")]
//!     name: Tristate<String>,
//! }
//! ```
//!
//! so that an untouched field is omitted on output and becomes `Unset` when
//! missing from input. Without `#[serde(default)]` a missing field is read as
//! `Absent`.
//!
//! [`Tristate::encode_json`] and [`Tristate::decode_json`] work on raw JSON
//! bytes, where `Unset` is the empty byte string.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::tristate::Tristate;

const NULL: &[u8] = b"null";

impl<T: Serialize> Serialize for Tristate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Tristate::Unset => Err(ser::Error::custom(
                "tristate: unset value must be skipped, see `skip_serializing_if`",
            )),
            Tristate::Absent => serializer.serialize_none(),
            Tristate::Present(value) => serializer.serialize_some(value),
        }
    }
}

struct TristateVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for TristateVisitor<T> {
    type Value = Tristate<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "null or a value")
    }
    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Tristate::Absent)
    }
    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Tristate::Absent)
    }
    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Tristate::Present)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tristate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_option(TristateVisitor(PhantomData))
    }
}

impl<T> Tristate<T> {
    /// JSON bytes for this container: empty for `Unset`, `null` for
    /// `Absent`, the payload's own encoding for `Present`.
    pub fn encode_json(&self) -> Result<Vec<u8>>
    where
        T: Serialize,
    {
        match self {
            Tristate::Unset => Ok(Vec::new()),
            Tristate::Absent => Ok(NULL.to_vec()),
            Tristate::Present(value) => Ok(serde_json::to_vec(value)?),
        }
    }

    /// Overwrites this container from JSON bytes.
    ///
    /// Empty input leaves the container as it is. `null` makes it `Absent`,
    /// anything else is parsed as `T`. If parsing fails the container is not
    /// modified and the `serde_json` error is returned as is.
    pub fn decode_json(&mut self, input: &[u8]) -> Result<()>
    where
        T: DeserializeOwned,
    {
        if input.is_empty() {
            return Ok(());
        }
        if input == NULL {
            *self = Tristate::Absent;
            return Ok(());
        }
        match serde_json::from_slice::<Tristate<T>>(input) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(error) => {
                debug!(to = std::any::type_name::<T>(), %error, "json decode failed");
                Err(error.into())
            }
        }
    }
}
