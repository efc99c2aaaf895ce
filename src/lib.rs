//! Tristate – an optional value that remembers *why* it is empty.
//!
//! A plain `Option<T>` cannot tell a field that was never touched from one
//! that was deliberately cleared. Partial updates (PATCH bodies) and nullable
//! columns need exactly that distinction, so [`Tristate`] has three states:
//! * `Unset` – the default, never assigned ("field omitted").
//! * `Absent` – explicitly cleared ("field set to null").
//! * `Present(T)` – holds a payload.
//!
//! The three states stay independent everywhere: no adapter folds one into
//! another. NULL from a store is `Absent`, and only a missing serde field
//! (with `#[serde(default)]`) is `Unset`.
//!
//! ## Modules
//! * [`tristate`] – The container, its accessors and equality.
//! * [`zero`] – The [`zero::Zeroable`] capability for lifting raw values.
//! * [`json`] – serde support and raw JSON byte helpers.
//! * [`value`] / [`convert`] – The relational value union and the
//!   [`convert::ToValue`] / [`convert::FromValue`] conversion table.
//! * [`persist`] – rusqlite `ToSql` / `FromSql` for values and containers.
//! * [`duration`] – Duration strings such as `"1h30m"`.
//! * [`log`] – tracing fields.
//!
//! ## Quick Start
//! ```
//! use rusqlite::Connection;
//! use tristate::Tristate;
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch("create table Person (Nickname text null);").unwrap();
//! conn.execute("insert into Person values (?)", [Tristate::<String>::absent()]).unwrap();
//! let nickname: Tristate<String> = conn
//!     .query_row("select Nickname from Person", [], |row| row.get(0))
//!     .unwrap();
//! assert!(nickname.is_absent());
//! ```

pub mod convert;
pub mod duration;
pub mod error;
pub mod json;
pub mod log;
pub mod persist;
pub mod tristate;
pub mod value;
pub mod zero;

mod array;

pub use convert::{Binary, BinaryCodec, FromValue, ToValue};
pub use error::{Result, TristateError};
pub use tristate::{State, Tristate, first_present};
pub use value::Value;
pub use zero::Zeroable;
