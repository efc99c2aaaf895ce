// used for persistence
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::types::Value as SqlValue;

use crate::convert::{FromValue, ToValue};
use crate::tristate::Tristate;
use crate::value::Value;

// ------------- Value -------------
// SQLite has no boolean or timestamp storage class: booleans are stored as
// INTEGER 0/1 and timestamps as TEXT through rusqlite's chrono support.
impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Bool(b) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*b))),
            Value::Int(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            Value::Float(x) => ToSqlOutput::Owned(SqlValue::Real(*x)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Bytes(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            Value::Timestamp(t) => return t.to_sql(),
        })
    }
}
impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Int(i),
            ValueRef::Real(x) => Value::Float(x),
            ValueRef::Text(t) => Value::Text(
                std::str::from_utf8(t)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?
                    .to_string(),
            ),
            ValueRef::Blob(b) => Value::Bytes(b.to_vec()),
        })
    }
}

// ------------- Tristate -------------
impl<T: ToValue> ToSql for Tristate<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = self.to_value()?;
        let output = value.to_sql()?;
        // the converted value is a temporary, so detach borrowed output from it
        Ok(ToSqlOutput::Owned(match output {
            ToSqlOutput::Borrowed(value_ref) => SqlValue::from(value_ref),
            ToSqlOutput::Owned(owned) => owned,
            _ => return Err(rusqlite::Error::ToSqlConversionFailure("unexpected sql output".into())),
        }))
    }
}
impl<T: FromValue> FromSql for Tristate<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let value = Value::column_result(value)?;
        Tristate::from_value(&value).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
