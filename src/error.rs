use thiserror::Error;

#[derive(Error, Debug)]
pub enum TristateError {
    #[error("cannot convert {from} to {to}: {reason}")]
    Convert {
        from: &'static str,
        to: &'static str,
        reason: String,
    },
    #[error("conversion from {from} to {to} is not implemented")]
    Unsupported { from: &'static str, to: &'static str },
    #[error("cannot encode value of {type_name}: {reason}")]
    Unencodable {
        type_name: &'static str,
        reason: String,
    },
    #[error("malformed array literal: {0}")]
    ArrayLiteral(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TristateError>;

impl TristateError {
    pub(crate) fn convert(from: &'static str, to: &'static str, reason: impl ToString) -> Self {
        Self::Convert {
            from,
            to,
            reason: reason.to_string(),
        }
    }
    pub(crate) fn unsupported(from: &'static str, to: &'static str) -> Self {
        Self::Unsupported { from, to }
    }
    /// True for the failures caused by a value that could not be parsed or
    /// narrowed, as opposed to a pair of types with no conversion path.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Convert { .. } | Self::ArrayLiteral(_) | Self::Json(_))
    }
}

// Helper conversions
impl From<TristateError> for rusqlite::Error {
    fn from(e: TristateError) -> Self {
        rusqlite::Error::ToSqlConversionFailure(Box::new(e))
    }
}
