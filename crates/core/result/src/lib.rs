#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

use std::fmt;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? Event related errors
    NotOwner,

    // ? RSVP related errors
    RaceLost,

    // ? Composite read errors
    SyncFailed {
        cause: Box<Error>,
    },

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    NotFound,
    Cancelled,
    FailedValidation {
        error: String,
    },
}

impl Error {
    /// Whether this error originated from the store being unreachable
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self.error_type, ErrorType::DatabaseError { .. })
    }

    /// Wrap this error as the cause of a failed composite read
    pub fn into_sync_failure(self, location: String) -> Error {
        Error {
            error_type: ErrorType::SyncFailed {
                cause: Box::new(self),
            },
            location,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::LabelMe => write!(f, "Unlabeled error"),
            ErrorType::NotOwner => write!(f, "Viewer does not own this event"),
            ErrorType::RaceLost => write!(f, "Concurrent RSVP change detected"),
            ErrorType::SyncFailed { cause } => write!(f, "Failed to load listing: {cause}"),
            ErrorType::DatabaseError {
                operation,
                collection,
            } => write!(f, "Store unavailable during {operation} on {collection}"),
            ErrorType::InternalError => write!(f, "Internal error"),
            ErrorType::NotFound => write!(f, "Not found"),
            ErrorType::Cancelled => write!(f, "Request was cancelled"),
            ErrorType::FailedValidation { error } => write!(f, "Validation failed: {error}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error_type, self.location)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.error_type {
            ErrorType::SyncFailed { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
macro_rules! create_sync_error {
    ( $cause: expr ) => {
        $crate::Error::into_sync_failure(
            $cause,
            format!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}

#[macro_export]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| $crate::create_database_error!(stringify!($type), $collection))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Error, ErrorType};

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(LabelMe);
        assert!(matches!(error.error_type, ErrorType::LabelMe));
        assert!(error.location.starts_with(file!()));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_error!(FailedValidation {
            error: "title: length".to_string()
        });

        assert!(matches!(
            error.error_type,
            ErrorType::FailedValidation { ref error } if error == "title: length"
        ));
    }

    #[test]
    fn database_error_counts_as_store_unavailable() {
        let error = create_database_error!("find", "events");
        assert!(error.is_store_unavailable());
        assert!(!create_error!(NotFound).is_store_unavailable());
    }

    #[test]
    fn sync_error_keeps_its_cause() {
        let error: Error = create_sync_error!(create_database_error!("find", "rsvps"));

        match &error.error_type {
            ErrorType::SyncFailed { cause } => assert!(cause.is_store_unavailable()),
            other => panic!("unexpected error type {other:?}"),
        }

        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("rsvps"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_with_type_tag() {
        let error = create_error!(RaceLost);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "RaceLost");
        assert!(value["location"].is_string());
    }
}
