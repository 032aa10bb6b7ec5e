mod circular_reference;
mod invalid_type_mapping;
mod message_not_found;
mod no_message_type_found;
mod schema_load_failed;
mod unsupported_type;

use circular_reference::CircularReference;
use invalid_type_mapping::InvalidTypeMapping;
use message_not_found::MessageNotFound;
use no_message_type_found::NoMessageTypeFound;
use schema_load_failed::SchemaLoadFailed;
use std::sync::Arc;
use unsupported_type::UnsupportedType;

/// An error that can occur while loading or converting a schema.
///
/// Every error is terminal for the operation that produced it. No conversion
/// ever returns a partial column list alongside an error.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::SchemaLoadFailed(err) => err.cause(),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    SchemaLoadFailed(SchemaLoadFailed),
    MessageNotFound(MessageNotFound),
    NoMessageTypeFound(NoMessageTypeFound),
    CircularReference(CircularReference),
    UnsupportedType(UnsupportedType),
    InvalidTypeMapping(InvalidTypeMapping),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            SchemaLoadFailed(err) => core::fmt::Display::fmt(err, f),
            MessageNotFound(err) => core::fmt::Display::fmt(err, f),
            NoMessageTypeFound(err) => core::fmt::Display::fmt(err, f),
            CircularReference(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            InvalidTypeMapping(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_size() {
        let expected_size = std::mem::size_of::<usize>();
        assert_eq!(expected_size, std::mem::size_of::<Error>());
    }

    #[test]
    fn schema_load_failed_with_cause() {
        let err = Error::schema_load_failed("protos/user.proto", anyhow::anyhow!("syntax error"));
        assert!(err.is_schema_load_failed());
        assert_eq!(
            err.to_string(),
            "failed to load schema from protos/user.proto: syntax error"
        );
        assert_eq!(err.source().unwrap().to_string(), "syntax error");
    }

    #[test]
    fn schema_load_failed_without_path() {
        let err = Error::invalid_type_graph("duplicate message type `User`");
        assert!(err.is_schema_load_failed());
        assert_eq!(
            err.to_string(),
            "failed to load schema: duplicate message type `User`"
        );
    }

    #[test]
    fn message_not_found() {
        let err = Error::message_not_found("pkg.Missing");
        assert!(err.is_message_not_found());
        assert_eq!(err.to_string(), "message type not found: pkg.Missing");
        assert!(err.source().is_none());
    }

    #[test]
    fn no_message_type_found() {
        let err = Error::no_message_type_found();
        assert!(err.is_no_message_type_found());
        assert_eq!(err.to_string(), "no message type found in schema");
    }

    #[test]
    fn circular_reference() {
        let err = Error::circular_reference("Node");
        assert!(err.is_circular_reference());
        assert_eq!(err.circular_reference_type(), Some("Node"));
        assert_eq!(
            err.to_string(),
            "circular reference detected in message type: Node"
        );
    }

    #[test]
    fn unsupported_type() {
        let err = Error::unsupported_type("sint32");
        assert!(err.is_unsupported_type());
        assert!(!err.is_circular_reference());
        assert_eq!(err.to_string(), "unsupported field type: sint32");
    }

    #[test]
    fn invalid_type_mapping() {
        let err = Error::invalid_type_mapping("unknown catalog type `nope`");
        assert!(err.is_invalid_type_mapping());
        assert_eq!(
            err.to_string(),
            "invalid type mapping: unknown catalog type `nope`"
        );
    }

    #[test]
    fn clone_shares_kind() {
        let err = Error::message_not_found("User");
        let cloned = err.clone();
        assert!(cloned.is_message_not_found());
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn alternate_debug_shows_kind() {
        let err = Error::unsupported_type("uint32");
        let debug = format!("{err:#?}");
        assert!(debug.contains("UnsupportedType"), "{debug}");
        assert_eq!(format!("{err:?}"), "unsupported field type: uint32");
    }
}
