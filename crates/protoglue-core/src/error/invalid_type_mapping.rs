use super::Error;

/// Error when a type mapping override names a catalog type that does not exist.
///
/// This is raised while building a [`TypeMapping`](crate::convert::TypeMapping)
/// from configuration, before any conversion starts.
#[derive(Debug)]
pub(super) struct InvalidTypeMapping {
    message: Box<str>,
}

impl std::error::Error for InvalidTypeMapping {}

impl core::fmt::Display for InvalidTypeMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid type mapping: {}", self.message)
    }
}

impl Error {
    pub fn invalid_type_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTypeMapping(InvalidTypeMapping {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type mapping error.
    pub fn is_invalid_type_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTypeMapping(_))
    }
}
