use super::Error;

/// Error when a primitive field type has no entry in the active type mapping.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    tag: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported field type: {}", self.tag)
    }
}

impl Error {
    /// Creates an unsupported type error for the primitive `tag`.
    pub fn unsupported_type(tag: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            tag: tag.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
