use super::Error;

/// Error when no message name was requested and the schema declares none.
#[derive(Debug)]
pub(super) struct NoMessageTypeFound;

impl std::error::Error for NoMessageTypeFound {}

impl core::fmt::Display for NoMessageTypeFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no message type found in schema")
    }
}

impl Error {
    pub fn no_message_type_found() -> Error {
        Error::from(super::ErrorKind::NoMessageTypeFound(NoMessageTypeFound))
    }

    /// Returns `true` if this error is a no message type found error.
    pub fn is_no_message_type_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoMessageTypeFound(_))
    }
}
