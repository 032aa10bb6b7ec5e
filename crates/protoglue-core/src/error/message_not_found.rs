use super::Error;

/// Error when a requested message type is not declared in the type graph.
#[derive(Debug)]
pub(super) struct MessageNotFound {
    name: Box<str>,
}

impl std::error::Error for MessageNotFound {}

impl core::fmt::Display for MessageNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "message type not found: {}", self.name)
    }
}

impl Error {
    /// Creates a message not found error for the fully-qualified `name`.
    pub fn message_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MessageNotFound(MessageNotFound {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a message not found error.
    pub fn is_message_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MessageNotFound(_))
    }
}
