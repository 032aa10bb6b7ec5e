use super::Error;

/// Error when a message type can reach itself through message-typed fields.
///
/// Catalog struct types cannot be self-referential, so any containment cycle
/// through the type being converted is rejected. The reported name is the
/// type whose conversion was requested, not the type holding the back-edge.
#[derive(Debug)]
pub(super) struct CircularReference {
    type_name: Box<str>,
}

impl std::error::Error for CircularReference {}

impl core::fmt::Display for CircularReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "circular reference detected in message type: {}",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a circular reference error naming the message type under conversion.
    pub fn circular_reference(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CircularReference(CircularReference {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is a circular reference error.
    pub fn is_circular_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CircularReference(_))
    }

    /// The message type a circular reference was detected through.
    pub fn circular_reference_type(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::CircularReference(err) => Some(&err.type_name),
            _ => None,
        }
    }
}
