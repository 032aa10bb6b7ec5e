use super::Error;

/// Error when a schema source cannot be parsed or resolved into a type graph.
///
/// This occurs when:
/// - The source file does not exist or cannot be read
/// - The source has syntax errors
/// - A field references a type that cannot be resolved
/// - The same fully-qualified name is declared twice
#[derive(Debug)]
pub(super) struct SchemaLoadFailed {
    path: Option<Box<str>>,
    message: Option<Box<str>>,
    cause: Option<anyhow::Error>,
}

impl SchemaLoadFailed {
    pub(super) fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

impl std::error::Error for SchemaLoadFailed {}

impl core::fmt::Display for SchemaLoadFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("failed to load schema")?;
        if let Some(ref path) = self.path {
            write!(f, " from {}", path)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(ref cause) = self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a schema load error for `path`, wrapping the loader's diagnostic.
    pub fn schema_load_failed(path: impl Into<String>, cause: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::SchemaLoadFailed(SchemaLoadFailed {
            path: Some(path.into().into()),
            message: None,
            cause: Some(cause.into()),
        }))
    }

    /// Creates a schema load error for a type graph that violates its
    /// resolution guarantees (dangling reference, duplicate name).
    pub fn invalid_type_graph(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaLoadFailed(SchemaLoadFailed {
            path: None,
            message: Some(message.into().into()),
            cause: None,
        }))
    }

    /// Returns `true` if this error is a schema load error.
    pub fn is_schema_load_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaLoadFailed(_))
    }
}
