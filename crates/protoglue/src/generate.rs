use crate::{Column, Converter, Error, Loader, ProtoLoader, Result, TypeGraph, TypeMapping};

use std::path::Path;
use tracing::debug;

/// Options for a single schema generation run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Fully-qualified name of the message to convert. When unset, the first
    /// top-level message of the schema is used.
    pub message: Option<String>,

    /// Primitive tag to catalog type mapping
    pub mapping: TypeMapping,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message to convert
    pub fn message(mut self, name: impl Into<String>) -> Self {
        self.message = Some(name.into());
        self
    }

    /// Set the type mapping
    pub fn mapping(mut self, mapping: TypeMapping) -> Self {
        self.mapping = mapping;
        self
    }
}

/// Loads the schema at `path` with `loader` and converts the selected message.
///
/// Loader and conversion errors are returned as-is.
pub fn generate_schema<L>(
    loader: &L,
    path: impl AsRef<Path>,
    options: &Options,
) -> Result<Vec<Column>>
where
    L: Loader + ?Sized,
{
    let graph = loader.load(path.as_ref())?;
    convert_graph(&graph, options)
}

/// Generates a column schema from a `.proto` file using the default [`ProtoLoader`].
pub fn generate(path: impl AsRef<Path>, options: &Options) -> Result<Vec<Column>> {
    generate_schema(&ProtoLoader::new(), path, options)
}

/// Selects the message named by `options` in an already loaded graph and
/// converts it with a fresh [`Converter`].
///
/// Without a message name, the first top-level message of the requested file
/// is used. Messages of imported files are only selected by name.
pub fn convert_graph(graph: &TypeGraph, options: &Options) -> Result<Vec<Column>> {
    let message = match &options.message {
        Some(name) => graph
            .message(name)
            .ok_or_else(|| Error::message_not_found(name))?,
        None => graph
            .first_top_level_message()
            .ok_or_else(Error::no_message_type_found)?,
    };

    debug!(name = %message.name, "generating schema");
    Converter::with_mapping(graph, options.mapping.clone()).convert_message(message)
}
