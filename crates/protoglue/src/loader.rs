mod descriptor;

use crate::{Error, Result, TypeGraph};

use std::path::{Path, PathBuf};
use tracing::debug;

/// Produces a fully resolved [`TypeGraph`] from a schema source.
///
/// Implementations must only return graphs in which every field reference
/// resolves; any parse or resolution failure is reported as a schema load
/// error.
pub trait Loader {
    fn load(&self, path: &Path) -> Result<TypeGraph>;
}

impl<F> Loader for F
where
    F: Fn(&Path) -> Result<TypeGraph>,
{
    fn load(&self, path: &Path) -> Result<TypeGraph> {
        self(path)
    }
}

/// Loads `.proto` files with the `protox` compiler.
///
/// The directory containing the requested file is always searched for
/// imports, after any include paths added with [`ProtoLoader::include`].
#[derive(Debug, Clone, Default)]
pub struct ProtoLoader {
    includes: Vec<PathBuf>,
}

impl ProtoLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import search path
    pub fn include(mut self, path: impl Into<PathBuf>) -> Self {
        self.includes.push(path.into());
        self
    }

    pub fn includes(&self) -> &[PathBuf] {
        &self.includes
    }
}

impl Loader for ProtoLoader {
    fn load(&self, path: &Path) -> Result<TypeGraph> {
        let failed =
            |err: anyhow::Error| Error::schema_load_failed(path.display().to_string(), err);

        let file = path.canonicalize().map_err(|err| failed(err.into()))?;
        let parent = file.parent().unwrap_or(Path::new("/")).to_path_buf();

        let mut includes = vec![];
        for include in &self.includes {
            includes.push(include.canonicalize().map_err(|err| {
                failed(anyhow::Error::from(err).context(format!(
                    "include path {} is not accessible",
                    include.display()
                )))
            })?);
        }
        includes.push(parent);

        let mut compiler = protox::Compiler::new(&includes).map_err(|err| failed(err.into()))?;
        compiler.open_file(&file).map_err(|err| failed(err.into()))?;

        let requested: Vec<String> = compiler
            .file_descriptor_set()
            .file
            .iter()
            .map(|file| file.name().to_string())
            .collect();

        let files = compiler.include_imports(true).file_descriptor_set().file;
        debug!(path = %path.display(), files = files.len(), "compiled schema");

        descriptor::lower(files, &requested)
    }
}
