use anyhow::{Context, Result};
use indexmap::IndexMap;
use protoglue::{ProtoLoader, TypeMapping};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for schema generation, usually read from a TOML file.
///
/// ```toml
/// include = ["protos/common"]
///
/// [mapping]
/// int32 = "BIG_INT"
/// bytes = "binary"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Additional import search paths
    pub include: Vec<PathBuf>,

    /// Type mapping overrides, primitive tag to catalog type name
    pub mapping: IndexMap<String, String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file. Relative include paths are resolved against the
    /// directory containing the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = contents
            .parse()
            .with_context(|| format!("invalid config file {}", path.display()))?;

        if let Some(dir) = path.parent() {
            for include in &mut config.include {
                *include = dir.join(&*include);
            }
        }

        Ok(config)
    }

    /// Add an import search path
    pub fn include(mut self, path: impl Into<PathBuf>) -> Self {
        self.include.push(path.into());
        self
    }

    /// Map a primitive tag to a catalog type name, replacing any earlier entry
    pub fn map(mut self, tag: impl Into<String>, ty: impl Into<String>) -> Self {
        self.mapping.insert(tag.into(), ty.into());
        self
    }

    /// The default type mapping with this config's overrides applied.
    pub fn type_mapping(&self) -> protoglue::Result<TypeMapping> {
        TypeMapping::new().with_overrides(
            self.mapping
                .iter()
                .map(|(tag, ty)| (tag.as_str(), ty.as_str())),
        )
    }

    pub fn loader(&self) -> ProtoLoader {
        self.include
            .iter()
            .fold(ProtoLoader::new(), |loader, path| loader.include(path))
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoglue::Scalar;

    #[test]
    fn parse_full_config() {
        let config: Config = r#"
            include = ["vendor/protos"]

            [mapping]
            int32 = "BIG_INT"
            bytes = "binary"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config,
            Config::new()
                .include("vendor/protos")
                .map("int32", "BIG_INT")
                .map("bytes", "binary")
        );
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.type_mapping().unwrap(), TypeMapping::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!("mappings = {}".parse::<Config>().is_err());
    }

    #[test]
    fn type_mapping_applies_overrides() {
        let mapping = Config::new()
            .map("int32", "BIG_INT")
            .map("sint64", "bigint")
            .type_mapping()
            .unwrap();

        assert_eq!(mapping.get("int32"), Some(Scalar::BigInt));
        assert_eq!(mapping.get("sint64"), Some(Scalar::BigInt));
        assert_eq!(mapping.get("string"), Some(Scalar::String));
    }

    #[test]
    fn type_mapping_rejects_unknown_type() {
        let err = Config::new().map("int32", "LONG").type_mapping().unwrap_err();
        assert!(err.is_invalid_type_mapping());
    }

    #[test]
    fn later_map_entry_wins() {
        let config = Config::new().map("int32", "BIG_INT").map("int32", "SMALL_INT");
        assert_eq!(
            config.type_mapping().unwrap().get("int32"),
            Some(Scalar::SmallInt)
        );
    }

    #[test]
    fn loader_uses_includes() {
        let loader = Config::new().include("a").include("b").loader();
        assert_eq!(loader.includes(), [PathBuf::from("a"), PathBuf::from("b")]);
    }
}
