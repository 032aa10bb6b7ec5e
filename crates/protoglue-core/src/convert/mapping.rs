use crate::schema::catalog::Scalar;
use crate::Result;

use indexmap::IndexMap;

/// Maps primitive field tags to catalog scalar types.
///
/// A mapping starts from the defaults below. Overrides replace individual
/// entries and leave every other tag mapped as before.
///
/// ```text
/// double  →  DOUBLE       int32   →  INTEGER
/// float   →  FLOAT        bool    →  BOOLEAN
/// int64   →  BIG_INT      string  →  STRING
/// uint64  →  BIG_INT      bytes   →  STRING
/// enum    →  STRING
/// ```
///
/// The `enum` entry is not a field tag. Every enum-typed field is converted
/// through it, whatever the enum's own name or values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    entries: IndexMap<String, Scalar>,
}

impl TypeMapping {
    /// Tag under which enum-typed fields are mapped.
    pub const ENUM: &'static str = "enum";

    /// A mapping seeded with the default entries.
    pub fn new() -> TypeMapping {
        Self::default()
    }

    /// A mapping with no entries at all.
    pub fn empty() -> TypeMapping {
        TypeMapping {
            entries: IndexMap::new(),
        }
    }

    /// Returns the mapping with `tag` mapped to `scalar`.
    pub fn with(mut self, tag: impl Into<String>, scalar: Scalar) -> TypeMapping {
        self.insert(tag, scalar);
        self
    }

    /// Maps `tag` to `scalar`, returning the entry it replaced.
    pub fn insert(&mut self, tag: impl Into<String>, scalar: Scalar) -> Option<Scalar> {
        self.entries.insert(tag.into(), scalar)
    }

    /// Applies overrides given as catalog type names, e.g. `("int32", "BIG_INT")`.
    ///
    /// Fails on the first type name that does not parse; the mapping is left
    /// untouched in that case.
    pub fn with_overrides<K, V>(
        mut self,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) -> Result<TypeMapping>
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut parsed = vec![];

        for (tag, name) in overrides {
            parsed.push((tag.into(), name.as_ref().parse::<Scalar>()?));
        }

        self.entries.extend(parsed);
        Ok(self)
    }

    pub fn get(&self, tag: &str) -> Option<Scalar> {
        self.entries.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Scalar)> + '_ {
        self.entries.iter().map(|(tag, scalar)| (tag.as_str(), *scalar))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        let entries = [
            ("double", Scalar::Double),
            ("float", Scalar::Float),
            ("int64", Scalar::BigInt),
            ("uint64", Scalar::BigInt),
            ("int32", Scalar::Integer),
            ("bool", Scalar::Boolean),
            ("string", Scalar::String),
            ("bytes", Scalar::String),
            (Self::ENUM, Scalar::String),
        ];

        TypeMapping {
            entries: entries
                .into_iter()
                .map(|(tag, scalar)| (tag.to_string(), scalar))
                .collect(),
        }
    }
}
