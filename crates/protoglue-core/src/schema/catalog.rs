use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// Scalar column types supported by the table catalog.
///
/// The `Display` implementation renders the catalog's canonical type string
/// (`bigint`, `varchar(255)`, ...), which is what ends up in table
/// definitions. `FromStr` accepts either that form or the constant-style name
/// (`BIG_INT`, `VARCHAR(255)`), ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Boolean,

    /// 1-byte signed integer
    TinyInt,

    /// 2-byte signed integer
    SmallInt,

    /// 4-byte signed integer
    Integer,

    /// 8-byte signed integer
    BigInt,

    Float,

    Double,

    String,

    Binary,

    Date,

    Timestamp,

    /// Decimal number with explicit precision and scale.
    Decimal { precision: u32, scale: u32 },

    /// Fixed-length character data
    Char(u32),

    /// Variable-length character data with a maximum length
    VarChar(u32),
}

/// A catalog column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Scalar(Scalar),

    /// An ordered collection of named sub-columns.
    Struct(Vec<Column>),

    /// A list of values of a single element type.
    Array(Box<Type>),
}

/// A named catalog column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: Type,
}

impl Type {
    /// Builds a struct type from its ordered sub-columns.
    pub fn structure(columns: Vec<Column>) -> Type {
        Type::Struct(columns)
    }

    /// Builds a list type wrapping `element`.
    pub fn array(element: impl Into<Type>) -> Type {
        Type::Array(Box::new(element.into()))
    }

    /// True for scalar types, false for struct and array types.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Scalar(_))
    }

    /// The scalar, for scalar types only.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Type::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&[Column]> {
        match self {
            Type::Struct(columns) => Some(columns),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Column {
        Column {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl From<Scalar> for Type {
    fn from(value: Scalar) -> Self {
        Type::Scalar(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean => f.write_str("boolean"),
            Scalar::TinyInt => f.write_str("tinyint"),
            Scalar::SmallInt => f.write_str("smallint"),
            Scalar::Integer => f.write_str("int"),
            Scalar::BigInt => f.write_str("bigint"),
            Scalar::Float => f.write_str("float"),
            Scalar::Double => f.write_str("double"),
            Scalar::String => f.write_str("string"),
            Scalar::Binary => f.write_str("binary"),
            Scalar::Date => f.write_str("date"),
            Scalar::Timestamp => f.write_str("timestamp"),
            Scalar::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            Scalar::Char(len) => write!(f, "char({len})"),
            Scalar::VarChar(len) => write!(f, "varchar({len})"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Type::Array(element) => write!(f, "array<{element}>"),
            Type::Struct(columns) => {
                f.write_str("struct<")?;
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", column.name, column.ty)?;
                }
                f.write_str(">")
            }
        }
    }
}

impl FromStr for Scalar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Scalar> {
        // `BIG_INT`, `big_int` and `bigint` all name the same type
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        let (name, args) = match normalized.split_once('(') {
            Some((name, rest)) => {
                let Some(args) = rest.strip_suffix(')') else {
                    return Err(unknown_scalar(s));
                };
                (name, Some(args))
            }
            None => (normalized.as_str(), None),
        };

        let scalar = match (name, args) {
            ("boolean" | "bool", None) => Scalar::Boolean,
            ("tinyint", None) => Scalar::TinyInt,
            ("smallint", None) => Scalar::SmallInt,
            ("integer" | "int", None) => Scalar::Integer,
            ("bigint", None) => Scalar::BigInt,
            ("float", None) => Scalar::Float,
            ("double", None) => Scalar::Double,
            ("string", None) => Scalar::String,
            ("binary", None) => Scalar::Binary,
            ("date", None) => Scalar::Date,
            ("timestamp", None) => Scalar::Timestamp,
            ("decimal", Some(args)) => {
                let Some((precision, scale)) = args.split_once(',') else {
                    return Err(unknown_scalar(s));
                };
                Scalar::Decimal {
                    precision: parse_len(s, precision)?,
                    scale: parse_len(s, scale)?,
                }
            }
            ("char", Some(len)) => Scalar::Char(parse_len(s, len)?),
            ("varchar", Some(len)) => Scalar::VarChar(parse_len(s, len)?),
            _ => return Err(unknown_scalar(s)),
        };

        Ok(scalar)
    }
}

fn parse_len(src: &str, arg: &str) -> Result<u32> {
    arg.parse().map_err(|_| {
        Error::invalid_type_mapping(format!("invalid type parameter `{arg}` in `{src}`"))
    })
}

fn unknown_scalar(src: &str) -> Error {
    Error::invalid_type_mapping(format!("unknown catalog type `{src}`"))
}
