#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name, unique within the owning message
    pub name: String,

    /// Primitive, enum, or message reference
    pub ty: FieldTy,

    /// True if the field holds zero or more values
    pub repeated: bool,
}

/// What a field's type resolves to.
///
/// The loader decides this once while building the graph, so conversion is a
/// match on the variant and never a lookup by guesswork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTy {
    /// A scalar keyword such as `int32` or `string`.
    Primitive(String),

    /// Fully-qualified name of an enum in the same graph.
    Enum(String),

    /// Fully-qualified name of a message in the same graph.
    Message(String),
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldTy) -> Self {
        Self {
            name: name.into(),
            ty,
            repeated: false,
        }
    }

    pub fn primitive(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(name, FieldTy::Primitive(tag.into()))
    }

    pub fn enumeration(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, FieldTy::Enum(target.into()))
    }

    pub fn message(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, FieldTy::Message(target.into()))
    }

    /// Marks the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}

impl FieldTy {
    /// The referenced message name, if this is a message reference.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(name) => Some(name),
            _ => None,
        }
    }
}
