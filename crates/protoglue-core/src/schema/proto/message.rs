use super::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Fully-qualified name, unique within the graph
    pub name: String,

    /// Fields in declaration order. Output columns follow this order.
    pub fields: Vec<Field>,

    /// False if the message is declared inside another message
    pub top_level: bool,

    /// True if the message comes from a file imported by the requested schema
    pub imported: bool,
}

impl Message {
    /// Creates a top-level message with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            top_level: true,
            imported: false,
        }
    }

    /// Creates a message declared inside another message.
    pub fn nested(name: impl Into<String>) -> Self {
        Self {
            top_level: false,
            ..Self::new(name)
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Marks the message as declared in an imported file.
    pub fn imported(mut self) -> Self {
        self.imported = true;
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
