#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    /// Fully-qualified name of the enum
    pub name: String,

    /// Symbolic constants, in declaration order
    pub values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![],
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}
