use super::{Enum, Field, FieldTy, Message};

use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The resolved universe of message types and enums reachable from a schema.
///
/// A `TypeGraph` is only obtainable through [`Builder::build`], which checks
/// that every enum or message reference held by a field names a type declared
/// in the graph. Consumers rely on that and do not re-verify references.
#[derive(Debug, Default, Clone)]
pub struct TypeGraph {
    messages: IndexMap<String, Message>,
    enums: IndexMap<String, Enum>,
}

/// What a field's type reference points at inside a [`TypeGraph`].
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Primitive(&'a str),
    Enum(&'a Enum),
    Message(&'a Message),
}

#[derive(Debug, Default)]
pub struct Builder {
    messages: IndexMap<String, Message>,
    enums: IndexMap<String, Enum>,
    duplicates: Vec<String>,
}

impl TypeGraph {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a graph from messages and enums, in declaration order.
    pub fn new(
        messages: impl IntoIterator<Item = Message>,
        enums: impl IntoIterator<Item = Enum>,
    ) -> Result<TypeGraph> {
        let mut builder = Builder::default();

        for message in messages {
            builder.message(message);
        }

        for enum_type in enums {
            builder.enumeration(enum_type);
        }

        builder.build()
    }

    /// Messages in declaration order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    /// Get a message by fully-qualified name
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.get(name)
    }

    #[track_caller]
    pub fn expect_message(&self, name: &str) -> &Message {
        self.message(name)
            .unwrap_or_else(|| panic!("unresolved message type `{name}`"))
    }

    /// Get an enum by fully-qualified name
    pub fn enumeration(&self, name: &str) -> Option<&Enum> {
        self.enums.get(name)
    }

    #[track_caller]
    pub fn expect_enum(&self, name: &str) -> &Enum {
        self.enumeration(name)
            .unwrap_or_else(|| panic!("unresolved enum type `{name}`"))
    }

    /// The first message declared outside any other message.
    ///
    /// Messages from imported files are never picked, even when the requested
    /// file declares no messages of its own.
    pub fn first_top_level_message(&self) -> Option<&Message> {
        self.messages().find(|message| message.top_level && !message.imported)
    }

    /// Resolves a field's type reference to the type it names.
    #[track_caller]
    pub fn resolve<'a>(&'a self, field: &'a Field) -> Resolved<'a> {
        match &field.ty {
            FieldTy::Primitive(tag) => Resolved::Primitive(tag),
            FieldTy::Enum(name) => Resolved::Enum(self.expect_enum(name)),
            FieldTy::Message(name) => Resolved::Message(self.expect_message(name)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.enums.is_empty()
    }
}

impl Builder {
    pub fn message(&mut self, message: Message) -> &mut Self {
        if self.messages.contains_key(&message.name) || self.enums.contains_key(&message.name) {
            self.duplicates.push(message.name.clone());
        } else {
            self.messages.insert(message.name.clone(), message);
        }
        self
    }

    pub fn enumeration(&mut self, enum_type: Enum) -> &mut Self {
        if self.messages.contains_key(&enum_type.name) || self.enums.contains_key(&enum_type.name)
        {
            self.duplicates.push(enum_type.name.clone());
        } else {
            self.enums.insert(enum_type.name.clone(), enum_type);
        }
        self
    }

    pub fn build(self) -> Result<TypeGraph> {
        if let Some(name) = self.duplicates.first() {
            return Err(Error::invalid_type_graph(format!(
                "type `{name}` is declared more than once"
            )));
        }

        let graph = TypeGraph {
            messages: self.messages,
            enums: self.enums,
        };

        graph.verify_references()?;
        Ok(graph)
    }
}

impl TypeGraph {
    fn verify_references(&self) -> Result<()> {
        for message in self.messages() {
            let mut names = HashSet::new();

            for field in &message.fields {
                if !names.insert(field.name.as_str()) {
                    return Err(Error::invalid_type_graph(format!(
                        "field `{}.{}` is declared more than once",
                        message.name, field.name
                    )));
                }

                let resolved = match &field.ty {
                    FieldTy::Primitive(_) => true,
                    FieldTy::Enum(name) => self.enums.contains_key(name),
                    FieldTy::Message(name) => self.messages.contains_key(name),
                };

                if !resolved {
                    return Err(Error::invalid_type_graph(format!(
                        "field `{}.{}` references unknown type `{}`",
                        message.name,
                        field.name,
                        match &field.ty {
                            FieldTy::Primitive(tag) => tag,
                            FieldTy::Enum(name) | FieldTy::Message(name) => name,
                        }
                    )));
                }
            }
        }

        Ok(())
    }
}
