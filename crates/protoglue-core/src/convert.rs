//! Conversion of message types into catalog columns.
//!
//! ```text
//! message User {                       name     string
//!   string name = 1;                   age      int
//!   int32 age = 2;             →       hobbies  array<string>
//!   repeated string hobbies = 3;       address  struct<street:string,city:string>
//!   Address address = 4;
//! }
//! ```
//!
//! Nested messages become struct columns, repeated fields become array
//! columns, and enums collapse to the mapping's `enum` scalar. Message types
//! that contain themselves, directly or through other messages, are rejected.

mod cycle;
pub use cycle::detect_cycle;

mod mapping;
pub use mapping::TypeMapping;

use crate::schema::catalog::{Column, Type};
use crate::schema::proto::{Field, Message, Resolved, TypeGraph};
use crate::{Error, Result};

use std::collections::HashMap;
use tracing::{debug, trace};

/// Converts message types of one [`TypeGraph`] into catalog columns.
///
/// Each converter owns a cache of the column lists it has produced, keyed by
/// fully-qualified message name. A message type reachable through several
/// fields is converted once and cloned into each referencing column. The cache
/// lives as long as the converter and is never shared with another one.
///
/// Conversion needs `&mut self` for the cache, so a converter shared across
/// threads must be wrapped in a lock.
#[derive(Debug)]
pub struct Converter<'a> {
    graph: &'a TypeGraph,
    mapping: TypeMapping,
    cache: HashMap<String, Vec<Column>>,
    traversals: usize,
}

impl<'a> Converter<'a> {
    /// Creates a converter using the default type mapping.
    pub fn new(graph: &'a TypeGraph) -> Converter<'a> {
        Self::with_mapping(graph, TypeMapping::default())
    }

    /// Creates a converter using `mapping` in place of the default type
    /// mapping.
    pub fn with_mapping(graph: &'a TypeGraph, mapping: TypeMapping) -> Converter<'a> {
        Converter {
            graph,
            mapping,
            cache: HashMap::new(),
            traversals: 0,
        }
    }

    /// Looks up a message by fully-qualified name and converts it.
    pub fn convert_message_by_name(&mut self, name: &str) -> Result<Vec<Column>> {
        let graph = self.graph;
        let message = graph
            .message(name)
            .ok_or_else(|| Error::message_not_found(name))?;
        self.convert_message(message)
    }

    /// Converts every field of `message`, in declaration order.
    ///
    /// A message already converted by this converter is returned from the
    /// cache without walking it again. Otherwise the message is first checked
    /// for circular references; on failure nothing is cached.
    pub fn convert_message(&mut self, message: &Message) -> Result<Vec<Column>> {
        if let Some(columns) = self.cache.get(&message.name) {
            debug!(name = %message.name, "message type already converted");
            return Ok(columns.clone());
        }

        detect_cycle(self.graph, message, message)?;

        debug!(name = %message.name, fields = message.fields.len(), "converting message type");
        self.traversals += 1;

        let columns = message
            .fields
            .iter()
            .map(|field| self.convert_field(field))
            .collect::<Result<Vec<_>>>()?;

        self.cache.insert(message.name.clone(), columns.clone());
        Ok(columns)
    }

    /// Converts a single field into a column carrying the field's name.
    pub fn convert_field(&mut self, field: &Field) -> Result<Column> {
        let ty = self.convert_singular(field)?;
        let ty = if field.repeated { Type::array(ty) } else { ty };

        trace!(field = %field.name, ty = %ty, "converted field");
        Ok(Column::new(&field.name, ty))
    }

    /// True if `name` has already been converted by this converter.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Number of message types whose fields have been walked.
    ///
    /// Cache hits do not count.
    pub fn traversals(&self) -> usize {
        self.traversals
    }

    /// The type of `field` ignoring its repeated flag.
    fn convert_singular(&mut self, field: &Field) -> Result<Type> {
        let graph = self.graph;

        match graph.resolve(field) {
            Resolved::Message(message) => Ok(Type::structure(self.convert_message(message)?)),
            Resolved::Enum(_) => self.scalar(TypeMapping::ENUM),
            Resolved::Primitive(tag) => self.scalar(tag),
        }
    }

    fn scalar(&self, tag: &str) -> Result<Type> {
        self.mapping
            .get(tag)
            .map(Type::Scalar)
            .ok_or_else(|| Error::unsupported_type(tag))
    }
}
