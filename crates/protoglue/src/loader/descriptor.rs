use crate::schema::proto::{Builder, Enum, Field, FieldTy, Message};
use crate::{Result, TypeGraph};

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto};

/// Lowers compiled file descriptors into a [`TypeGraph`].
///
/// Files named in `requested` are declared first, so their messages precede
/// those of imported files in the graph. Messages of every other file are
/// marked as imported.
pub(super) fn lower(
    mut files: Vec<FileDescriptorProto>,
    requested: &[String],
) -> Result<TypeGraph> {
    files.sort_by_key(|file| !requested.iter().any(|name| name == file.name()));

    let mut builder = TypeGraph::builder();

    for file in &files {
        let scope = file.package();
        let imported = !requested.iter().any(|name| name == file.name());

        for message in &file.message_type {
            lower_message(&mut builder, scope, message, true, imported);
        }

        for enum_type in &file.enum_type {
            lower_enum(&mut builder, scope, enum_type);
        }
    }

    builder.build()
}

fn lower_message(
    builder: &mut Builder,
    scope: &str,
    descriptor: &DescriptorProto,
    top_level: bool,
    imported: bool,
) {
    let name = qualify(scope, descriptor.name());

    let mut message = if top_level {
        Message::new(&name)
    } else {
        Message::nested(&name)
    };

    if imported {
        message = message.imported();
    }

    for field in &descriptor.field {
        message = message.field(lower_field(field));
    }

    builder.message(message);

    for nested in &descriptor.nested_type {
        lower_message(builder, &name, nested, false, imported);
    }

    for enum_type in &descriptor.enum_type {
        lower_enum(builder, &name, enum_type);
    }
}

fn lower_enum(builder: &mut Builder, scope: &str, descriptor: &EnumDescriptorProto) {
    let mut enum_type = Enum::new(qualify(scope, descriptor.name()));

    for value in &descriptor.value {
        enum_type = enum_type.value(value.name());
    }

    builder.enumeration(enum_type);
}

fn lower_field(descriptor: &FieldDescriptorProto) -> Field {
    // Resolved type names are absolute, e.g. `.shop.Order.Item`
    let type_name = descriptor.type_name().trim_start_matches('.');

    let ty = match descriptor.r#type() {
        Type::Message | Type::Group => FieldTy::Message(type_name.to_string()),
        Type::Enum => FieldTy::Enum(type_name.to_string()),
        scalar => FieldTy::Primitive(primitive_tag(scalar).to_string()),
    };

    let field = Field::new(descriptor.name(), ty);

    if descriptor.label() == Label::Repeated {
        field.repeated()
    } else {
        field
    }
}

fn primitive_tag(ty: Type) -> &'static str {
    match ty {
        Type::Double => "double",
        Type::Float => "float",
        Type::Int64 => "int64",
        Type::Uint64 => "uint64",
        Type::Int32 => "int32",
        Type::Fixed64 => "fixed64",
        Type::Fixed32 => "fixed32",
        Type::Bool => "bool",
        Type::String => "string",
        Type::Bytes => "bytes",
        Type::Uint32 => "uint32",
        Type::Sfixed32 => "sfixed32",
        Type::Sfixed64 => "sfixed64",
        Type::Sint32 => "sint32",
        Type::Sint64 => "sint64",
        Type::Group => "group",
        Type::Message => "message",
        Type::Enum => "enum",
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
