mod enum_type;
pub use enum_type::Enum;

mod field;
pub use field::{Field, FieldTy};

mod graph;
pub use graph::{Builder, Resolved, TypeGraph};

mod message;
pub use message::Message;
