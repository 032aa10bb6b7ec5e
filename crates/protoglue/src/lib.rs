//! Converts protobuf message schemas into table-catalog column schemas.
//!
//! ```no_run
//! use protoglue::{Options, Scalar, TypeMapping};
//!
//! let options = Options::new()
//!     .message("shop.Order")
//!     .mapping(TypeMapping::new().with("int32", Scalar::BigInt));
//!
//! let columns = protoglue::generate("protos/shop.proto", &options)?;
//! println!("{}", protoglue::json::to_string_pretty(&columns)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod generate;
pub use generate::{convert_graph, generate, generate_schema, Options};

pub mod json;

mod loader;
pub use loader::{Loader, ProtoLoader};

pub use protoglue_core::{
    convert::{self, Converter, TypeMapping},
    schema::{
        self,
        catalog::{Column, Scalar, Type},
        TypeGraph,
    },
    Error, Result,
};
