mod error;
pub use error::Error;

pub mod convert;
pub use convert::{Converter, TypeMapping};

pub mod schema;
pub use schema::{Column, TypeGraph};

/// A Result type alias that uses protoglue's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
