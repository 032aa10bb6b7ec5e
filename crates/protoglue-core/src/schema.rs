//! The two schema models the converter bridges.
//!
//! [`proto`] is the resolved interface-definition type graph handed over by a
//! loader. [`catalog`] is the table-catalog column schema produced from it.

pub mod catalog;
pub use catalog::Column;

pub mod proto;
pub use proto::TypeGraph;
