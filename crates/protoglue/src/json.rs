//! Plain `(name, type)` projection of a column schema.
//!
//! Struct and array columns are flattened to their canonical type string, so
//! the output can be pasted into a table definition as-is:
//!
//! ```json
//! [
//!   { "name": "hobbies", "type": "array<string>" },
//!   { "name": "address", "type": "struct<street:string,city:string>" }
//! ]
//! ```

use crate::Column;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonColumn {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

impl From<&Column> for JsonColumn {
    fn from(column: &Column) -> Self {
        JsonColumn {
            name: column.name.clone(),
            ty: column.ty.to_string(),
        }
    }
}

pub fn project(columns: &[Column]) -> Vec<JsonColumn> {
    columns.iter().map(JsonColumn::from).collect()
}

pub fn to_string(columns: &[Column]) -> serde_json::Result<String> {
    serde_json::to_string(&project(columns))
}

pub fn to_string_pretty(columns: &[Column]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&project(columns))
}
