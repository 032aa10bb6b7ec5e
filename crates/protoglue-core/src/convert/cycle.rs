use crate::schema::proto::{Message, TypeGraph};
use crate::{Error, Result};

use std::collections::HashSet;

/// Fails with a circular reference error if `origin` is reachable from
/// `current` through message-typed fields.
///
/// Direct fields of a message are checked against `origin` before any nested
/// message is entered, so the error always names `origin`, never the message
/// holding the back-edge. Pass the same message as `current` and `origin` to
/// check a type for self-containment.
///
/// A cycle that does not pass through `origin` (`A → B → B` when checking
/// `A`) is not reported here. Each nested message is walked once per call, and
/// such a cycle is reported when the inner message is itself checked.
pub fn detect_cycle(graph: &TypeGraph, current: &Message, origin: &Message) -> Result<()> {
    let mut visited = HashSet::new();
    walk(graph, current, origin, &mut visited)
}

fn walk<'a>(
    graph: &'a TypeGraph,
    current: &'a Message,
    origin: &Message,
    visited: &mut HashSet<&'a str>,
) -> Result<()> {
    let references = move || current.fields.iter().filter_map(|field| field.ty.as_message());

    if references().any(|name| name == origin.name) {
        return Err(Error::circular_reference(&origin.name));
    }

    for name in references() {
        if visited.insert(name) {
            walk(graph, graph.expect_message(name), origin, visited)?;
        }
    }

    Ok(())
}
