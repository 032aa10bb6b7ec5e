use protoglue_core::convert::detect_cycle;
use protoglue_core::schema::proto::{Field, Message};
use protoglue_core::{Converter, TypeGraph};

fn assert_circular(graph: &TypeGraph, name: &str, expected: &str) {
    let mut converter = Converter::new(graph);
    let err = converter.convert_message_by_name(name).unwrap_err();

    assert!(err.is_circular_reference(), "{err}");
    assert_eq!(err.circular_reference_type(), Some(expected));
    assert!(!converter.is_cached(name));
}

#[test]
fn self_reference() {
    let graph = TypeGraph::new([Message::new("A").field(Field::message("self", "A"))], [])
        .unwrap();

    assert_circular(&graph, "A", "A");
}

#[test]
fn repeated_self_reference() {
    let graph = TypeGraph::new(
        [Message::new("Tree")
            .field(Field::primitive("value", "int32"))
            .field(Field::message("children", "Tree").repeated())],
        [],
    )
    .unwrap();

    assert_circular(&graph, "Tree", "Tree");
}

#[test]
fn two_hop_cycle_names_origin() {
    let graph = TypeGraph::new(
        [
            Message::new("A").field(Field::message("b", "B")),
            Message::new("B").field(Field::message("a", "A")),
        ],
        [],
    )
    .unwrap();

    assert_circular(&graph, "A", "A");
    assert_circular(&graph, "B", "B");
}

#[test]
fn three_hop_cycle_names_origin() {
    let graph = TypeGraph::new(
        [
            Message::new("A")
                .field(Field::primitive("id", "string"))
                .field(Field::message("b", "B")),
            Message::new("B").field(Field::message("c", "C")),
            Message::new("C").field(Field::message("a", "A")),
        ],
        [],
    )
    .unwrap();

    assert_circular(&graph, "A", "A");
}

#[test]
fn inner_cycle_reported_for_inner_type() {
    // A does not take part in the cycle, B does
    let graph = TypeGraph::new(
        [
            Message::new("A").field(Field::message("b", "B")),
            Message::new("B").field(Field::message("next", "B")),
        ],
        [],
    )
    .unwrap();

    assert_circular(&graph, "A", "B");
}

#[test]
fn acyclic_diamond_passes() {
    let graph = TypeGraph::new(
        [
            Message::new("Top")
                .field(Field::message("left", "Left"))
                .field(Field::message("right", "Right")),
            Message::new("Left").field(Field::message("leaf", "Leaf")),
            Message::new("Right").field(Field::message("leaf", "Leaf")),
            Message::new("Leaf").field(Field::primitive("v", "bool")),
        ],
        [],
    )
    .unwrap();

    let top = graph.expect_message("Top");
    assert!(detect_cycle(&graph, top, top).is_ok());
    assert_eq!(
        Converter::new(&graph)
            .convert_message(top)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn detect_cycle_from_nested_current() {
    let graph = TypeGraph::new(
        [
            Message::new("A").field(Field::message("b", "B")),
            Message::new("B").field(Field::message("a", "A")),
        ],
        [],
    )
    .unwrap();
    let a = graph.expect_message("A");
    let b = graph.expect_message("B");

    let err = detect_cycle(&graph, b, a).unwrap_err();
    assert_eq!(err.circular_reference_type(), Some("A"));
}

#[test]
fn cached_type_is_not_rechecked() {
    let graph = TypeGraph::new(
        [
            Message::new("Ok").field(Field::message("leaf", "Leaf")),
            Message::new("Leaf").field(Field::primitive("v", "string")),
            Message::new("Loop").field(Field::message("again", "Loop")),
        ],
        [],
    )
    .unwrap();
    let mut converter = Converter::new(&graph);

    converter.convert_message_by_name("Ok").unwrap();
    let err = converter.convert_message_by_name("Loop").unwrap_err();
    assert!(err.is_circular_reference());

    // a failed conversion leaves earlier results intact
    assert!(converter.is_cached("Ok"));
    assert!(converter.convert_message_by_name("Leaf").is_ok());
    assert_eq!(converter.traversals(), 2);
}
