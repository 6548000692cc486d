//! Integration tests for derived column synthesis.
//!
//! Covers the two naming templates over the reference rows, dispatch
//! priority, row alignment (property-based), and using a synthesized column
//! alongside vertex construction on the same table.

use std::collections::BTreeSet;

use proptest::prelude::*;

use modelgraph_columns::{
    append_synthesized_column, create_column_values, ColumnPattern, SynthesisError,
};
use modelgraph_core::{build_vertices, AttributeMap, EdgeTable, EdgeTableSchema, ModelGraph};

const COMPOSITE: &str = "A_\"composite owner\"_component";
const QUALIFIER: &str = "composite owner";

#[test]
fn reference_rows_for_each_template() {
    let data = ["Car", "Wheel", "Engine"];
    let aux = ["chassis", "hub", "drive output"];

    let cases: [(&str, [&str; 3]); 2] = [
        (
            COMPOSITE,
            ["A_car_chassis", "A_wheel_hub", "A_engine_drive output"],
        ),
        (
            QUALIFIER,
            [
                "car qua chassis context",
                "wheel qua hub context",
                "engine qua drive output context",
            ],
        ),
    ];

    for (col_name, expected) in cases {
        let values = create_column_values(col_name, &data, &aux).unwrap();
        assert_eq!(values, expected, "column {col_name}");
    }
}

#[test]
fn composite_rule_takes_priority() {
    assert!(COMPOSITE.contains(QUALIFIER));
    assert!(matches!(
        ColumnPattern::parse(COMPOSITE),
        Some(ColumnPattern::CompositeIdentifier { .. })
    ));
}

#[test]
fn error_messages_are_descriptive() {
    let err = create_column_values("Position", &["Car"], &["chassis"]).unwrap_err();
    assert_eq!(err.to_string(), "unrecognized column pattern: 'Position'");

    let err = create_column_values(QUALIFIER, &["Car", "Wheel"], &["chassis"]).unwrap_err();
    assert!(matches!(
        err,
        SynthesisError::InputLengthMismatch {
            data_len: 2,
            aux_len: 1
        }
    ));
}

#[test]
fn derived_columns_sit_beside_edge_columns() {
    let mut table = EdgeTable::from_columns([
        ("Component", vec!["Car", "engine"]),
        ("Position", vec!["engine", "Car"]),
        ("edge type", vec!["owner", "type"]),
    ])
    .unwrap();

    append_synthesized_column(&mut table, COMPOSITE, "Component", "Position").unwrap();
    append_synthesized_column(&mut table, QUALIFIER, "Component", "Position").unwrap();

    assert_eq!(table.column(COMPOSITE).unwrap(), ["A_car_engine", "A_engine_Car"]);
    assert_eq!(
        table.column(QUALIFIER).unwrap(),
        ["car qua engine context", "engine qua Car context"]
    );

    // Context nodes named by a derived column take that column as their type.
    let mut graph = ModelGraph::from_table(&table, &EdgeTableSchema::default()).unwrap();
    graph.add_edge("car qua engine context", "Car", AttributeMap::new());
    graph.add_edge("A_car_engine", "car qua engine context", AttributeMap::new());
    let vertices = build_vertices(&table, &graph).unwrap();
    assert_eq!(vertices.len(), 4);

    let types_of = |name: &str| {
        vertices
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.node_types().clone())
            .unwrap()
    };
    assert_eq!(types_of("car qua engine context"), BTreeSet::from([QUALIFIER.to_string()]));
    assert_eq!(types_of("A_car_engine"), BTreeSet::from([COMPOSITE.to_string()]));
    assert_eq!(
        types_of("Car"),
        BTreeSet::from(["Component".to_string(), "Position".to_string()])
    );
}

#[test]
fn appending_twice_is_rejected() {
    let mut table = EdgeTable::from_columns([
        ("Component", vec!["Car"]),
        ("Position", vec!["engine"]),
    ])
    .unwrap();
    append_synthesized_column(&mut table, QUALIFIER, "Component", "Position").unwrap();
    let err =
        append_synthesized_column(&mut table, QUALIFIER, "Component", "Position").unwrap_err();
    assert!(matches!(err, SynthesisError::Table(_)));
}

proptest! {
    #[test]
    fn output_aligns_with_input_rows(
        rows in prop::collection::vec(("[A-Za-z]{1,8}", "[a-z ]{1,12}"), 0..16)
    ) {
        let data: Vec<String> = rows.iter().map(|(d, _)| d.clone()).collect();
        let aux: Vec<String> = rows.iter().map(|(_, a)| a.clone()).collect();

        let values = create_column_values(QUALIFIER, &data, &aux).unwrap();
        prop_assert_eq!(values.len(), rows.len());
        for (value, (part, owner)) in values.iter().zip(&rows) {
            prop_assert_eq!(
                value,
                &format!("{} qua {} context", part.to_lowercase(), owner)
            );
        }

        let ids = create_column_values(COMPOSITE, &data, &aux).unwrap();
        for (id, (part, owner)) in ids.iter().zip(&rows) {
            prop_assert!(id.starts_with("A_"));
            prop_assert!(id.ends_with(owner.as_str()));
            let part_lower = part.to_lowercase();
            prop_assert_eq!(&id[2..2 + part.len()], part_lower.as_str());
        }
    }
}
