use std::error::Error;

use serde_json::json;
use test_case::test_case;

use crate::prelude::*;
use crate::term::ns::{rdf, xsd};

type TestResult = Result<(), Box<dyn Error>>;

const SH: &str = "http://www.w3.org/ns/shacl#";

/// A small SHACL shapes graph, as a validator would read it.
fn shapes() -> Result<Dataset, TermError> {
    let mut d = Dataset::new();
    d.factory_mut().context_mut().insert("sh", SH)?;
    d.factory_mut().context_mut().insert("ex", "http://example.org/")?;
    let f = d.factory().clone();
    let a = f.named_node(rdf::type_)?;
    let shape = f.named_node("ex:PersonShape")?;
    let property = f.blank_node(Some("prop"))?;
    let values = [f.blank_node(Some("v0"))?, f.blank_node(Some("v1"))?];
    let triples = [
        (shape.clone(), a, f.named_node("sh:NodeShape")?),
        (shape.clone(), f.named_node("sh:targetClass")?, f.named_node("ex:Person")?),
        (shape, f.named_node("sh:property")?, property.clone()),
        (property.clone(), f.named_node("sh:path")?, f.named_node("ex:status")?),
        (property.clone(), f.named_node("sh:minCount")?, f.literal("1", None, Some("xsd:integer"))?),
        (property, f.named_node("sh:in")?, values[0].clone()),
        (values[0].clone(), f.named_node(rdf::first)?, f.literal("active", None, None)?),
        (values[0].clone(), f.named_node(rdf::rest)?, values[1].clone()),
        (values[1].clone(), f.named_node(rdf::first)?, f.literal("retired", None, None)?),
        (values[1].clone(), f.named_node(rdf::rest)?, f.named_node(rdf::nil)?),
    ];
    for (s, p, o) in triples {
        d.add(f.triple(s, p, o)?);
    }
    Ok(d)
}

#[test]
fn shapes_graph() -> TestResult {
    crate::test_setup();
    let d = shapes()?;
    let graph = generate_graph(&d, &GraphOptions::default())?;
    assert_eq!(graph.keys().collect::<Vec<_>>(), vec!["ex:PersonShape"]);
    let node_shapes = graph.all_by_type(&["sh:NodeShape"]);
    assert_eq!(node_shapes.len(), 1);
    assert_eq!(
        graph.to_json(),
        json!({"ex:PersonShape": {
            "@id": "ex:PersonShape",
            "@type": {"@id": "sh:NodeShape"},
            "sh:targetClass": {"@id": "ex:Person"},
            "sh:property": {
                "@id": "_:prop",
                "sh:path": {"@id": "ex:status"},
                "sh:minCount": {"@value": "1", "@type": {"@id": xsd::integer}},
                "sh:in": {"@list": ["active", "retired"]},
            },
        }})
    );
    Ok(())
}

#[test_case(r#"{"types": false}"#, "ex:PersonShape", "sh:NodeShape"; "compact identifiers")]
#[test_case(
    r#"{"types": false, "prefixes": false}"#,
    "http://example.org/PersonShape",
    "http://www.w3.org/ns/shacl#NodeShape";
    "full IRIs"
)]
fn options_from_json(options: &str, key: &str, node_shape: &str) -> TestResult {
    crate::test_setup();
    let d = shapes()?;
    let graph = generate_graph(&d, &GraphOptions::from_json(options)?)?;
    assert_eq!(graph.keys().collect::<Vec<_>>(), vec![key]);
    assert_eq!(graph.to_json()[key]["@type"], json!(node_shape));
    assert_eq!(graph.all_by_type(&[node_shape]).len(), 1);
    Ok(())
}

#[test]
fn shapes_and_data_are_separable() -> TestResult {
    crate::test_setup();
    let shapes = shapes()?;
    let mut both = shapes.clone();
    let f = both.factory().clone();
    let alice = f.named_node("ex:alice")?;
    let data = [
        f.triple(alice.clone(), f.named_node(rdf::type_)?, f.named_node("ex:Person")?)?,
        f.triple(alice, f.named_node("ex:status")?, f.literal("active", None, None)?)?,
    ];
    assert_eq!(both.add_all(data.clone()), 2);

    let only_data = both.difference(&shapes);
    assert_eq!(only_data.len(), 2);
    assert!(data.iter().all(|q| only_data.has(q)));
    assert!(both.intersection(&shapes).equals(&shapes));
    assert!(only_data.union(&shapes).equals(&both));

    let graph = generate_graph(&only_data, &GraphOptions::default())?;
    assert_eq!(graph.keys().collect::<Vec<_>>(), vec!["ex:alice"]);
    assert_eq!(graph.all_by_any_type(&["ex:Person", "sh:NodeShape"]).len(), 1);
    Ok(())
}

#[test]
fn targets_of_shapes() -> TestResult {
    crate::test_setup();
    let d = shapes()?;
    let f = d.factory();
    let target_class = f.named_node("sh:targetClass")?;
    let targets: Vec<Term> = d
        .quads_matching(None, Some(&target_class), None, None)
        .map(|q| q.o().clone())
        .collect();
    assert_eq!(targets, vec![f.named_node("ex:Person")?]);
    Ok(())
}
