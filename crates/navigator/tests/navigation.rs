//! Integration tests: parse-and-navigate pipelines over a deposit batch
//! document, end to end through conversion.

use pretty_assertions::assert_eq;
use sextant_navigator::{Document, NavigateOutcome, Outcome};

const SAMPLE: &str = concat!(
    r#"<doi_batch version="4.3.0">"#,
    "<head>",
    "<doi_batch_id>test.x.20240101</doi_batch_id>",
    "<timestamp>200504260247</timestamp>",
    "<depositor>",
    "<name>Crossref</name>",
    "<email_address>pfeeney@crossref.org</email_address>",
    "</depositor>",
    "<registrant>Society of Metadata Idealists</registrant>",
    "</head>",
    "<body>",
    r#"<journal index="1"><title>Metadata Quarterly</title></journal>"#,
    r#"<journal index="2"><title>Identifier Review</title></journal>"#,
    "</body>",
    "</doi_batch>",
);

#[test]
fn parse_chains_into_element_value() {
    let email = Document::parse(SAMPLE)
        .as_ref()
        .element_value::<String>(&["doi_batch", "head", "depositor", "email_address"]);

    assert_eq!(email, Outcome::success("pfeeney@crossref.org".to_string()));
}

#[test]
fn missing_leaf_names_the_segment() {
    let phone = Document::parse(SAMPLE)
        .as_ref()
        .element_value::<String>(&["doi_batch", "head", "depositor", "phone"]);

    assert_eq!(
        phone.into_error().unwrap().message(),
        "Element with name 'phone' not found."
    );
}

#[test]
fn missing_intermediate_segment_stops_the_walk() {
    let outcome = Document::parse(SAMPLE)
        .as_ref()
        .element_value::<String>(&["doi_batch", "trailer", "depositor", "email_address"]);

    // The first missing name is reported, not anything deeper.
    assert_eq!(
        outcome.into_error().unwrap().message(),
        "Element with name 'trailer' not found."
    );
}

#[test]
fn typed_leaf_extraction() {
    let document = Document::parse(SAMPLE).unwrap();

    assert_eq!(
        document.element_value::<i64>(&["doi_batch", "head", "timestamp"]),
        Outcome::success(200_504_260_247)
    );
    assert_eq!(
        document.attribute_value::<String>(&["doi_batch", "version"]),
        Outcome::success("4.3.0".to_string())
    );
}

#[test]
fn attribute_conversion_failures_propagate() {
    let document = Document::parse(SAMPLE).unwrap();

    let outcome = document.attribute_value::<i32>(&["doi_batch", "version"]);
    assert_eq!(
        outcome.into_error().unwrap().message(),
        "Error converting '4.3.0' to i32."
    );
}

#[test]
fn elements_at_returns_all_matches_in_order() {
    let document = Document::parse(SAMPLE).unwrap();

    let journals = document
        .elements_at(&["doi_batch", "body", "journal"])
        .unwrap();
    assert_eq!(journals.len(), 2);

    let indexes: Vec<&str> = journals
        .iter()
        .filter_map(|journal| journal.attribute("index"))
        .collect();
    assert_eq!(indexes, ["1", "2"]);
}

#[test]
fn elements_at_zero_matches_fails() {
    let document = Document::parse(SAMPLE).unwrap();

    let outcome = document.elements_at(&["doi_batch", "body", "book"]);
    assert_eq!(
        outcome.into_error().unwrap().message(),
        "Elements with name 'book' not found."
    );
}

#[test]
fn malformed_document_flows_through_navigation() {
    let outcome = Document::parse("<doi_batch><head></doi_batch>")
        .as_ref()
        .element_value::<String>(&["doi_batch", "head", "depositor"]);

    let error = outcome.into_error().unwrap();
    assert!(error.message().starts_with("Malformed document:"));
}

#[test]
fn namespace_stripping_restores_plain_navigation() {
    let namespaced = concat!(
        r#"<c:doi_batch xmlns:c="http://www.crossref.org/schema/4.3.0">"#,
        "<c:head><c:registrant>Idealists</c:registrant></c:head>",
        "</c:doi_batch>",
    );

    let document = Document::parse(namespaced).unwrap();

    // Qualified names defeat a plain-name walk.
    assert!(document.element_at(&["doi_batch", "head"]).is_failure());

    let stripped = document.strip_namespaces();
    assert_eq!(
        stripped.element_value::<String>(&["doi_batch", "head", "registrant"]),
        Outcome::success("Idealists".to_string())
    );

    // Stripping again changes nothing.
    assert_eq!(stripped.strip_namespaces(), stripped);
}
