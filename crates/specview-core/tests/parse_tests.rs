use specview_core::error::ParseError;
use specview_core::parse;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn parse_petstore_yaml() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(doc.spec.openapi, "3.0.3");
    assert_eq!(doc.spec.info.title, "Petstore");
    assert_eq!(doc.spec.paths.len(), 3);
    assert_eq!(doc.spec.tags.len(), 2);
    assert_eq!(doc.spec.servers[0].url, "https://api.example.com");

    let components = doc.spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 2);
    assert_eq!(components.parameters.len(), 1);
}

#[test]
fn parse_vendor_extensions() {
    let doc = parse::from_yaml(PETSTORE).unwrap();

    let logo = doc.spec.info.logo.as_ref().expect("should have x-logo");
    assert_eq!(logo.url, "https://example.com/logo.png");
    assert_eq!(logo.alt_text.as_deref(), Some("Petstore"));
    assert_eq!(doc.spec.info.keywords, vec!["pets", "demo"]);

    let create = doc.spec.paths["/pets"].post.as_ref().unwrap();
    assert_eq!(create.code_samples.len(), 1);
    assert_eq!(create.code_samples[0].lang, "python");
}

#[test]
fn parse_responses_include_default_key() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let create = doc.spec.paths["/pets"].post.as_ref().unwrap();
    assert!(create.responses.contains_key("201"));
    assert!(create.responses.contains_key("default"));
}

#[test]
fn reject_missing_paths() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Test
  version: "1.0"
"#;
    match parse::from_yaml(yaml) {
        Err(ParseError::MissingField(field)) => assert_eq!(field, "paths"),
        other => panic!("expected missing-field error, got {other:?}"),
    }
}

#[test]
fn reject_missing_info() {
    let yaml = r#"
openapi: "3.0.0"
paths: {}
"#;
    match parse::from_yaml(yaml) {
        Err(ParseError::MissingField(field)) => assert_eq!(field, "info"),
        other => panic!("expected missing-field error, got {other:?}"),
    }
}

#[test]
fn reject_empty_openapi_version() {
    let yaml = r#"
openapi: ""
info:
  title: Test
  version: "1.0"
paths: {}
"#;
    match parse::from_yaml(yaml) {
        Err(ParseError::MissingField(field)) => assert_eq!(field, "openapi"),
        other => panic!("expected missing-field error, got {other:?}"),
    }
}

#[test]
fn reject_non_mapping_root() {
    assert!(matches!(
        parse::from_yaml("- a\n- b\n"),
        Err(ParseError::Invalid(_))
    ));
}

#[test]
fn from_json_is_strict() {
    // Valid YAML, not valid JSON — must fail through the JSON path.
    assert!(parse::from_json("openapi: '3.0.0'\n").is_err());

    let json = r#"{
      "openapi": "3.0.0",
      "info": { "title": "J", "version": "1.0" },
      "paths": {}
    }"#;
    let doc = parse::from_json(json).expect("should parse JSON document");
    assert_eq!(doc.spec.info.title, "J");
    assert!(doc.spec.paths.is_empty());
}

#[test]
fn unquoted_status_codes_parse_as_strings() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Test
  version: "1.0"
paths:
  /ping:
    get:
      responses:
        200:
          description: OK
"#;
    let doc = parse::from_yaml(yaml).expect("should tolerate numeric status keys");
    let get = doc.spec.paths["/ping"].get.as_ref().unwrap();
    assert!(get.responses.contains_key("200"));
}
