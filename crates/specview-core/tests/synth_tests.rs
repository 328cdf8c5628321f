use serde_json::json;
use specview_core::index::{self, Endpoint};
use specview_core::parse::{self, Document};
use specview_core::parse::schema::SchemaOrRef;
use specview_core::synth;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const CYCLIC: &str = include_str!("fixtures/cyclic.yaml");

fn endpoint(doc: &Document, operation_id: &str) -> Endpoint {
    index::endpoints(doc)
        .into_iter()
        .find(|ep| ep.operation.operation_id.as_deref() == Some(operation_id))
        .unwrap_or_else(|| panic!("no endpoint with operationId {operation_id}"))
}

fn schema(yaml: &str) -> SchemaOrRef {
    serde_yaml_ng::from_str(yaml).expect("schema fixture should parse")
}

fn empty_doc() -> Document {
    parse::from_yaml(
        r#"
openapi: "3.0.0"
info:
  title: Empty
  version: "1.0"
paths: {}
"#,
    )
    .unwrap()
}

#[test]
fn example_object_with_primitives() {
    let doc = empty_doc();
    let s = schema(
        r#"
type: object
properties:
  id:
    type: integer
  name:
    type: string
"#,
    );
    assert_eq!(
        synth::example_of(&s, &doc),
        json!({"id": 123, "name": "string"})
    );
}

#[test]
fn explicit_example_wins_over_type() {
    let doc = empty_doc();
    let s = schema(
        r#"
type: string
example:
  foo: 1
"#,
    );
    assert_eq!(synth::example_of(&s, &doc), json!({"foo": 1}));
}

#[test]
fn example_array_of_booleans() {
    let doc = empty_doc();
    let s = schema("type: array\nitems:\n  type: boolean\n");
    assert_eq!(synth::example_of(&s, &doc), json!([true]));
}

#[test]
fn example_array_without_items_is_empty() {
    let doc = empty_doc();
    assert_eq!(synth::example_of(&schema("type: array\n"), &doc), json!([]));
}

#[test]
fn example_object_without_properties_is_empty() {
    let doc = empty_doc();
    assert_eq!(synth::example_of(&schema("type: object\n"), &doc), json!({}));
}

#[test]
fn example_primitive_fallbacks() {
    let doc = empty_doc();
    assert_eq!(synth::example_of(&schema("type: number\n"), &doc), json!(123.45));
    assert_eq!(
        synth::example_of(&schema("type: string\nformat: email\n"), &doc),
        json!("user@example.com")
    );
    assert_eq!(synth::example_of(&schema("type: file\n"), &doc), json!("unknown"));
    assert_eq!(synth::example_of(&schema("{}"), &doc), json!("unknown"));
}

#[test]
fn example_date_time_is_rfc3339() {
    let doc = empty_doc();
    let value = synth::example_of(&schema("type: string\nformat: date-time\n"), &doc);
    let text = value.as_str().expect("date-time example should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        "not RFC 3339: {text}"
    );
}

#[test]
fn example_follows_references() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let s = schema("$ref: \"#/components/schemas/NewPet\"\n");
    let value = synth::example_of(&s, &doc);
    assert_eq!(value["name"], json!("string"));
    assert_eq!(value["tag"], json!("string"));
    assert_eq!(value["contact"], json!("user@example.com"));
}

#[test]
fn unresolvable_reference_yields_null() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let s = schema("$ref: \"#/components/schemas/Missing\"\n");
    assert_eq!(synth::example_of(&s, &doc), serde_json::Value::Null);
}

#[test]
fn cyclic_reference_terminates_with_null() {
    let doc = parse::from_yaml(CYCLIC).unwrap();
    let s = schema("$ref: \"#/components/schemas/Node\"\n");
    let value = synth::example_of(&s, &doc);
    assert_eq!(value["value"], json!("string"));
    assert_eq!(value["next"], serde_json::Value::Null);
}

#[test]
fn curl_substitutes_path_parameter_placeholder() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let ep = endpoint(&doc, "getPet");
    let cmd = synth::curl(&ep, &doc);
    assert_eq!(cmd, "curl -X GET \"https://api.example.com/pets/[ID]\"");
}

#[test]
fn curl_appends_query_and_header_parameters() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let ep = endpoint(&doc, "listPets");
    let cmd = synth::curl(&ep, &doc);
    assert!(cmd.starts_with("curl -X GET \"https://api.example.com/pets?limit=[LIMIT]\""));
    assert!(cmd.contains(" \\\n  -H \"X-Request-Id: [X-REQUEST-ID]\""));
}

#[test]
fn curl_includes_json_body_clauses() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let ep = endpoint(&doc, "createPet");
    let cmd = synth::curl(&ep, &doc);
    assert!(cmd.contains("curl -X POST \"https://api.example.com/pets\""));
    assert!(cmd.contains(" \\\n  -H \"Content-Type: application/json\""));
    assert!(cmd.contains("-d '{"));
    assert!(cmd.contains("\"name\": \"string\""));
    // Body comes after the content-type clause.
    assert!(cmd.find("Content-Type").unwrap() < cmd.find("-d '").unwrap());
}

#[test]
fn curl_strips_single_trailing_slash() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Slash
  version: "1.0"
servers:
  - url: https://api.example.com
paths:
  /pets/:
    get:
      operationId: listPets
      responses:
        "200":
          description: OK
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ep = endpoint(&doc, "listPets");
    assert_eq!(
        synth::curl(&ep, &doc),
        "curl -X GET \"https://api.example.com/pets\""
    );
}

#[test]
fn curl_without_servers_uses_bare_path() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: NoServer
  version: "1.0"
paths:
  /ping:
    get:
      operationId: ping
      responses:
        "200":
          description: OK
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ep = endpoint(&doc, "ping");
    assert_eq!(synth::curl(&ep, &doc), "curl -X GET \"/ping\"");
}

#[test]
fn parameter_example_wins_over_placeholder() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: Example
  version: "1.0"
servers:
  - url: https://api.example.com
paths:
  /users/{id}:
    get:
      operationId: getUser
      parameters:
        - name: id
          in: path
          required: true
          example: 42
        - name: verbose
          in: query
          example: "yes"
      responses:
        "200":
          description: OK
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ep = endpoint(&doc, "getUser");
    assert_eq!(
        synth::curl(&ep, &doc),
        "curl -X GET \"https://api.example.com/users/42?verbose=yes\""
    );
}

#[test]
fn unresolvable_parameter_reference_is_dropped() {
    let yaml = r##"
openapi: "3.0.0"
info:
  title: BadRef
  version: "1.0"
servers:
  - url: https://api.example.com
paths:
  /users/{id}:
    get:
      operationId: getUser
      parameters:
        - $ref: "#/components/parameters/Missing"
      responses:
        "200":
          description: OK
"##;
    let doc = parse::from_yaml(yaml).unwrap();
    let ep = endpoint(&doc, "getUser");
    assert!(synth::resolved_parameters(&ep.operation, &doc).is_empty());
    // The template placeholder survives untouched.
    assert_eq!(
        synth::curl(&ep, &doc),
        "curl -X GET \"https://api.example.com/users/{id}\""
    );
}

#[test]
fn fetch_snippet_for_json_post() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let ep = endpoint(&doc, "createPet");
    let snippet = synth::fetch_snippet(&ep, &doc);
    assert!(snippet.starts_with("fetch(\"https://api.example.com/pets\", {"));
    assert!(snippet.contains("method: \"POST\""));
    assert!(snippet.contains("\"Content-Type\": \"application/json\""));
    assert!(snippet.contains("\"Authorization\": \"Bearer YOUR_API_KEY\""));
    assert!(snippet.contains("body: JSON.stringify({\"name\":\"string\""));
    assert!(snippet.ends_with(".then(json => console.log(json))"));
}

#[test]
fn fetch_snippet_for_get_has_no_body() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let ep = endpoint(&doc, "getPet");
    let snippet = synth::fetch_snippet(&ep, &doc);
    assert!(snippet.contains("method: \"GET\""));
    assert!(!snippet.contains("body:"));
}

#[test]
fn request_body_explicit_media_example_wins() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: BodyExample
  version: "1.0"
paths:
  /things:
    post:
      operationId: createThing
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name:
                  type: string
            example:
              name: carried-verbatim
      responses:
        "201":
          description: Created
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let ep = endpoint(&doc, "createThing");
    let body = synth::request_body_example(&ep.operation, &doc).unwrap();
    assert_eq!(body, json!({"name": "carried-verbatim"}));
}
