use pretty_assertions::assert_eq;
use swagger2http_core::{convert, convert_yaml, parse_document, GeneratedFile, OutputMode};

const USERS_V3: &str = include_str!("fixtures/users_v3.yaml");
const PETSTORE_V2: &str = include_str!("fixtures/petstore_v2.yaml");

fn file<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("missing output file {name}"))
        .content
}

#[test]
fn test_openapi3_combined_output() {
    let files = convert_yaml(USERS_V3, OutputMode::Combined).unwrap();

    let expected = r#"# Users API - v2.1.0
# Manage users and their posts

# Variables
@baseUrl=https://api.example.com/v2
@token=your_token_here
@api_key=your_api_key_here

###
# List users
# Operation ID: listUsers
GET {{baseUrl}}/users?limit=10
Authorization: Bearer {{token}}

###
# Create user
# Operation ID: createUser
POST {{baseUrl}}/users
Authorization: Bearer {{token}}
Content-Type: application/json

{
  "name": "string",
  "age": 0
}
###
# Get post
GET {{baseUrl}}/users/42/posts/0

"#;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "api.http");
    assert_eq!(files[0].content, expected);
}

#[test]
fn test_openapi3_split_output() {
    let files = convert_yaml(USERS_V3, OutputMode::SplitByTag).unwrap();

    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["users.http", "untagged.http"]);

    let users = file(&files, "users.http");
    assert!(users.starts_with("# Users API - Users\n\n# Variables\n@baseUrl=https://api.example.com/v2\n"));
    assert_eq!(users.matches("###\n").count(), 2);
    assert!(users.contains("GET {{baseUrl}}/users?limit=10\n"));
    assert!(users.contains("POST {{baseUrl}}/users\n"));

    let untagged = file(&files, "untagged.http");
    assert!(untagged.starts_with("# Users API - Untagged\n\n"));
    assert_eq!(untagged.matches("###\n").count(), 1);
    assert!(untagged.ends_with("###\n# Get post\nGET {{baseUrl}}/users/42/posts/0\n\n"));
}

#[test]
fn test_swagger2_combined_output() {
    let files = convert_yaml(PETSTORE_V2, OutputMode::Combined).unwrap();

    let expected = r#"# Petstore - v1.0

# Variables
@baseUrl=http://petstore.swagger.io/v2
@token=your_token_here
@api_key=your_api_key_here

###
# Add a new pet to the store
# Operation ID: addPet
POST {{baseUrl}}/pet
Authorization: Bearer {{access_token}}
Content-Type: application/json

###
# Finds Pets by status
# Operation ID: findPetsByStatus
GET {{baseUrl}}/pet/findByStatus?status=available
api_key: {{api_key}}

###
# Operation ID: placeOrder
PUT {{baseUrl}}/store/order
X-Trace: 0
Content-Type: application/x-www-form-urlencoded

{
  "quantity": 0,
  "shipDate": "2024-01-01T00:00:00Z",
  "complete": true
}
"#;

    assert_eq!(files[0].content, expected);
}

#[test]
fn test_swagger2_split_file_names() {
    let files = convert_yaml(PETSTORE_V2, OutputMode::SplitByTag).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["pet.http", "store_order.http"]);
    assert!(file(&files, "store_order.http").starts_with("# Petstore - store order\n"));
}

#[test]
fn test_conversion_is_deterministic() {
    let doc = parse_document(USERS_V3).unwrap();
    for mode in [OutputMode::Combined, OutputMode::SplitByTag] {
        assert_eq!(convert(&doc, mode), convert(&doc, mode));
    }
    let reparsed = parse_document(USERS_V3).unwrap();
    assert_eq!(
        convert(&doc, OutputMode::Combined),
        convert(&reparsed, OutputMode::Combined)
    );
}

#[test]
fn test_split_and_combined_cover_same_requests() {
    let yaml = r#"
openapi: 3.0.0
info: {title: T, version: "1"}
paths:
  /users:
    get: {tags: [Users]}
    post: {tags: [Users]}
  /ping:
    get: {}
"#;
    let split = convert_yaml(yaml, OutputMode::SplitByTag).unwrap();
    assert_eq!(split.len(), 2);
    assert_eq!(file(&split, "users.http").matches("###\n").count(), 2);
    assert_eq!(file(&split, "untagged.http").matches("###\n").count(), 1);

    let combined = convert_yaml(yaml, OutputMode::Combined).unwrap();
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].content.matches("###\n").count(), 3);
}

#[test]
fn test_body_defaults_to_json_content_type() {
    let yaml = r#"
openapi: 3.0.0
paths:
  /people:
    post:
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: {type: string}
                age: {type: integer}
  /bare:
    post: {}
"#;
    let content = convert_yaml(yaml, OutputMode::Combined).unwrap().remove(0).content;
    assert!(content.contains(
        "POST {{baseUrl}}/people\nContent-Type: application/json\n\n{\n  \"name\": \"string\",\n  \"age\": 0\n}\n"
    ));
    assert!(content.contains("POST {{baseUrl}}/bare\nContent-Type: application/json\n\n"));
}

#[test]
fn test_unresolvable_reference_gives_empty_body() {
    let yaml = r#"
openapi: 3.0.0
paths:
  /things:
    post:
      requestBody:
        content:
          application/json:
            schema: {$ref: 'https://example.com/schemas.yaml#/Thing'}
"#;
    let content = convert_yaml(yaml, OutputMode::Combined).unwrap().remove(0).content;
    assert!(content.ends_with("POST {{baseUrl}}/things\nContent-Type: application/json\n\n"));
}

#[test]
fn test_unquoted_version_is_rendered_verbatim() {
    let files = convert_yaml("openapi: 3.0.0\ninfo: {title: T, version: 1.10}", OutputMode::Combined).unwrap();
    assert!(files[0].content.starts_with("# T - v1.10\n"));
}
