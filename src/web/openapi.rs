//! OpenAPI 3.1 description of the item routes, plus a Swagger UI page.
//!
//! The document is assembled from a static operation table so the routes in
//! [`build_router`](super::build_router) and their description stay side by side.

use axum::{Json, response::Html};
use serde_json::{Map as JsonMap, Value as JsonValue, json};

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

const API_TITLE: &str = "Item CRUD API";
const ITEM_SCHEMA_REF: &str = "#/components/schemas/Item";

/// Metadata for one documented route.
#[derive(Debug, Clone, Copy)]
pub struct ItemOperation {
    pub method: &'static str,
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub takes_id: bool,
    pub takes_item_body: bool,
    pub success_status: u16,
    pub success_body: SuccessBody,
    pub error_statuses: &'static [u16],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessBody {
    None,
    Item,
    ItemList,
}

pub const ITEM_OPERATIONS: &[ItemOperation] = &[
    ItemOperation {
        method: "get",
        path: "/api/items",
        operation_id: "GetAllItems",
        summary: "Get all items",
        description: "Retrieves a list of all items in the repository",
        takes_id: false,
        takes_item_body: false,
        success_status: 200,
        success_body: SuccessBody::ItemList,
        error_statuses: &[],
    },
    ItemOperation {
        method: "get",
        path: "/api/items/{id}",
        operation_id: "GetItemById",
        summary: "Get item by ID",
        description: "Retrieves a specific item by its unique identifier",
        takes_id: true,
        takes_item_body: false,
        success_status: 200,
        success_body: SuccessBody::Item,
        error_statuses: &[404],
    },
    ItemOperation {
        method: "post",
        path: "/api/items",
        operation_id: "CreateItem",
        summary: "Create a new item",
        description: "Creates a new item and adds it to the repository",
        takes_id: false,
        takes_item_body: true,
        success_status: 201,
        success_body: SuccessBody::Item,
        error_statuses: &[],
    },
    ItemOperation {
        method: "put",
        path: "/api/items/{id}",
        operation_id: "UpdateItem",
        summary: "Update an existing item",
        description: "Updates an existing item with new values",
        takes_id: true,
        takes_item_body: true,
        success_status: 204,
        success_body: SuccessBody::None,
        error_statuses: &[400, 404],
    },
    ItemOperation {
        method: "delete",
        path: "/api/items/{id}",
        operation_id: "DeleteItem",
        summary: "Delete an item",
        description: "Deletes an item from the repository by its ID",
        takes_id: true,
        takes_item_body: false,
        success_status: 204,
        success_body: SuccessBody::None,
        error_statuses: &[404],
    },
];

fn item_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer", "format": "int64"},
            "name": {"type": "string"},
            "description": {"type": "string"},
            "isComplete": {"type": "boolean"}
        }
    })
}

fn status_description(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Response",
    }
}

fn success_response(operation: &ItemOperation) -> JsonValue {
    let schema = match operation.success_body {
        SuccessBody::None => {
            return json!({"description": status_description(operation.success_status)});
        }
        SuccessBody::Item => json!({"$ref": ITEM_SCHEMA_REF}),
        SuccessBody::ItemList => json!({"type": "array", "items": {"$ref": ITEM_SCHEMA_REF}}),
    };

    let mut response = json!({
        "description": status_description(operation.success_status),
        "content": {
            "application/json": {"schema": schema}
        }
    });
    if operation.success_status == 201
        && let JsonValue::Object(fields) = &mut response
    {
        fields.insert(
            "headers".to_string(),
            json!({
                "Location": {
                    "description": "Path of the created item",
                    "schema": {"type": "string"}
                }
            }),
        );
    }
    response
}

fn operation_object(operation: &ItemOperation) -> JsonValue {
    let mut op_obj = JsonMap::<String, JsonValue>::new();
    op_obj.insert("operationId".to_string(), json!(operation.operation_id));
    op_obj.insert("summary".to_string(), json!(operation.summary));
    op_obj.insert("description".to_string(), json!(operation.description));
    op_obj.insert("tags".to_string(), json!(["Items"]));

    if operation.takes_id {
        op_obj.insert(
            "parameters".to_string(),
            json!([{
                "name": "id",
                "in": "path",
                "required": true,
                "schema": {"type": "integer", "format": "int64"}
            }]),
        );
    }

    if operation.takes_item_body {
        op_obj.insert(
            "requestBody".to_string(),
            json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": {"$ref": ITEM_SCHEMA_REF}
                    }
                }
            }),
        );
    }

    let mut responses = JsonMap::<String, JsonValue>::new();
    responses.insert(
        operation.success_status.to_string(),
        success_response(operation),
    );
    for status in operation.error_statuses {
        responses.insert(
            status.to_string(),
            json!({"description": status_description(*status)}),
        );
    }
    op_obj.insert("responses".to_string(), JsonValue::Object(responses));

    JsonValue::Object(op_obj)
}

/// Builds the OpenAPI 3.1 document for [`ITEM_OPERATIONS`].
pub fn build_openapi_document() -> JsonValue {
    let mut paths = JsonMap::<String, JsonValue>::new();

    for operation in ITEM_OPERATIONS {
        let path_item = paths
            .entry(operation.path.to_string())
            .or_insert_with(|| JsonValue::Object(JsonMap::new()));
        if let JsonValue::Object(path_methods) = path_item {
            path_methods.insert(operation.method.to_string(), operation_object(operation));
        }
    }

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": API_TITLE,
            "version": "v1"
        },
        "paths": JsonValue::Object(paths),
        "components": {
            "schemas": {
                "Item": item_schema()
            }
        }
    })
}

pub async fn openapi_document() -> Json<JsonValue> {
    Json(build_openapi_document())
}

pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{API_TITLE} v1</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
    </script>
</body>
</html>
"##
    ))
}
