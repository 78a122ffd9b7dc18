use std::sync::Arc;

use m2a_types::CommandSpec;
use rmcp::model::{Tool, ToolAnnotations};
use serde_json::{Map, Value, json};

/// JSON schema for a command's arguments.
///
/// Each parameter becomes a property carrying its `type`, `description`, and
/// when declared, `enum` and `default`. Required names are listed in order.
pub fn input_schema(command: &CommandSpec) -> Map<String, Value> {
    let mut properties = Map::new();
    for parameter in &command.parameters {
        let mut property = Map::new();
        property.insert("type".into(), json!(parameter.kind.json_type()));
        if !parameter.description.is_empty() {
            property.insert("description".into(), json!(parameter.description));
        }
        if !parameter.allowed_values.is_empty() {
            property.insert("enum".into(), json!(parameter.allowed_values));
        }
        if let Some(default) = parameter.default_value {
            property.insert("default".into(), json!(default));
        }
        properties.insert(parameter.name.to_string(), Value::Object(property));
    }

    let required: Vec<&str> = command.required_parameters().map(|parameter| parameter.name).collect();

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    schema
}

/// The MCP tool advertised for `command`.
///
/// GET tools are hinted read-only and DELETE tools destructive; every tool
/// reaches an external system, so all are open-world.
pub fn tool_for_command(command: &CommandSpec) -> Tool {
    let mut tool = Tool::new(command.name, command.summary, Arc::new(input_schema(command)));

    let mut annotations = ToolAnnotations::with_title(command.summary);
    annotations.read_only_hint = Some(command.method.is_read_only());
    annotations.destructive_hint = Some(command.method.is_destructive());
    annotations.open_world_hint = Some(true);
    tool.annotations = Some(annotations);
    tool
}
