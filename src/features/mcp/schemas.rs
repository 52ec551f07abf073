use std::collections::HashMap;

use serde_json::{Value, json};

use crate::features::dip::client::{MAX_WAHLPERIODE, MIN_WAHLPERIODE};
use crate::features::mcp::dto::ToolDefinition;

pub fn build_tool_schemas() -> (Vec<ToolDefinition>, HashMap<String, Value>) {
    let mut definitions = Vec::new();
    let mut input_schemas = HashMap::new();

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "dip.get_person",
        "Search Bundestag members",
        "Search for German parliamentary members in the DIP database. Name matches first and last names; wahlperiode filters by electoral period; pass the cursor from a previous response to page through results.",
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string", "minLength": 1},
                "wahlperiode": {
                    "type": "integer",
                    "minimum": MIN_WAHLPERIODE,
                    "maximum": MAX_WAHLPERIODE
                },
                "cursor": {"type": "string"}
            },
            "additionalProperties": false
        }),
        Some(json!({
            "description": "Raw DIP person page with numFound, cursor, and documents.",
            "type": "object"
        })),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "dip.get_party_distribution",
        "Party distribution for an electoral period",
        "Fetch every member of one electoral period (all pages) and return party counts with percentages, sorted by seat count.",
        json!({
            "type": "object",
            "required": ["wahlperiode"],
            "properties": {
                "wahlperiode": {
                    "type": "integer",
                    "minimum": MIN_WAHLPERIODE,
                    "maximum": MAX_WAHLPERIODE
                }
            },
            "additionalProperties": false
        }),
        Some(json!({
            "type": "object",
            "required": ["wahlperiode", "totalMembers", "parties"],
            "properties": {
                "wahlperiode": {"type": "integer"},
                "totalMembers": {"type": "integer"},
                "parties": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["fraktion", "count", "percentage"],
                        "properties": {
                            "fraktion": {"type": "string"},
                            "count": {"type": "integer"},
                            "percentage": {"type": "number"}
                        }
                    }
                }
            }
        })),
    );

    for (name, title, description) in [
        (
            "math.add",
            "Add two integers",
            "Adds two integer numbers together.",
        ),
        (
            "math.subtract",
            "Subtract two integers",
            "Subtracts the second integer from the first.",
        ),
        (
            "math.multiply",
            "Multiply two integers",
            "Multiplies two integer numbers together.",
        ),
        (
            "math.divide",
            "Divide two integers",
            "Divides the first integer by the second; division by zero is rejected.",
        ),
    ] {
        push_tool(
            &mut definitions,
            &mut input_schemas,
            name,
            title,
            description,
            json!({
                "type": "object",
                "required": ["a", "b"],
                "properties": {
                    "a": {"type": "integer"},
                    "b": {"type": "integer"}
                },
                "additionalProperties": false
            }),
            Some(json!({
                "type": "object",
                "required": ["result"],
                "properties": {"result": {"type": "integer"}}
            })),
        );
    }

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "utilities.current_datetime",
        "Current date and time",
        "Return the current UTC time alongside Europe/Berlin local time.",
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        }),
        None,
    );

    (definitions, input_schemas)
}

fn push_tool(
    definitions: &mut Vec<ToolDefinition>,
    input_schemas: &mut HashMap<String, Value>,
    name: &str,
    title: &str,
    description: &str,
    input_schema: Value,
    output_schema: Option<Value>,
) {
    input_schemas.insert(name.to_string(), input_schema.clone());
    definitions.push(ToolDefinition {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        input_schema,
        output_schema,
    });
}
