use schemars::schema_for;
use serde_json::{json, Map, Value};

use crate::core::model::{OptimizationResult, Platform};

/// Builds the Gemini strict-mode `responseSchema` for a platform.
///
/// The schema is derived from `OptimizationResult`; the `tags` property is
/// dropped for non-YouTube platforms, matching the per-platform output
/// contract in the instruction text.
pub fn response_schema(platform: Platform) -> serde_json::Result<Value> {
    let mut root = serde_json::to_value(schema_for!(OptimizationResult))?;

    let definitions = root
        .get("definitions")
        .or_else(|| root.get("$defs"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    inline_node(&mut root, &definitions, 0);

    if let Value::Object(map) = &mut root {
        map.remove("$schema");
        map.remove("definitions");
        map.remove("$defs");
    }

    if platform != Platform::YouTube {
        if let Some(props) = root.get_mut("properties").and_then(Value::as_object_mut) {
            props.remove("tags");
        }
    }

    Ok(root)
}

/// Resolves `$ref` against the schema's definitions and strips the keywords
/// Gemini strict mode rejects. The response types are flat, so a shallow
/// depth guard is enough.
fn inline_node(node: &mut Value, definitions: &Map<String, Value>, depth: usize) {
    if depth > 8 {
        *node = json!({ "type": "object" });
        return;
    }

    let ref_name = node
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|r| r.split('/').next_back())
        .map(str::to_string);
    if let Some(name) = ref_name {
        *node = definitions
            .get(&name)
            .cloned()
            .unwrap_or_else(|| json!({ "type": "object" }));
    }

    let Value::Object(map) = node else { return };

    map.remove("$ref");
    map.remove("additionalProperties");
    map.remove("title");
    map.remove("format");

    // Option<T> derives as type ["T", "null"]; strict mode wants a single
    // type plus a nullable flag.
    if let Some(Value::Array(types)) = map.get("type") {
        let nullable = types.iter().any(|t| t == &json!("null"));
        let concrete = types.iter().find(|t| *t != &json!("null")).cloned();
        if let Some(t) = concrete {
            map.insert("type".to_string(), t);
            if nullable {
                map.insert("nullable".to_string(), json!(true));
            }
        }
    }

    if let Some(Value::Object(props)) = map.get_mut("properties") {
        for val in props.values_mut() {
            inline_node(val, definitions, depth + 1);
        }
    }

    if let Some(items) = map.get_mut("items") {
        inline_node(items, definitions, depth + 1);
    }

    for key in ["allOf", "anyOf", "oneOf"] {
        if let Some(Value::Array(arr)) = map.get_mut(key) {
            for item in arr.iter_mut() {
                inline_node(item, definitions, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_no_refs_or_meta_keys() {
        let schema = response_schema(Platform::YouTube).unwrap();
        let text = serde_json::to_string(&schema).unwrap();
        assert!(!text.contains("$ref"));
        assert!(!text.contains("$schema"));
        assert!(!text.contains("additionalProperties"));
    }

    #[test]
    fn test_schema_inlines_definitions() {
        let schema = response_schema(Platform::YouTube).unwrap();
        let title_type = schema
            .pointer("/properties/guidelines/items/properties/title/type")
            .and_then(Value::as_str);
        assert_eq!(title_type, Some("string"));
        let content_type = schema
            .pointer("/properties/suggestions/items/properties/content/type")
            .and_then(Value::as_str);
        assert_eq!(content_type, Some("string"));
    }

    #[test]
    fn test_tags_only_for_youtube() {
        let youtube = response_schema(Platform::YouTube).unwrap();
        assert!(youtube.pointer("/properties/tags").is_some());

        for platform in [Platform::X, Platform::Facebook] {
            let schema = response_schema(platform).unwrap();
            assert!(schema.pointer("/properties/tags").is_none());
        }
    }

    #[test]
    fn test_nullable_folding() {
        let schema = response_schema(Platform::YouTube).unwrap();
        let tags = schema.pointer("/properties/tags").unwrap();
        assert_eq!(tags.pointer("/type").and_then(Value::as_str), Some("array"));
        assert_eq!(tags.pointer("/nullable"), Some(&json!(true)));
    }
}
