//! Schema model and synthesis from the option tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::tree::ConfigNode;
use super::types::TypeAnnotation;

/// Primitive schema types the extractor can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    Number,
    Integer,
    String,
    Object,
    Array,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Boolean => "boolean",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::String => "string",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
        }
    }
}

/// Element schema(s) of an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
    /// Fixed-arity tuple, one schema per position
    Tuple(Vec<JsonSchema>),
    /// Homogeneous array, every element shares this schema
    Single(Box<JsonSchema>),
}

/// A JSON-Schema-like description of an option value.
///
/// All fields are optional; the empty schema serializes as `{}` and means
/// "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, JsonSchema>>,
}

impl JsonSchema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(kind: SchemaType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn string_enum(values: Vec<String>) -> Self {
        Self {
            kind: Some(SchemaType::String),
            enum_values: Some(values),
            ..Self::default()
        }
    }

    pub fn object(properties: IndexMap<String, JsonSchema>) -> Self {
        Self {
            kind: Some(SchemaType::Object),
            properties: Some(properties),
            ..Self::default()
        }
    }

    pub fn array(items: SchemaItems) -> Self {
        Self {
            kind: Some(SchemaType::Array),
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Property key for a documented sub-option.
///
/// Nested options are often written as dotted paths (`loc.x`); only the last
/// segment names the property.
pub fn property_key(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name).trim()
}

/// The child that documents every element of an array, written `name[n]`.
fn element_child(node: &ConfigNode) -> Option<&ConfigNode> {
    let indexed = format!("{}[n]", node.name);
    node.children
        .iter()
        .find(|child| child.name == indexed || child.name.ends_with("[n]"))
}

fn is_array_node(node: &ConfigNode) -> bool {
    node.type_annotation
        .as_deref()
        .is_some_and(|t| TypeAnnotation::parse(t) == TypeAnnotation::Array)
}

/// Synthesize the schema for one option and its sub-options.
pub fn build_schema(node: &ConfigNode) -> JsonSchema {
    if node.is_leaf() {
        return node
            .type_annotation
            .as_deref()
            .map(|t| TypeAnnotation::parse(t).leaf_schema())
            .unwrap_or_default();
    }

    if is_array_node(node) {
        let items = match element_child(node) {
            Some(child) => SchemaItems::Single(Box::new(build_schema(child))),
            None => SchemaItems::Tuple(node.children.iter().map(build_schema).collect()),
        };
        return JsonSchema::array(items);
    }

    let properties = node
        .children
        .iter()
        .map(|child| (property_key(&child.name).to_string(), build_schema(child)))
        .collect();
    JsonSchema::object(properties)
}

/// Derive the default value of one option.
///
/// Arrays report their own documented default; sub-option defaults of an
/// array are never aggregated. Objects collect the defaults of their
/// sub-options and are absent when none has one.
pub fn build_default(node: &ConfigNode) -> Option<Value> {
    if node.is_leaf() || is_array_node(node) {
        return node.default.clone();
    }

    let mut object = Map::new();
    for child in &node.children {
        if let Some(value) = build_default(child) {
            object.insert(property_key(&child.name).to_string(), value);
        }
    }

    if object.is_empty() {
        None
    } else {
        Some(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(name: &str, type_annotation: &str, default: Option<Value>) -> ConfigNode {
        ConfigNode {
            name: name.to_string(),
            depth: 4,
            type_annotation: Some(type_annotation.to_string()),
            default,
            children: Vec::new(),
        }
    }

    fn parent(name: &str, type_annotation: Option<&str>, children: Vec<ConfigNode>) -> ConfigNode {
        ConfigNode {
            name: name.to_string(),
            depth: 3,
            type_annotation: type_annotation.map(str::to_string),
            default: None,
            children,
        }
    }

    #[test]
    fn test_empty_schema_serializes_as_empty_object() {
        assert_eq!(serde_json::to_value(JsonSchema::empty()).unwrap(), json!({}));
        assert!(JsonSchema::empty().is_empty());
        assert!(!JsonSchema::of(SchemaType::String).is_empty());
    }

    #[test]
    fn test_schema_serialization_shape() {
        let mut properties = IndexMap::new();
        properties.insert(
            "mode".to_string(),
            JsonSchema::string_enum(vec!["always".into(), "never".into()]),
        );
        properties.insert(
            "ignore".to_string(),
            JsonSchema::array(SchemaItems::Single(Box::new(JsonSchema::of(
                SchemaType::String,
            )))),
        );
        let schema = JsonSchema::object(properties);

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "mode": { "type": "string", "enum": ["always", "never"] },
                    "ignore": { "type": "array", "items": { "type": "string" } }
                }
            })
        );
    }

    #[test]
    fn test_schema_deserializes_tuple_items() {
        let schema: JsonSchema = serde_json::from_value(json!({
            "type": "array",
            "items": [{ "type": "number" }, {}]
        }))
        .unwrap();
        assert_eq!(
            schema,
            JsonSchema::array(SchemaItems::Tuple(vec![
                JsonSchema::of(SchemaType::Number),
                JsonSchema::empty()
            ]))
        );
    }

    #[test]
    fn test_property_key_uses_last_segment() {
        assert_eq!(property_key("loc.x"), "x");
        assert_eq!(property_key("options.nested.flag "), "flag");
        assert_eq!(property_key("plain"), "plain");
    }

    #[test]
    fn test_leaf_without_type_is_unconstrained() {
        let node = parent("anything", None, Vec::new());
        assert_eq!(build_schema(&node), JsonSchema::empty());
    }

    #[test]
    fn test_homogeneous_array() {
        let node = parent(
            "allowList",
            Some("`array`"),
            vec![
                leaf("allowList[0]", "`number`", None),
                leaf("allowList[n]", "`string`", None),
            ],
        );
        assert_eq!(
            build_schema(&node),
            JsonSchema::array(SchemaItems::Single(Box::new(JsonSchema::of(
                SchemaType::String
            ))))
        );
    }

    #[test]
    fn test_tuple_array() {
        let node = parent(
            "range",
            Some("array"),
            vec![leaf("min", "`number`", None), leaf("max", "`integer`", None)],
        );
        assert_eq!(
            build_schema(&node),
            JsonSchema::array(SchemaItems::Tuple(vec![
                JsonSchema::of(SchemaType::Number),
                JsonSchema::of(SchemaType::Integer)
            ]))
        );
    }

    #[test]
    fn test_object_with_dotted_children() {
        let node = parent(
            "loc",
            Some("`object`"),
            vec![
                leaf("loc.y", "`number`", Some(json!(1))),
                leaf("loc.x", "`number`", Some(json!(0))),
            ],
        );
        let schema = build_schema(&node);
        let keys: Vec<_> = schema.properties.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["y", "x"]);
        assert_eq!(build_default(&node), Some(json!({ "y": 1, "x": 0 })));
    }

    #[test]
    fn test_object_default_absent_when_no_child_has_one() {
        let node = parent("opts", None, vec![leaf("a", "`string`", None)]);
        assert_eq!(build_default(&node), None);
    }

    #[test]
    fn test_array_default_ignores_children() {
        let mut node = parent(
            "pairs",
            Some("`array`"),
            vec![leaf("pairs[n]", "`string`", Some(json!("x")))],
        );
        assert_eq!(build_default(&node), None);

        node.default = Some(json!(["a"]));
        assert_eq!(build_default(&node), Some(json!(["a"])));
    }
}
