use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ════════════════════════════════════════════════════════════════
//  Topic
// ════════════════════════════════════════════════════════════════

/// A single topic: a JSON object with a string `name` and any number of
/// other fields the service never interprets.
///
/// The object is kept as loaded and written back unchanged (field order
/// included), so a response carries exactly what the source holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    name: String,
    fields: Map<String, Value>,
}

impl Topic {
    /// Build a topic from a JSON object. Fails if `name` is missing or
    /// is not a string.
    pub fn from_object(fields: Map<String, Value>) -> Result<Self, String> {
        let name = match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(format!("topic field 'name' must be a string, got {}", json_type(other)));
            }
            None => return Err("topic is missing field 'name'".to_string()),
        };
        Ok(Self { name, fields })
    }

    /// Shorthand for a topic that has nothing but a name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.clone()));
        Self { name, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Any field of the underlying object, `name` included.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl TryFrom<Value> for Topic {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Topic::from_object(fields),
            other => Err(format!("topic must be an object, got {}", json_type(&other))),
        }
    }
}

impl Serialize for Topic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Topic::try_from(value).map_err(serde::de::Error::custom)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ════════════════════════════════════════════════════════════════
//  TopicDocument
// ════════════════════════════════════════════════════════════════

/// On-disk envelope of a topic collection: `{ "topics": [ ... ] }`.
/// Other top-level fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicDocument {
    pub topics: Vec<Topic>,
}

impl TopicDocument {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
