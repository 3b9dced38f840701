use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::ApiError;

/// Renders a BSON value the way the shop's clients read it: relaxed
/// Extended JSON, except that object ids become bare hex strings.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn documents_to_json(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(document_to_json).collect()
}

/// Stores a request value as written. `$`-prefixed keys stay literal keys
/// rather than being read as Extended JSON.
pub fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(json_to_document(map)),
    }
}

pub fn json_to_document(map: Map<String, Value>) -> Document {
    map.into_iter()
        .map(|(key, value)| (key, json_to_bson(value)))
        .collect()
}

// Integers outside the i64 range fall back to a double.
fn number_to_bson(n: &Number) -> Bson {
    match n.as_i64() {
        Some(i) => match i32::try_from(i) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(i),
        },
        None => n.as_f64().map_or(Bson::Null, Bson::Double),
    }
}

pub(crate) fn serialize_bson<S>(value: &Bson, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    bson_to_json(value.clone()).serialize(serializer)
}

pub(crate) fn serialize_optional_bson<S>(
    value: &Option<Bson>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.clone().map(bson_to_json).serialize(serializer)
}

/// Parses a path segment into an `ObjectId`, the only input check any
/// handler performs.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw)
        .map_err(|e| ApiError::InvalidInput(format!("invalid id '{}': {}", raw, e)))
}
