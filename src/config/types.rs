//! Raw tenant document types matching the JSON accepted from `TENANTS_CONFIG_JSON` or organizations.json.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level document: `{ "organizations": { "<tenant>": { ... } } }`.
/// A missing, null or empty `organizations` value (`{}`, `[]`, `""`) is an empty tenant set, not an error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TenantsDocument {
    #[serde(default, deserialize_with = "organizations_or_empty")]
    pub organizations: Map<String, Value>,
}

impl TenantsDocument {
    pub fn into_organizations(self) -> Map<String, Value> {
        self.organizations
    }
}

fn organizations_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(Value::Array(items)) if items.is_empty() => Ok(Map::new()),
        Some(Value::String(s)) if s.is_empty() => Ok(Map::new()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "organizations must be an object keyed by tenant id; got {}",
            type_name_of_json(&other)
        ))),
    }
}

/// One tenant entry before validation. Required fields are optional here so the
/// validator can name exactly which one is missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawOrganization {
    #[serde(default, alias = "llm")]
    pub azure_openai: Option<RawLlmProvider>,
    #[serde(default, alias = "search")]
    pub azure_search: Option<RawSearchProvider>,
    #[serde(default, alias = "doc_ids")]
    pub important_doc_ids: Option<RawDocumentIds>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawLlmProvider {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub deployment: Option<String>,
    #[serde(default)]
    pub embedding_deployment: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSearchProvider {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub embedding_api_version: Option<String>,
}

/// `important_doc_ids` comes in two shapes: a flat list (legacy, all general)
/// or an object keyed by profile category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawDocumentIds {
    Flat(Vec<String>),
    ByCategory(Map<String, Value>),
}

impl<'de> Deserialize<'de> for RawDocumentIds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        match v {
            Value::Array(items) => string_list(items)
                .map(RawDocumentIds::Flat)
                .map_err(serde::de::Error::custom),
            Value::Object(obj) => Ok(RawDocumentIds::ByCategory(obj)),
            other => Err(serde::de::Error::custom(format!(
                "important_doc_ids must be a list of strings or an object of lists; got {}",
                type_name_of_json(&other)
            ))),
        }
    }
}

/// Convert a JSON array into document ids, rejecting non-string items.
pub fn string_list(items: Vec<Value>) -> Result<Vec<String>, String> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(format!(
                "document ids must be strings; got {}",
                type_name_of_json(&other)
            )),
        })
        .collect()
}

pub fn type_name_of_json(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
