//! Core data types shared across modules

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A configurable model endpoint.
///
/// Every field except `model` is opaque to the merge; `model` is the dedup key.
/// Missing or `null` fields decode as empty strings, and a `null` entry
/// decodes as an all-empty entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    #[serde(rename = "model_display_name")]
    pub display_name: String,
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    pub provider: String,
}

impl ModelEntry {
    pub fn new(display_name: &str, model: &str, base_url: &str, api_key: &str, provider: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            model: model.to_string(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            provider: provider.to_string(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct EntryFields {
    #[serde(deserialize_with = "null_as_default")]
    model_display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    model: String,
    #[serde(deserialize_with = "null_as_default")]
    base_url: String,
    #[serde(deserialize_with = "null_as_default")]
    api_key: String,
    #[serde(deserialize_with = "null_as_default")]
    provider: String,
}

impl<'de> Deserialize<'de> for ModelEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: EntryFields = object_or_null(deserializer)?;
        Ok(Self {
            display_name: fields.model_display_name,
            model: fields.model,
            base_url: fields.base_url,
            api_key: fields.api_key,
            provider: fields.provider,
        })
    }
}

/// Top-level config document: an ordered list of model entries.
///
/// Only a JSON object (or `null`, read as an empty document) decodes;
/// a `null` `custom_models` is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    #[serde(rename = "custom_models")]
    pub entries: Vec<ModelEntry>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DocumentFields {
    #[serde(deserialize_with = "null_as_default")]
    custom_models: Vec<ModelEntry>,
}

impl<'de> Deserialize<'de> for ConfigDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: DocumentFields = object_or_null(deserializer)?;
        Ok(Self { entries: fields.custom_models })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Derived struct decoding also accepts a JSON array; records here must be objects.
fn object_or_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(object) => T::deserialize(Value::Object(object)).map_err(de::Error::custom),
        None => Ok(T::default()),
    }
}

impl ConfigDocument {
    pub fn new(entries: Vec<ModelEntry>) -> Self {
        Self { entries }
    }

    /// Model keys in document order.
    pub fn model_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.model.as_str()).collect()
    }
}
