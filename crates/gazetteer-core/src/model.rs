// crates/gazetteer-core/src/model.rs

//! # Domain Model
//!
//! [`LocationRecord`] is the canonical output unit. It is built with every
//! optional part as an `Option` (serialized as `null`), and the pruning pass
//! in [`crate::prune`] strips those at serialization time.
//!
//! Reading back is lenient: missing keys take their defaults, and a part whose
//! JSON shape does not fit (a number where a name is expected, a float
//! population, a textual elevation) reads as absent instead of failing the
//! whole document. Names written as numbers are kept as text.

use crate::config::CorpusInfo;
use crate::prune::prune;
use crate::value::Number;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Administrative level key (`level_1` .. `level_4`) to code.
pub type AdministrativeCodes = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    #[serde(deserialize_with = "text_or_default")]
    pub id: String,
    #[serde(deserialize_with = "or_default")]
    pub names: Names,
    #[serde(deserialize_with = "lenient")]
    pub coordinates: Option<Coordinates>,
    #[serde(deserialize_with = "or_default")]
    pub feature: Feature,
    #[serde(deserialize_with = "or_default")]
    pub country: Country,
    #[serde(deserialize_with = "lenient")]
    pub administrative: Option<AdministrativeCodes>,
    #[serde(deserialize_with = "lenient")]
    pub elevation: Option<Elevation>,
    #[serde(deserialize_with = "lenient")]
    pub population: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub metadata: RecordMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Names {
    /// May be empty when the source has no primary name.
    #[serde(deserialize_with = "text_or_default")]
    pub primary: String,
    #[serde(deserialize_with = "lenient_text")]
    pub alternate: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub alternatives: Vec<String>,
    /// Deduplicated union of the names above, empty strings excluded.
    #[serde(deserialize_with = "text_list")]
    pub all: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Number,
    pub longitude: Number,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub type_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub code_label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "lenient")]
    pub code: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    pub meters: Number,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMetadata {
    #[serde(deserialize_with = "lenient")]
    pub modification_date: Option<String>,
}

impl LocationRecord {
    /// The record as a JSON tree with every `null` and empty container removed.
    pub fn to_sparse_value(&self) -> serde_json::Result<Value> {
        let value = serde_json::to_value(self)?;
        Ok(prune(value).unwrap_or_else(|| Value::Object(Map::new())))
    }

    pub fn name(&self) -> &str {
        &self.names.primary
    }

    pub fn feature_type(&self) -> Option<&str> {
        self.feature.kind.as_deref()
    }

    pub fn feature_code(&self) -> Option<&str> {
        self.feature.code.as_deref()
    }

    /// Level-1 administrative code, if present and non-empty.
    pub fn region_code(&self) -> Option<&str> {
        self.administrative
            .as_ref()
            .and_then(|admin| admin.get("level_1"))
            .map(String::as_str)
            .filter(|code| !code.is_empty())
    }
}

// -----------------------------------------------------------------------------
// CORPUS
// -----------------------------------------------------------------------------

/// The whole output document: `{ metadata, locations }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default, deserialize_with = "or_default")]
    pub metadata: CorpusMetadata,
    #[serde(
        default,
        serialize_with = "serialize_sparse",
        deserialize_with = "deserialize_records"
    )]
    pub locations: Vec<LocationRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusMetadata {
    #[serde(deserialize_with = "text_or_default")]
    pub source: String,
    #[serde(deserialize_with = "text_or_default")]
    pub country: String,
    #[serde(deserialize_with = "text_or_default")]
    pub country_code: String,
    #[serde(deserialize_with = "or_default")]
    pub total_locations: usize,
    /// ISO-8601 local timestamp taken when the corpus was assembled.
    #[serde(deserialize_with = "lenient_text")]
    pub generated_at: Option<String>,
}

impl Corpus {
    /// Assembles a corpus and stamps it with the current local time.
    pub fn new(info: &CorpusInfo, locations: Vec<LocationRecord>) -> Self {
        let generated_at = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        Self {
            metadata: CorpusMetadata {
                source: info.source.clone(),
                country: info.country.clone(),
                country_code: info.country_code.clone(),
                total_locations: locations.len(),
                generated_at: Some(generated_at),
            },
            locations,
        }
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }
}

/// Writes each record in its pruned form.
fn serialize_sparse<S: Serializer>(
    records: &[LocationRecord],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(records.len()))?;
    for record in records {
        let value = record.to_sparse_value().map_err(S::Error::custom)?;
        seq.serialize_element(&value)?;
    }
    seq.end()
}

// -----------------------------------------------------------------------------
// LENIENT READING
// -----------------------------------------------------------------------------

/// `T` when the value has the right shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Entries that are not JSON objects cannot be records and are skipped.
fn deserialize_records<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<LocationRecord>, D::Error> {
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            tracing::warn!(index, "skipping location that is not an object");
            continue;
        }
        records.push(serde_json::from_value(item).map_err(D::Error::custom)?);
    }
    Ok(records)
}

/// Strings as-is, numbers in their JSON form, anything else absent.
fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(as_text(Value::deserialize(deserializer)?))
}

fn text_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// A list of names. Entries that are not text or numbers are skipped.
fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(as_text).collect(),
        _ => Vec::new(),
    })
}
