use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use serde_json::Value as Json;
use crate::value::Value;
use super::{field, Direction};

/// A record as materialised from the upstream flow log service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Raw {
    pub labels: Labels,
    #[serde(default)]
    pub fields: BTreeMap<String, Json>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(rename = "FlowDirection")]
    pub direction: Direction,
    #[serde(rename = "_RecordType", default, skip_serializing_if = "Option::is_none")]
    pub kind:      Option<String>,
    #[serde(flatten)]
    pub other:     BTreeMap<String, Json>,
}

/// One flow observation with a process-local identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    key:    u64,
    labels: Labels,
    fields: BTreeMap<String, Json>,
}

impl Record {
    pub(super) fn new(key: u64, raw: Raw) -> Self {
        Self {
            key:    key,
            labels: raw.labels,
            fields: raw.fields,
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn fields(&self) -> &BTreeMap<String, Json> {
        &self.fields
    }

    pub fn direction(&self) -> Direction {
        self.labels.direction
    }

    /// Resolve a field, falling back to labels. Absent or null attributes
    /// yield nothing.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(json) = self.fields.get(name) {
            return Value::from_json(json);
        }

        match name {
            field::FLOW_DIRECTION => Some(Value::Str(self.labels.direction.value().to_owned())),
            field::RECORD_TYPE    => self.labels.kind.clone().map(Value::Str),
            _                     => self.labels.other.get(name).and_then(Value::from_json),
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Json::as_f64)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Json::as_str)
    }

    pub(crate) fn set(&mut self, name: &str, value: Json) {
        self.fields.insert(name.to_owned(), value);
    }
}
