use std::fs;
use std::path::Path;
use log::debug;
use serde::{Serialize, Deserialize};
use serde_json::Value as Json;
use crate::filter::FilterKind;
use crate::value::ValueType;
use crate::Result;

const EMBEDDED: &str = include_str!("../config/columns.json");

/// Column catalogue configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub columns: Vec<ColumnConfig>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ColumnConfig {
    pub id:           String,
    pub name:         String,
    #[serde(default)]
    pub group:        Option<String>,
    #[serde(default)]
    pub tooltip:      Option<String>,
    #[serde(default)]
    pub doc_url:      Option<String>,
    #[serde(default)]
    pub filter:       Option<FilterKind>,
    #[serde(default)]
    pub quick_filter: Option<String>,
    #[serde(default)]
    pub field:        Option<String>,
    #[serde(default)]
    pub fields:       Option<Vec<String>>,
    #[serde(default)]
    pub calculated:   Option<String>,
    #[serde(rename = "type", default)]
    pub kind:         ValueType,
    #[serde(default)]
    pub default:      Option<Json>,
    #[serde(default = "width")]
    pub width:        u32,
    #[serde(default)]
    pub visible:      bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading columns from {}", path.display());
        Self::parse(&fs::read(path)?)
    }

    pub fn parse(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    /// The built-in flow log column catalogue.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED.as_bytes())
    }
}

fn width() -> u32 {
    10
}
