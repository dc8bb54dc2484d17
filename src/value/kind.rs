use std::fmt;
use serde::{Serialize, Deserialize};

/// Declared result type of a column. Drives scalar coercion and the
/// comparator bound to the column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Address,
    Port,
    Protocol,
}

impl ValueType {
    pub fn is_numeric(self) -> bool {
        match self {
            ValueType::Number | ValueType::Port | ValueType::Protocol => true,
            ValueType::String | ValueType::Address                    => false,
        }
    }
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::String
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ValueType::String   => "string",
            ValueType::Number   => "number",
            ValueType::Address  => "address",
            ValueType::Port     => "port",
            ValueType::Protocol => "protocol",
        })
    }
}
