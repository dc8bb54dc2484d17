use std::fmt;
use serde::{Serialize, Deserialize};

/// Category governing how a column's filter values are validated,
/// completed and stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Port,
    Address,
    Protocol,
    Direction,
    Namespace,
    Name,
    Text,
    Number,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FilterKind::Port      => "port",
            FilterKind::Address   => "address",
            FilterKind::Protocol  => "protocol",
            FilterKind::Direction => "direction",
            FilterKind::Namespace => "namespace",
            FilterKind::Name      => "name",
            FilterKind::Text      => "text",
            FilterKind::Number    => "number",
        };
        f.write_str(name)
    }
}
