use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Which side of a connection reported the flow.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    Ingress,
    Egress,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ingress, Direction::Egress];

    /// Label value carried by records.
    pub fn value(self) -> &'static str {
        match self {
            Direction::Ingress => "0",
            Direction::Egress  => "1",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Ingress => "Ingress",
            Direction::Egress  => "Egress",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL.iter().copied().find(|d| {
            s == d.value() || s.eq_ignore_ascii_case(d.name())
        }).ok_or_else(|| format!("invalid direction: {}", s))
    }
}

impl TryFrom<String> for Direction {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.value().to_owned()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
