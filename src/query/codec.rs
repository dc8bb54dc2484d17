use std::fmt;
use std::str::FromStr;
use log::debug;
use crate::column::Registry;
use crate::error::{invalid, Error};
use crate::filter::Filters;
use super::{Params, RESERVED};
use super::{END_TIME, LIMIT, MATCH, SHOW_DUP, START_TIME, TIME_RANGE};

/// Query state persisted in URL parameters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
    pub filters:  Filters,
    pub range:    Option<TimeRange>,
    pub limit:    Option<u32>,
    pub matches:  Option<Match>,
    pub show_dup: Option<bool>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeRange {
    Last(u64),
    Between(u64, u64),
}

/// How filter clauses on different columns combine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Match {
    All,
    Any,
}

pub fn encode(query: &Query) -> Params {
    let mut params = Params::new();

    for f in query.filters.iter() {
        for v in &f.values {
            params.push(&f.column, v.v.clone());
        }
    }

    match query.range {
        Some(TimeRange::Last(secs)) => {
            params.push(TIME_RANGE, secs.to_string());
        }
        Some(TimeRange::Between(start, end)) => {
            params.push(START_TIME, start.to_string());
            params.push(END_TIME, end.to_string());
        }
        None => (),
    }

    if let Some(limit) = query.limit {
        params.push(LIMIT, limit.to_string());
    }

    if let Some(m) = query.matches {
        params.push(MATCH, m.to_string());
    }

    if let Some(show) = query.show_dup {
        params.push(SHOW_DUP, show.to_string());
    }

    params
}

/// Restore a query from parameters. Values that do not validate against
/// their column's filter, unknown keys and malformed reserved values are
/// dropped.
pub fn decode(params: &Params, registry: &Registry) -> Query {
    let mut filters = Filters::new();

    for (key, values) in params.iter().filter(|(k, _)| !RESERVED.contains(k)) {
        let column = match registry.get(key) {
            Some(c) if c.filter.is_some() => c,
            _ => {
                debug!("ignoring query key {}", key);
                continue;
            }
        };

        for raw in values {
            match column.validate(raw) {
                Ok(v)  => filters.add(key, v),
                Err(e) => debug!("dropping {}={}: {}", key, raw, e),
            }
        }
    }

    let start = reserved::<u64>(params, START_TIME);
    let end   = reserved::<u64>(params, END_TIME);

    let range = match (reserved(params, TIME_RANGE), start, end) {
        (Some(secs), _, _)        => Some(TimeRange::Last(secs)),
        (None, Some(s), Some(e))  => Some(TimeRange::Between(s, e)),
        _                         => None,
    };

    Query {
        filters:  filters,
        range:    range,
        limit:    reserved(params, LIMIT),
        matches:  reserved(params, MATCH),
        show_dup: reserved(params, SHOW_DUP),
    }
}

fn reserved<T: FromStr>(params: &Params, key: &str) -> Option<T> {
    let raw = params.first(key)?;
    match raw.parse() {
        Ok(v)  => Some(v),
        Err(_) => {
            debug!("dropping {}={}", key, raw);
            None
        }
    }
}

impl FromStr for Match {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Match::All),
            "any" => Ok(Match::Any),
            _     => invalid(format!("invalid match mode: {}", s)),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Match::All => "all",
            Match::Any => "any",
        })
    }
}
