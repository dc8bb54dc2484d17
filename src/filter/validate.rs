use std::net::IpAddr;
use crate::error::{invalid, Result};
use crate::flow::Direction;
use crate::names::{protocol_name, protocol_number, service_name, services};
use crate::value::Value;
use super::{FilterKind, FilterValue};

const ADDRESS_SHAPES: &str = "expected a single IP (e.g. 192.0.2.0), \
    a range (e.g. 192.168.0.1-192.189.10.12) or a CIDR (e.g. 192.51.100.0/24)";

impl FilterKind {
    /// Validate user input and return it in canonical form. Validation is
    /// idempotent: a canonical value validates to itself.
    pub fn validate(&self, raw: &str) -> Result<FilterValue> {
        let raw = raw.trim();

        if raw.is_empty() {
            return invalid("value is empty");
        }

        match self {
            FilterKind::Port      => port(raw),
            FilterKind::Address   => address(raw),
            FilterKind::Protocol  => protocol(raw),
            FilterKind::Direction => direction(raw),
            FilterKind::Number    => number(raw),
            FilterKind::Namespace => Ok(FilterValue::new(raw)),
            FilterKind::Name      => Ok(FilterValue::new(raw)),
            FilterKind::Text      => Ok(FilterValue::new(raw)),
        }
    }

    /// Validate input, or accept the single autocomplete candidate it
    /// matches when it is not valid on its own. Uniqueness is decided over
    /// all candidates; `max` only bounds the options offered.
    pub fn accept(&self, raw: &str, max: usize) -> Result<FilterValue> {
        self.validate(raw).or_else(|err| {
            if max == 0 {
                return Err(err);
            }
            match self.candidates(raw).as_slice() {
                [only] => self.validate(&only.value),
                _      => Err(err),
            }
        })
    }
}

fn digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn port(raw: &str) -> Result<FilterValue> {
    if digits(raw) {
        if let Ok(p) = raw.parse::<u16>() {
            return Ok(FilterValue::with_display(p.to_string(), service_name(p)));
        }
    }

    match services().find(|(_, name)| name.eq_ignore_ascii_case(raw)) {
        Some((_, name)) => Ok(FilterValue::new(name)),
        None            => invalid(format!("unknown port: {}", raw)),
    }
}

fn address(raw: &str) -> Result<FilterValue> {
    let ip = |s: &str| s.trim().parse::<IpAddr>().ok();

    let canonical = if let Some((addr, prefix)) = raw.split_once('/') {
        ip(addr).and_then(|addr| {
            let max = if addr.is_ipv4() { 32 } else { 128 };
            let len = Some(prefix.trim()).filter(|p| digits(p) && !p.is_empty())?;
            let len = len.parse::<u8>().ok().filter(|len| *len <= max)?;
            Some(format!("{}/{}", addr, len))
        })
    } else if let Some((lo, hi)) = raw.split_once('-') {
        match (ip(lo), ip(hi)) {
            (Some(lo), Some(hi)) if lo.is_ipv4() == hi.is_ipv4() => Some(format!("{}-{}", lo, hi)),
            _                                                  => None,
        }
    } else {
        ip(raw).map(|addr| addr.to_string())
    };

    match canonical {
        Some(v) => Ok(FilterValue::new(v)),
        None    => invalid(format!("invalid address '{}': {}", raw, ADDRESS_SHAPES)),
    }
}

fn protocol(raw: &str) -> Result<FilterValue> {
    if digits(raw) {
        let n = match raw.trim_start_matches('0') {
            ""     => "0",
            n      => n,
        };
        let name = n.parse::<u8>().ok().and_then(protocol_name);
        return Ok(FilterValue::with_display(n, name));
    }

    match protocol_number(raw).and_then(protocol_name) {
        Some(name) => Ok(FilterValue::new(name)),
        None       => invalid(format!("unknown protocol: {}", raw)),
    }
}

fn direction(raw: &str) -> Result<FilterValue> {
    if let Ok(d) = raw.parse::<Direction>() {
        return Ok(FilterValue::new(d.name()));
    }

    let prefix  = raw.to_ascii_lowercase();
    let matches = Direction::ALL.iter().filter(|d| {
        d.name().to_ascii_lowercase().starts_with(&prefix)
    }).collect::<Vec<_>>();

    match matches.as_slice() {
        [d] => Ok(FilterValue::new(d.name())),
        []  => invalid(format!("unknown direction: {}", raw)),
        _   => invalid(format!("ambiguous direction: {}", raw)),
    }
}

fn number(raw: &str) -> Result<FilterValue> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 => {
            Ok(FilterValue::new(Value::Num(n).to_string()))
        },
        _ => invalid(format!("not a non-negative integer: {}", raw)),
    }
}
