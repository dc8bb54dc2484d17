use std::cmp::Ordering::{self, *};
use std::net::IpAddr;
use crate::names::{format_port, protocol_name, service_name};

pub fn numbers(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|n| !n.is_nan());
    let b = b.filter(|n| !n.is_nan());
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Equal),
        (Some(_), None)    => Less,
        (None,    Some(_)) => Greater,
        (None,    None)    => Equal,
    }
}

/// Case-folded comparison with the exact text as tie-break.
pub fn strings(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let fold = a.to_lowercase().cmp(&b.to_lowercase());
            fold.then_with(|| a.cmp(b))
        },
        (Some(_), None)    => Less,
        (None,    Some(_)) => Greater,
        (None,    None)    => Equal,
    }
}

/// Numeric octet-by-octet order. IPv4 sorts before IPv6, text that is
/// not an address after both.
pub fn addresses(a: Option<&str>, b: Option<&str>) -> Ordering {
    let parse = |s: &str| s.trim().parse::<IpAddr>();
    match (a, b) {
        (Some(a), Some(b)) => match (parse(a), parse(b)) {
            (Ok(IpAddr::V4(x)), Ok(IpAddr::V4(y))) => x.octets().cmp(&y.octets()),
            (Ok(IpAddr::V6(x)), Ok(IpAddr::V6(y))) => x.segments().cmp(&y.segments()),
            (Ok(IpAddr::V4(_)), Ok(IpAddr::V6(_))) => Less,
            (Ok(IpAddr::V6(_)), Ok(IpAddr::V4(_))) => Greater,
            (Ok(_),  Err(_))                       => Less,
            (Err(_), Ok(_))                        => Greater,
            (Err(_), Err(_))                       => strings(Some(a), Some(b)),
        },
        (Some(_), None)    => Less,
        (None,    Some(_)) => Greater,
        (None,    None)    => Equal,
    }
}

/// Ports with a well-known service name sort before those without.
pub fn ports(a: Option<u16>, b: Option<u16>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (service_name(a), service_name(b)) {
            (Some(_), Some(_)) => {
                let (a, b) = (format_port(a), format_port(b));
                strings(Some(a.as_str()), Some(b.as_str()))
            },
            (Some(_), None)    => Less,
            (None,    Some(_)) => Greater,
            (None,    None)    => a.cmp(&b),
        },
        (Some(_), None)    => Less,
        (None,    Some(_)) => Greater,
        (None,    None)    => Equal,
    }
}

/// Order by protocol name; unnamed protocols follow, ordered by number.
pub fn protocols(a: Option<u8>, b: Option<u8>) -> Ordering {
    let name = |p: Option<u8>| p.and_then(protocol_name);
    strings(name(a), name(b)).then_with(|| {
        numbers(a.map(f64::from), b.map(f64::from))
    })
}
