use crate::compare::{ports, strings};
use crate::flow::Direction;
use crate::names::{format_port, protocol_name, protocols, service_name, services};
use super::{FilterKind, FilterOption};

impl FilterKind {
    /// Autocomplete options for partial input, at most `max` of them.
    /// Kinds without a closed value set offer nothing.
    pub fn complete(&self, input: &str, max: usize) -> Vec<FilterOption> {
        let mut options = self.candidates(input);
        options.truncate(max);
        options
    }

    /// Every option matching the input, in display order.
    pub(super) fn candidates(&self, input: &str) -> Vec<FilterOption> {
        let input = input.trim();

        match self {
            FilterKind::Port      => port(input),
            FilterKind::Protocol  => protocol(input),
            FilterKind::Direction => direction(input),
            FilterKind::Address   => Vec::new(),
            FilterKind::Namespace => Vec::new(),
            FilterKind::Name      => Vec::new(),
            FilterKind::Text      => Vec::new(),
            FilterKind::Number    => Vec::new(),
        }
    }
}

fn option<S: Into<String>, T: Into<String>>(value: S, display: T) -> FilterOption {
    FilterOption {
        value:   value.into(),
        display: display.into(),
    }
}

fn numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn port(input: &str) -> Vec<FilterOption> {
    if numeric(input) {
        return input.parse::<u16>().map(|p| {
            vec![option(p.to_string(), format_port(p))]
        }).unwrap_or_default();
    }

    let prefix = input.to_ascii_lowercase();
    let mut matches = services().filter(|(_, name)| {
        name.starts_with(&prefix)
    }).map(|(p, _)| p).collect::<Vec<_>>();

    matches.sort_by(|a, b| ports(Some(*a), Some(*b)));

    matches.into_iter().filter_map(|p| {
        Some(option(service_name(p)?, format_port(p)))
    }).collect()
}

fn protocol(input: &str) -> Vec<FilterOption> {
    if numeric(input) {
        return input.parse::<u8>().map(|n| {
            let name = protocol_name(n).map(str::to_owned).unwrap_or_else(|| n.to_string());
            vec![option(n.to_string(), name)]
        }).unwrap_or_default();
    }

    let prefix = input.to_ascii_lowercase();
    let mut matches = protocols().map(|(_, name)| name).filter(|name| {
        name.to_ascii_lowercase().starts_with(&prefix)
    }).collect::<Vec<_>>();

    matches.sort_by(|a, b| strings(Some(*a), Some(*b)));

    matches.into_iter().map(|name| option(name, name)).collect()
}

fn direction(input: &str) -> Vec<FilterOption> {
    let prefix = input.to_ascii_lowercase();
    let mut matches = Direction::ALL.iter().filter(|d| {
        input == d.value() || d.name().to_ascii_lowercase().starts_with(&prefix)
    }).map(|d| d.name()).collect::<Vec<_>>();

    matches.sort_by(|a, b| strings(Some(*a), Some(*b)));

    matches.into_iter().map(|name| option(name, name)).collect()
}

