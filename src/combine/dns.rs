use std::collections::HashMap;
use log::debug;
use serde_json::Value as Json;
use crate::flow::{field, Record};

const QR: u64 = 0x8000;

#[derive(Default)]
struct Exchange {
    query:    Option<f64>,
    response: Option<f64>,
}

/// Fill `DnsLatencyMs` on records of a DNS transaction that lack it, from
/// the first query and first response sharing the transaction id. Records
/// carrying a latency are left untouched, so repeated calls are no-ops.
pub fn dns_latency(records: &mut [Record]) {
    let mut exchanges: HashMap<String, Exchange> = HashMap::new();

    for r in records.iter() {
        let (id, start) = match (transaction(r), r.number(field::TIME_START)) {
            (Some(id), Some(start)) => (id, start),
            _                       => continue,
        };

        let flags = r.number(field::DNS_FLAGS).map(|f| f as u64).unwrap_or(0);
        let entry = exchanges.entry(id).or_default();
        let slot  = match flags & QR {
            0 => &mut entry.query,
            _ => &mut entry.response,
        };
        slot.get_or_insert(start);
    }

    let mut filled = 0;

    for r in records.iter_mut() {
        if r.get(field::DNS_LATENCY).is_some() {
            continue;
        }

        let latency = transaction(r).and_then(|id| {
            let exchange = exchanges.get(&id)?;
            Some((exchange.response? - exchange.query?).max(0.0))
        });

        if let Some(latency) = latency {
            r.set(field::DNS_LATENCY, Json::from(latency));
            filled += 1;
        }
    }

    debug!("filled DNS latency on {} records", filled);
}

fn transaction(r: &Record) -> Option<String> {
    r.get(field::DNS_ID).map(|id| id.to_string())
}
