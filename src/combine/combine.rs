use std::collections::HashMap;
use log::{debug, log_enabled, trace, Level};
use crate::flow::{field, Direction, Key, Record};

/// Collapse flows reported by several agents. Records are grouped by
/// 5-tuple; each group keeps the records sharing the direction of its
/// first DNS or drop bearing record, or of its first record otherwise.
pub fn combine(records: Vec<Record>) -> Vec<Record> {
    let keys = records.iter().map(Record::flow_key).collect::<Vec<_>>();

    let mut groups: HashMap<Key, (Direction, bool)> = HashMap::new();

    for (r, key) in records.iter().zip(&keys) {
        let preferred = preferred(r);
        groups.entry(*key).and_modify(|entry| {
            if preferred && !entry.1 {
                *entry = (r.direction(), true);
            }
        }).or_insert((r.direction(), preferred));
    }

    if log_enabled!(Level::Trace) {
        groups.iter().for_each(print);
    }

    let count = records.len();
    let kept  = records.into_iter().zip(keys).filter(|(r, key)| {
        groups.get(key).map(|(dir, _)| *dir == r.direction()).unwrap_or(true)
    }).map(|(r, _)| r).collect::<Vec<_>>();

    debug!("combined {} records into {} across {} flows", count, kept.len(), groups.len());

    kept
}

fn preferred(r: &Record) -> bool {
    let dns  = r.get(field::DNS_ID).is_some();
    let drop = |name: &str| r.number(name).map(|n| n > 0.0).unwrap_or(false);
    dns || drop(field::PKT_DROP_BYTES) || drop(field::PKT_DROP_PACKETS)
}

fn print<'a>((key, (dir, preferred)): (&'a Key, &'a (Direction, bool))) {
    trace!("{:?} {} <-> {}: {} (preferred {})", key.0, key.1, key.2, dir, preferred);
}
