use log::debug;
use crate::Result;
use super::{Raw, Record};

/// Assigns process-local record keys. Keys are never reused by the same
/// `Ingest` instance.
#[derive(Debug, Default)]
pub struct Ingest {
    next: u64,
}

impl Ingest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, batch: Vec<Raw>) -> Vec<Record> {
        let rs = batch.into_iter().map(|raw| {
            let key = self.next;
            self.next += 1;
            Record::new(key, raw)
        }).collect::<Vec<_>>();
        debug!("ingested {} records", rs.len());
        rs
    }

    pub fn parse(&mut self, json: &[u8]) -> Result<Vec<Record>> {
        let batch = serde_json::from_slice(json)?;
        Ok(self.ingest(batch))
    }
}
