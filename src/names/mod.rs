//! Static protocol and service name tables, shared read-only by the
//! comparators and the filter validators.

pub use protocol::{protocol_name, protocol_number, protocols};
pub use service::{format_port, service_name, service_port, services};

mod protocol;
mod service;

#[cfg(test)]
mod test;
