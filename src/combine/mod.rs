pub use combine::combine;
pub use dns::dns_latency;

mod combine;
mod dns;
