pub use direction::Direction;
pub use ingest::Ingest;
pub use key::{Addr, Key};
pub use record::{Labels, Raw, Record};

pub mod field;

mod direction;
mod ingest;
mod key;
mod record;

#[cfg(test)]
mod test;
