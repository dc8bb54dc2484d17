pub use error::{Error, Result};

pub mod args;
pub mod cmd;
pub mod column;
pub mod combine;
pub mod compare;
pub mod config;
pub mod filter;
pub mod flow;
pub mod names;
pub mod query;
pub mod value;

mod error;
