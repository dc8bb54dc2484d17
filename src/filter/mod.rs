pub use filter::{Filter, FilterOption, FilterValue, Filters};
pub use kind::FilterKind;

mod complete;
mod filter;
mod kind;
mod validate;
