//! Total orders over column values. Every comparator places absent values
//! after present ones and is antisymmetric, so descending order is obtained
//! by swapping the arguments.

pub use compare::{addresses, numbers, ports, protocols, strings};
pub use value::{comparator, Compare};

mod compare;
mod value;
