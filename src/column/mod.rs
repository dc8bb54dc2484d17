pub use column::Column;
pub use compile::{compile, Getter};
pub use expr::{parse, Expr, Func};
pub use registry::Registry;
pub use sort::sort;

mod column;
mod compile;
mod expr;
mod registry;
mod sort;

#[cfg(test)]
mod test;
