pub use columns::columns;
pub use filter::filter;
pub use show::show;

mod columns;
mod filter;
mod show;
