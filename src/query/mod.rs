pub use codec::{decode, encode, Match, Query, TimeRange};
pub use params::Params;

mod codec;
mod params;


pub const TIME_RANGE: &str = "timeRange";
pub const START_TIME: &str = "startTime";
pub const END_TIME:   &str = "endTime";
pub const LIMIT:      &str = "limit";
pub const MATCH:      &str = "match";
pub const SHOW_DUP:   &str = "showDup";

/// Query keys owned by the query itself; no column may use them as an id.
pub const RESERVED: &[&str] = &[TIME_RANGE, START_TIME, END_TIME, LIMIT, MATCH, SHOW_DUP];
