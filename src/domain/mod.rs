//! Domain layer - Entry model, line codec and day partitioning

pub mod codec;
pub mod day;
pub mod entry;

pub use codec::{decode, encode, encode_pretty};
pub use day::{date_of_timestamp, format_date, parse_date, DayKey};
pub use entry::Entry;
