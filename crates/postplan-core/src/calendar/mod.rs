//! Calendar range calculation and day bucketing.

mod bucket;
mod range;

pub use bucket::{DayBucket, bucket_by_day};
pub use range::{Direction, ViewMode, advance, days_in_view};
