pub mod dto;

pub use dto::{DateRangeQuery, EntryReview, PendingEntry, StatusUpdateRequest, TagProductInfo};
