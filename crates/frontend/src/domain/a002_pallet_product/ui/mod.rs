pub mod live;

pub use live::LiveEntriesPage;
