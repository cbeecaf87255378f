mod dashboard;

pub use dashboard::DailyEntriesDashboard;
