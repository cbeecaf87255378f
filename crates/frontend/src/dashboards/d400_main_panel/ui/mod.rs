mod dashboard;

pub use dashboard::MainPanelDashboard;
