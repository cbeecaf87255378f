pub mod d400_main_panel;
pub mod d401_daily_entries;

pub use d400_main_panel::ui::MainPanelDashboard;
pub use d401_daily_entries::ui::DailyEntriesDashboard;
