pub mod list;
pub mod review;

pub use list::PalletManagementPage;
pub use review::PendingEntriesPage;
