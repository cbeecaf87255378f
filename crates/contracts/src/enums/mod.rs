pub mod pallet_status;

pub use pallet_status::PalletStatus;
