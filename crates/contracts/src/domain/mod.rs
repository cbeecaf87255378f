pub mod a001_operator;
pub mod a002_pallet_product;
pub mod a003_pending_entry;
pub mod a004_association;
