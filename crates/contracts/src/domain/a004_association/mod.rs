pub mod dto;

pub use dto::{PalletAssociationRequest, ReaderCommandResponse, RecentAssociation, PALLET_EPC_PREFIX};
