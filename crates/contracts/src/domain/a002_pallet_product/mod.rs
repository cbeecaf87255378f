pub mod dto;

pub use dto::{OperatorInfo, Product, ProductData, ASSIGNED_STATUS, UNASSIGNED_OPERATOR};
