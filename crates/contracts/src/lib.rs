//! DTOs shared between the dashboard (wasm) and the companion server.
//!
//! Field names on the wire follow the remote warehouse API, which mixes
//! camelCase with a few irregular spellings (`rfiD_Operador`, `noEPCs`);
//! the Rust side is always snake_case.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
