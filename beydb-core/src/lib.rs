//! Core domain types for the Beyblade collection database.
//!
//! Shared by the persistence layer and both front ends: part and Beyblade
//! categories, roles, row types, and input parsing.

pub mod category;
pub mod error;
pub mod input;
pub mod role;
pub mod types;

pub use category::{BeybladeType, PartType};
pub use error::ParseError;
pub use input::{
    parse_battle_date, parse_flag, parse_id, parse_optional_id, parse_weight, require,
};
pub use role::Role;
pub use types::*;
