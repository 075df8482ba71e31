//! SQLite persistence layer for the Beyblade database.
//!
//! Provides schema creation, the write procedures, read queries, and the
//! credential check, backed by SQLite (via rusqlite with bundled feature).

pub mod auth;
pub mod operations;
pub mod queries;
pub mod schema;

pub use auth::{admin_flag, authenticate, canonical_username};
pub use operations::{
    OperationError, add_user_beyblade, find_user_id, insert_beyblade, insert_part, record_battle,
    register_user,
};
pub use queries::{
    BattleFilter, battle_locations, battles, beyblade_name, beyblade_parts, find_part,
    heaviest_beyblade_for_type, leaderboard, list_beyblades, list_parts, list_users,
    tournament_names, user_beyblades,
};
pub use schema::{OpenFailure, SchemaError, open_database, open_memory};
