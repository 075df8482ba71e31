//! Row types for the Beyblade database.
//!
//! These mirror the persistent schema: parts, assembled Beyblades, collection
//! entries, users, and battles, plus the joined shapes the reports return.

use crate::{BeybladeType, PartType};

// ── Parts ───────────────────────────────────────────────────────────────────

/// A single component. Parts are never updated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub part_id: i64,
    pub part_type: PartType,
    /// Weight in grams.
    pub weight: f64,
    pub description: String,
}

/// The five part references of an assembled Beyblade, one per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSlots {
    pub face_bolt_id: i64,
    pub energy_ring_id: i64,
    pub fusion_wheel_id: i64,
    pub spin_track_id: i64,
    pub performance_tip_id: i64,
}

impl PartSlots {
    /// Use the same part for every slot.
    pub fn uniform(part_id: i64) -> Self {
        Self {
            face_bolt_id: part_id,
            energy_ring_id: part_id,
            fusion_wheel_id: part_id,
            spin_track_id: part_id,
            performance_tip_id: part_id,
        }
    }

    /// Part ids in slot order (same order as `PartType::all()`).
    pub fn ids(&self) -> [i64; 5] {
        [
            self.face_bolt_id,
            self.energy_ring_id,
            self.fusion_wheel_id,
            self.spin_track_id,
            self.performance_tip_id,
        ]
    }

    /// Build from ids in slot order.
    pub fn from_ids(ids: [i64; 5]) -> Self {
        Self {
            face_bolt_id: ids[0],
            energy_ring_id: ids[1],
            fusion_wheel_id: ids[2],
            spin_track_id: ids[3],
            performance_tip_id: ids[4],
        }
    }
}

// ── Beyblades ───────────────────────────────────────────────────────────────

/// An assembled Beyblade.
#[derive(Debug, Clone, PartialEq)]
pub struct Beyblade {
    pub beyblade_id: i64,
    pub name: String,
    pub beyblade_type: BeybladeType,
    pub is_custom: bool,
    pub series: String,
    pub parts: PartSlots,
}

/// A Beyblade a user is assembling into their own collection.
/// The database assigns the id and marks it custom.
#[derive(Debug, Clone, PartialEq)]
pub struct BeybladeDraft {
    pub name: String,
    pub beyblade_type: BeybladeType,
    pub series: String,
    pub parts: PartSlots,
}

// ── Collection ──────────────────────────────────────────────────────────────

/// One owned instance of a Beyblade, as listed in a user's collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedBeyblade {
    /// Collection entry id ("Beyblade-Player ID").
    pub user_beyblade_id: i64,
    pub beyblade_id: i64,
    pub name: String,
    pub is_custom: bool,
    pub condition: Option<String>,
}

// ── Users ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub date_joined: String,
}

/// Registration request. The password is only ever stored hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

// ── Battles ─────────────────────────────────────────────────────────────────

/// A battle to record. Beyblade ids are collection entry ids, and
/// `winner_id` is one of them (or `None` for a draw).
#[derive(Debug, Clone, PartialEq)]
pub struct NewBattle {
    pub tournament_name: String,
    pub battle_date: String,
    pub location: String,
    pub player1_id: i64,
    pub player2_id: i64,
    pub player1_beyblade_id: i64,
    pub player2_beyblade_id: i64,
    pub winner_id: Option<i64>,
}

/// A battle joined with player usernames and Beyblade names.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleRow {
    pub battle_id: i64,
    pub tournament_name: String,
    pub battle_date: String,
    pub location: String,
    pub player1_username: String,
    pub player2_username: String,
    pub player1_beyblade_name: String,
    pub player2_beyblade_name: String,
    pub player1_beyblade_id: i64,
    pub player2_beyblade_id: i64,
    pub winner_id: Option<i64>,
}

/// One leaderboard line: a Beyblade and how many battles its owners won with it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub beyblade_id: i64,
    pub name: String,
    pub beyblade_type: BeybladeType,
    pub wins: i64,
}
