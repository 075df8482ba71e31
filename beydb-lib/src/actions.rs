//! Menu catalog: the lettered actions each front end offers.
//!
//! Both binaries dispatch through [`Action`]; only the key layout and labels
//! differ per role.

use beydb_core::Role;

/// Everything an operator can pick from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddPart,
    AddBeyblade,
    AddToCollection,
    AddBattle,
    /// Admin: any role. Client: a non-admin account.
    AddUser,
    ViewBeyblades,
    /// Prompts for the username.
    ViewUserBeyblades,
    /// The logged-in user's collection.
    ViewOwnBeyblades,
    ViewParts,
    ViewBeybladeParts,
    ViewPart,
    HeaviestOfType,
    TournamentNames,
    TournamentBattles,
    BattleLocations,
    LocationBattles,
    ViewUsers,
    /// Prompts for the username.
    UserBattles,
    /// The logged-in user's battles.
    OwnBattles,
    Leaderboard,
    Quit,
}

impl Action {
    /// Banner printed before the action runs, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::AddPart => Some("ADDING A NEW PART."),
            Self::AddBeyblade => Some("ADDING A NEW BEYBLADE."),
            Self::AddToCollection => Some("ADDING A BEYBLADE TO YOUR ACCOUNT."),
            Self::AddBattle => Some("ADDING A NEW BATTLE RESULT."),
            Self::AddUser => Some("CREATING A NEW ACCOUNT."),
            Self::ViewBeyblades => Some("VIEWING ALL BEYBLADES."),
            Self::ViewUserBeyblades => Some("VIEWING A USER'S BEYBLADES."),
            Self::ViewOwnBeyblades => Some("VIEWING YOUR BEYBLADES."),
            Self::ViewParts => Some("VIEWING ALL BEYBLADE PARTS."),
            Self::ViewBeybladeParts => Some("VIEWING ALL PARTS FOR A BEYBLADE."),
            Self::ViewPart => Some("VIEWING INFORMATION ABOUT A PART."),
            Self::HeaviestOfType => Some("VIEWING THE HEAVIEST BEYBLADE FOR A TYPE."),
            Self::TournamentNames => Some("VIEWING ALL TOURNAMENT NAMES."),
            Self::TournamentBattles => Some("VIEWING RESULTS FOR TOURNAMENT."),
            Self::BattleLocations => Some("VIEWING ALL TOURNAMENT LOCATIONS."),
            Self::LocationBattles => Some("VIEWING BATTLE RESULTS FOR LOCATION."),
            Self::ViewUsers => Some("VIEWING CURRENT USERS."),
            Self::UserBattles => Some("VIEWING BATTLE RESULTS FOR A USER."),
            Self::OwnBattles => Some("VIEWING YOUR BATTLE RESULTS."),
            Self::Leaderboard => Some("VIEWING BEYBLADE BATTLE LEADERBOARD."),
            Self::Quit => None,
        }
    }
}

/// One lettered line of a menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub key: char,
    pub action: Action,
    pub label: &'static str,
}

/// A titled group of entries. The quit entry sits in an untitled section.
#[derive(Debug, Clone, Copy)]
pub struct MenuSection {
    pub title: Option<&'static str>,
    pub entries: &'static [MenuEntry],
}

const fn entry(key: char, action: Action, label: &'static str) -> MenuEntry {
    MenuEntry { key, action, label }
}

const QUIT: MenuSection = MenuSection {
    title: None,
    entries: &[entry('q', Action::Quit, "quit")],
};

const ADMIN_MENU: &[MenuSection] = &[
    MenuSection {
        title: Some("Add Entities"),
        entries: &[
            entry('a', Action::AddPart, "Add a part to the database"),
            entry('b', Action::AddBeyblade, "Add a new Beyblade to the database"),
            entry('c', Action::AddToCollection, "Add a Beyblade to your collection"),
            entry('d', Action::AddBattle, "Add a new battle result"),
            entry('e', Action::AddUser, "Add a new user"),
        ],
    },
    MenuSection {
        title: Some("View Beyblade Information"),
        entries: &[
            entry('f', Action::ViewBeyblades, "View all Beyblades"),
            entry('g', Action::ViewUserBeyblades, "View Beyblades from a user's collection"),
            entry('h', Action::ViewParts, "View all parts in the database"),
            entry('i', Action::ViewBeybladeParts, "View parts of a Beyblade"),
            entry('j', Action::ViewPart, "View part information"),
            entry('k', Action::HeaviestOfType, "View the heaviest Beyblade for a type"),
        ],
    },
    MenuSection {
        title: Some("View Battle Information"),
        entries: &[
            entry('l', Action::TournamentNames, "View all tournament names"),
            entry('m', Action::TournamentBattles, "View battle results for a tournament"),
            entry('n', Action::BattleLocations, "View all battle locations"),
            entry('o', Action::LocationBattles, "View battle results for a location"),
            entry('p', Action::ViewUsers, "View current users"),
            entry('r', Action::UserBattles, "View battle results for a user"),
            entry('s', Action::Leaderboard, "Print Beyblades leaderboard"),
        ],
    },
    QUIT,
];

const CLIENT_MENU: &[MenuSection] = &[
    MenuSection {
        title: None,
        entries: &[
            entry('a', Action::AddUser, "Create an account"),
            entry('b', Action::AddToCollection, "Add a Beyblade to your collection"),
        ],
    },
    MenuSection {
        title: Some("View Beyblade Information"),
        entries: &[
            entry('c', Action::ViewBeyblades, "View all Beyblades"),
            entry('d', Action::ViewOwnBeyblades, "View your Beyblades"),
            entry('e', Action::HeaviestOfType, "View the heaviest Beyblade for a type"),
        ],
    },
    MenuSection {
        title: Some("View Beyblade Part Information"),
        entries: &[
            entry('f', Action::ViewPart, "View information about a part"),
            entry('h', Action::ViewParts, "View all parts in the database"),
            entry('i', Action::ViewBeybladeParts, "View parts of a Beyblade"),
        ],
    },
    MenuSection {
        title: Some("View Battle Information"),
        entries: &[
            entry('j', Action::TournamentNames, "View all tournament names"),
            entry('k', Action::BattleLocations, "View all battle locations"),
            entry('l', Action::OwnBattles, "View your battle results"),
            entry('m', Action::TournamentBattles, "View battle results for a tournament"),
            entry('n', Action::LocationBattles, "View battle results for location"),
            entry('o', Action::Leaderboard, "View Beyblade Battles leaderboard"),
        ],
    },
    QUIT,
];

/// The menu shown to a role, in display order.
pub fn menu(role: Role) -> &'static [MenuSection] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Client => CLIENT_MENU,
    }
}

/// Resolve a typed menu choice. Input is trimmed and compared case-insensitively;
/// anything but a single listed letter yields `None`.
pub fn lookup(role: Role, input: &str) -> Option<Action> {
    let mut chars = input.trim().chars();
    let key = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    menu(role)
        .iter()
        .flat_map(|section| section.entries.iter())
        .find(|e| e.key == key)
        .map(|e| e.action)
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
