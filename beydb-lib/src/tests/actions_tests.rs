use super::*;
use std::collections::HashSet;

#[test]
fn keys_are_unique_per_role() {
    for role in [Role::Admin, Role::Client] {
        let mut seen = HashSet::new();
        for section in menu(role) {
            for e in section.entries {
                assert!(seen.insert(e.key), "duplicate key '{}' for {}", e.key, role);
            }
        }
    }
}

#[test]
fn admin_layout() {
    assert_eq!(lookup(Role::Admin, "a"), Some(Action::AddPart));
    assert_eq!(lookup(Role::Admin, "e"), Some(Action::AddUser));
    assert_eq!(lookup(Role::Admin, "g"), Some(Action::ViewUserBeyblades));
    assert_eq!(lookup(Role::Admin, "p"), Some(Action::ViewUsers));
    assert_eq!(lookup(Role::Admin, "r"), Some(Action::UserBattles));
    assert_eq!(lookup(Role::Admin, "s"), Some(Action::Leaderboard));
    assert_eq!(lookup(Role::Admin, "q"), Some(Action::Quit));
}

#[test]
fn client_layout_skips_g() {
    assert_eq!(lookup(Role::Client, "a"), Some(Action::AddUser));
    assert_eq!(lookup(Role::Client, "d"), Some(Action::ViewOwnBeyblades));
    assert_eq!(lookup(Role::Client, "f"), Some(Action::ViewPart));
    assert_eq!(lookup(Role::Client, "g"), None);
    assert_eq!(lookup(Role::Client, "l"), Some(Action::OwnBattles));
    assert_eq!(lookup(Role::Client, "o"), Some(Action::Leaderboard));
    assert_eq!(lookup(Role::Client, "p"), None);
}

#[test]
fn lookup_trims_and_ignores_case() {
    assert_eq!(lookup(Role::Admin, "  B \n"), Some(Action::AddBeyblade));
    assert_eq!(lookup(Role::Client, "Q"), Some(Action::Quit));
}

#[test]
fn lookup_rejects_junk() {
    assert_eq!(lookup(Role::Admin, ""), None);
    assert_eq!(lookup(Role::Admin, "ab"), None);
    assert_eq!(lookup(Role::Admin, "z"), None);
    assert_eq!(lookup(Role::Client, "quit"), None);
}

#[test]
fn quit_has_no_banner() {
    assert_eq!(Action::Quit.banner(), None);
    assert!(Action::Leaderboard.banner().is_some());
}
