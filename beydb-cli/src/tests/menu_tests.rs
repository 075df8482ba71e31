use super::*;
use beydb_core::{BeybladeDraft, BeybladeType, NewUser, Part, PartSlots, PartType, Role};
use beydb_db::{
    add_user_beyblade, admin_flag, find_part, insert_part, leaderboard, list_beyblades,
    list_parts, open_memory, register_user, user_beyblades,
};
use rusqlite::Connection;

fn setup(username: &str, is_admin: bool) -> Connection {
    let conn = open_memory().unwrap();
    register_user(
        &conn,
        &NewUser {
            username: username.to_string(),
            email: String::new(),
            password: "pw".to_string(),
            is_admin,
        },
    )
    .unwrap();
    conn
}

/// Parts 1 to 5, one per slot.
fn seed_parts(conn: &Connection) {
    for (i, &part_type) in PartType::all().iter().enumerate() {
        insert_part(
            conn,
            &Part {
                part_id: i as i64 + 1,
                part_type,
                weight: 3.0,
                description: String::new(),
            },
        )
        .unwrap();
    }
}

/// Run the menu over scripted input and return everything printed.
fn script(conn: &Connection, role: Role, username: &str, input: &str) -> String {
    let session = Session::new(conn, role, username);
    let mut console = Console::new(input.as_bytes(), Vec::new());
    run(&session, &mut console).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn admin_menu_is_listed_by_section() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "q\n");
    assert!(out.contains("What would you like to do?"));
    assert!(out.contains("* Add Entities:"));
    assert!(out.contains("  (a) Add a part to the database"));
    assert!(out.contains("  (q) quit"));
    assert!(out.contains(Role::Admin.farewell()));
}

#[test]
fn invalid_option_reprompts() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "zz\nQ\n");
    assert!(out.contains("Invalid option 'zz'"));
    assert_eq!(out.matches("Enter an option: ").count(), 2);
}

#[test]
fn end_of_input_quits() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "");
    assert!(out.contains(Role::Admin.farewell()));
}

#[test]
fn end_of_input_inside_an_action_quits() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "a\n42\n");
    assert!(out.contains("ADDING A NEW PART."));
    assert!(out.contains(Role::Admin.farewell()));
    assert!(list_parts(&conn).unwrap().is_empty());
}

#[test]
fn add_part_then_view_it() {
    let conn = setup("madoka", true);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "a\n7\nbolt\n2.5\nPegasus\nj\n7\nq\n",
    );
    assert!(out.contains("Added new part: 7 successfully."));
    assert!(out.contains("Face Bolt"));
    assert!(out.contains("Pegasus"));

    let part = find_part(&conn, 7).unwrap().unwrap();
    assert_eq!(part.weight, 2.5);
}

#[test]
fn bad_weight_writes_nothing() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "a\n8\ntrack\nheavy\nD125\nq\n");
    assert!(out.contains("Invalid weight. Please enter a numeric value."));
    assert!(!out.contains("Added new part"));
    assert!(list_parts(&conn).unwrap().is_empty());
}

#[test]
fn duplicate_part_is_reported_and_menu_continues() {
    let conn = setup("madoka", true);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "a\n1\ntip\n1\nflat\na\n1\ntip\n1\nflat\nq\n",
    );
    assert_eq!(out.matches("Added new part: 1 successfully.").count(), 1);
    assert!(out.contains("Error:"));
    assert!(out.contains(Role::Admin.farewell()));
}

#[test]
fn bad_battle_date_is_rejected() {
    let conn = setup("madoka", true);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "d\nBattle Bladers\nyesterday\nMetal Bey City\n1\n2\n1\n2\n\nq\n",
    );
    assert!(out.contains("Error: invalid date: 'yesterday'"));
    assert!(!out.contains("New battle result added successfully."));
}

#[test]
fn heaviest_reprompts_for_type() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "k\nspinny\nattack\nq\n");
    assert!(out.contains("Error: Invalid Beyblade type."));
    assert!(out.contains("No heaviest Beyblade found for type 'Attack'."));
}

#[test]
fn client_menu_has_no_admin_actions() {
    let conn = setup("gingka", false);
    let out = script(&conn, Role::Client, "gingka", "p\ng\nq\n");
    assert!(!out.contains("Add a part to the database"));
    assert_eq!(out.matches("Invalid option").count(), 2);
    assert!(out.contains(Role::Client.farewell()));
}

#[test]
fn client_creates_plain_account() {
    let conn = setup("gingka", false);
    let out = script(&conn, Role::Client, "gingka", "a\nkenta\nk@example.com\npw\nq\n");
    assert!(!out.contains("Is this user an admin?"));
    assert!(out.contains("User 'kenta' added successfully."));
    assert_eq!(beydb_db::admin_flag(&conn, "kenta").unwrap(), Some(false));
}

#[test]
fn client_sees_own_empty_collection() {
    let conn = setup("gingka", false);
    let out = script(&conn, Role::Client, "gingka", "d\nq\n");
    assert!(out.contains("No Beyblades found for user: gingka"));
}

#[test]
fn admin_adds_catalog_beyblade() {
    let conn = setup("madoka", true);
    seed_parts(&conn);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "b\n10\nStorm Pegasus\nattack\nTrue\nMetal Fusion\n1\n2\n3\n4\n5\nq\n",
    );
    assert!(out.contains("Added new Beyblade: Storm Pegasus"));

    let all = list_beyblades(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].beyblade_id, 10);
    assert_eq!(all[0].beyblade_type, BeybladeType::Attack);
    assert!(all[0].is_custom);
    assert_eq!(all[0].parts.ids(), [1, 2, 3, 4, 5]);
}

#[test]
fn beyblade_with_unknown_part_is_reported() {
    let conn = setup("madoka", true);
    seed_parts(&conn);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "b\n10\nGhost\nattack\nno\nMetal Fury\n1\n2\n3\n4\n99\nq\n",
    );
    assert!(!out.contains("Added new Beyblade"));
    assert!(list_beyblades(&conn).unwrap().is_empty());
}

#[test]
fn admin_adds_to_own_collection() {
    let conn = setup("madoka", true);
    seed_parts(&conn);
    let out = script(
        &conn,
        Role::Admin,
        "madoka",
        "c\nMine\ndefense\nMetal Fury\n1\n2\n3\n4\n5\nLike New\nq\n",
    );
    assert!(out.contains("Added new Beyblade: Mine for user madoka"));

    let owned = user_beyblades(&conn, "madoka").unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "Mine");
    assert!(owned[0].is_custom);
}

#[test]
fn client_adds_to_own_collection() {
    let conn = setup("gingka", false);
    seed_parts(&conn);
    let out = script(
        &conn,
        Role::Client,
        "gingka",
        "b\nGalaxy\nattack\nMetal Masters\n1\n2\n3\n4\n5\nWorn\nd\nq\n",
    );
    assert!(out.contains("Added new Beyblade: Galaxy for user gingka"));
    assert!(out.contains("Worn"));
    assert_eq!(user_beyblades(&conn, "gingka").unwrap().len(), 1);
}

#[test]
fn recorded_win_shows_on_leaderboard() {
    let conn = setup("madoka", true);
    seed_parts(&conn);
    let kenta = register_user(
        &conn,
        &NewUser {
            username: "kenta".to_string(),
            email: String::new(),
            password: "pw".to_string(),
            is_admin: false,
        },
    )
    .unwrap();
    let draft = |name: &str| BeybladeDraft {
        name: name.to_string(),
        beyblade_type: BeybladeType::Defense,
        series: String::new(),
        parts: PartSlots::from_ids([1, 2, 3, 4, 5]),
    };
    let mine = add_user_beyblade(&conn, 1, &draft("Mine"), "Good").unwrap();
    let theirs = add_user_beyblade(&conn, kenta, &draft("Sagittario"), "Good").unwrap();

    let input = format!(
        "d\nCup\n2011-04-03\nBey Park\n1\n{kenta}\n{mine}\n{theirs}\n{mine}\ns\nr\nkenta\nq\n"
    );
    let out = script(&conn, Role::Admin, "madoka", &input);
    assert!(out.contains("New battle result added successfully."));
    assert!(out.contains("Beyblade Leaderboard (Most Wins):"));
    assert!(out.contains("2011-04-03 00:00:00"));

    let board = leaderboard(&conn).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Mine");
    assert_eq!(board[0].wins, 1);
}

#[test]
fn admin_creates_admin_account() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "e\nryo\nryo@example.com\npw\nyes\nq\n");
    assert!(out.contains("Is this user an admin?"));
    assert!(out.contains("User 'ryo' added successfully."));
    assert_eq!(admin_flag(&conn, "ryo").unwrap(), Some(true));
}

#[test]
fn duplicate_username_is_reported() {
    let conn = setup("madoka", true);
    let out = script(&conn, Role::Admin, "madoka", "e\nMADOKA\nm@example.com\npw\nno\nq\n");
    assert!(!out.contains("added successfully"));
    if cfg!(feature = "verbose-errors") {
        assert!(out.contains("Error: Username 'MADOKA' is already taken"));
    } else {
        assert!(out.contains(crate::prompt::GENERIC_ERROR));
    }
    assert_eq!(beydb_db::list_users(&conn).unwrap().len(), 1);
    assert!(out.contains(Role::Admin.farewell()));
}
