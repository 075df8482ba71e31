use super::*;
use beydb_db::{open_memory, register_user};

fn add_user(conn: &Connection, username: &str, password: &str, is_admin: bool) {
    register_user(
        conn,
        &NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
            is_admin,
        },
    )
    .unwrap();
}

fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

fn output(c: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(c.into_output()).unwrap()
}

#[test]
fn admin_logs_in() {
    let conn = open_memory().unwrap();
    add_user(&conn, "tsubasa", "eagle", true);

    let mut c = console("TSUBASA\neagle\n");
    let session = login(&conn, Role::Admin, &mut c).unwrap();
    assert_eq!(session.username, "tsubasa");
    assert_eq!(session.role, Role::Admin);
    assert!(session.permissions.grant_admin);

    let out = output(c);
    assert!(out.contains("BeyAdmin Login"));
    assert!(out.contains("USERNAME: PASSWORD: "));
}

#[test]
fn client_cannot_use_admin_login() {
    let conn = open_memory().unwrap();
    add_user(&conn, "gingka", "pegasus", false);
    add_user(&conn, "ryuga", "ldrago", true);

    let mut c = console("gingka\npegasus\nryuga\nldrago\n");
    let session = login(&conn, Role::Admin, &mut c).unwrap();
    assert_eq!(session.username, "ryuga");
    assert!(output(c).contains("It appears that you are not a BeyAdmin. Please try again!"));
}

#[test]
fn unknown_user_is_rejected_as_wrong_role() {
    let conn = open_memory().unwrap();
    let mut c = console("nobody\nx\n");
    assert!(matches!(
        login(&conn, Role::Client, &mut c),
        Err(CliError::EndOfInput)
    ));
    assert!(output(c).contains("It appears that you are not a BeyClient."));
}

#[test]
fn wrong_password_reprompts() {
    let conn = open_memory().unwrap();
    add_user(&conn, "kenta", "sagittario", false);

    let mut c = console("kenta\nSAGITTARIO\nkenta\nsagittario\n");
    let session = login(&conn, Role::Client, &mut c).unwrap();
    assert_eq!(session.role, Role::Client);
    assert!(!session.permissions.manage_catalog);
    assert!(output(c).contains("Username or password is incorrect. Please try again :)"));
}

#[test]
fn end_of_input_during_login() {
    let conn = open_memory().unwrap();
    let mut c = console("someone\n");
    assert!(matches!(
        login(&conn, Role::Admin, &mut c),
        Err(CliError::EndOfInput)
    ));
}

#[test]
fn bootstrap_creates_first_admin() {
    let conn = open_memory().unwrap();
    assert!(!has_admin(&conn).unwrap());

    let mut c = console("doji\ndoji@darknebula.example\nsecret\n");
    assert!(bootstrap_admin(&conn, &mut c).unwrap());
    assert!(has_admin(&conn).unwrap());
    assert_eq!(beydb_db::admin_flag(&conn, "doji").unwrap(), Some(true));
    assert!(output(c).contains("Administrator 'doji' added successfully."));
}

#[test]
fn bootstrap_skips_when_admin_exists() {
    let conn = open_memory().unwrap();
    add_user(&conn, "hikaru", "aquario", true);

    // No input is read when an admin exists.
    let mut c = console("");
    assert!(!bootstrap_admin(&conn, &mut c).unwrap());
    assert_eq!(output(c), "");
}

#[test]
fn bootstrap_rejects_blank_username() {
    let conn = open_memory().unwrap();
    let mut c = console("   \nmail\npw\n");
    assert!(matches!(
        bootstrap_admin(&conn, &mut c),
        Err(CliError::Other(_))
    ));
    assert!(!has_admin(&conn).unwrap());
}

#[test]
fn bootstrap_rejects_empty_password() {
    let conn = open_memory().unwrap();
    let mut c = console("doji\nmail\n\n");
    match bootstrap_admin(&conn, &mut c) {
        Err(CliError::Other(msg)) => assert_eq!(msg, "Password cannot be empty"),
        other => panic!("expected a rejection, got {:?}", other.map(|_| ())),
    }
    assert!(!has_admin(&conn).unwrap());
}
