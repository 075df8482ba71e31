use super::*;

fn temp_settings() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beydb").join("settings.toml");
    (dir, path)
}

#[test]
fn cli_override_wins() {
    let (_dir, settings) = temp_settings();
    save_database_path_to(&settings, Some(Path::new("/saved.sqlite"))).unwrap();
    let resolved = resolve_database_path_with(
        Some(PathBuf::from("/flag.sqlite")),
        Some(PathBuf::from("/env.sqlite")),
        &settings,
    );
    assert_eq!(resolved, PathBuf::from("/flag.sqlite"));
}

#[test]
fn env_beats_settings_file() {
    let (_dir, settings) = temp_settings();
    save_database_path_to(&settings, Some(Path::new("/saved.sqlite"))).unwrap();
    let resolved =
        resolve_database_path_with(None, Some(PathBuf::from("/env.sqlite")), &settings);
    assert_eq!(resolved, PathBuf::from("/env.sqlite"));
}

#[test]
fn empty_env_is_ignored() {
    let (_dir, settings) = temp_settings();
    save_database_path_to(&settings, Some(Path::new("/saved.sqlite"))).unwrap();
    let resolved = resolve_database_path_with(None, Some(PathBuf::new()), &settings);
    assert_eq!(resolved, PathBuf::from("/saved.sqlite"));
}

#[test]
fn falls_back_to_default() {
    let (_dir, settings) = temp_settings();
    let resolved = resolve_database_path_with(None, None, &settings);
    assert_eq!(resolved, default_database_path());
    assert!(resolved.ends_with("beydb/beydb.sqlite"));
}

#[test]
fn save_preserves_other_sections() {
    let (_dir, settings) = temp_settings();
    std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
    std::fs::write(&settings, "[display]\ncolor = false\n").unwrap();

    save_database_path_to(&settings, Some(Path::new("/data/bey.sqlite"))).unwrap();

    let contents = std::fs::read_to_string(&settings).unwrap();
    let doc: toml::Value = contents.parse().unwrap();
    assert_eq!(doc["display"]["color"].as_bool(), Some(false));
    assert_eq!(doc["database"]["path"].as_str(), Some("/data/bey.sqlite"));
    assert!(!settings.with_extension("toml.tmp").exists());
}

#[test]
fn clearing_removes_the_path() {
    let (_dir, settings) = temp_settings();
    save_database_path_to(&settings, Some(Path::new("/data/bey.sqlite"))).unwrap();
    save_database_path_to(&settings, None).unwrap();
    assert_eq!(load_database_path(&settings), None);
}

#[test]
fn malformed_settings_are_ignored() {
    let (_dir, settings) = temp_settings();
    std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
    std::fs::write(&settings, "database = [not toml").unwrap();
    assert_eq!(load_database_path(&settings), None);
}
