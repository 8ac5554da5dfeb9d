use postmock_core::settings::{Settings, SettingsStore, DEFAULT_CAPTION, DEFAULT_HASHTAGS};

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    let settings = store.load_or_default();
    assert_eq!(settings.caption, DEFAULT_CAPTION);
    assert_eq!(settings.hashtags, DEFAULT_HASHTAGS);
}

#[test]
fn test_save_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let store = SettingsStore::new(&path);
    let settings = Settings {
        caption: "X".into(),
        hashtags: "#one #two".into(),
    };
    store.save(&settings).unwrap();

    // A fresh store at the same path stands in for a reload.
    let reloaded = SettingsStore::new(&path).load_or_default();
    assert_eq!(reloaded, settings);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.toml");

    let store = SettingsStore::new(&path);
    store.save(&Settings::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "caption = [not toml").unwrap();

    let settings = SettingsStore::new(&path).load_or_default();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_fields_fall_back_individually() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "caption = \"just a caption\"\n").unwrap();

    let settings = SettingsStore::new(&path).load_or_default();
    assert_eq!(settings.caption, "just a caption");
    assert_eq!(settings.hashtags, DEFAULT_HASHTAGS);
}

#[test]
fn test_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let store = SettingsStore::new(&path);

    for caption in ["first", "second", "third"] {
        let mut settings = Settings::default();
        settings.caption = caption.into();
        store.save(&settings).unwrap();
    }

    assert_eq!(store.load_or_default().caption, "third");
}
