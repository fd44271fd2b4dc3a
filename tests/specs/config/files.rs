//! Options loaded from TOML files.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn empty_file_loads_defaults() {
    let (_dir, path) = write_config("rwlock.toml", "");
    assert_eq!(Options::load(&path).unwrap(), default_options(""));
}

#[test]
fn app_config_section_is_loaded_and_normalized() {
    let (_dir, path) = write_config(
        "app.toml",
        r#"
[database]
url = "postgres://localhost/app"

[rwlock]
lock_ttl = "50ms"
retry_count = 0
app_id = "svc-a"
mode = "prefer_reader"
"#,
    );

    let options = Options::load(&path).unwrap();

    assert_eq!(
        options,
        Options {
            lock_ttl: Duration::from_millis(100),
            mode: Mode::PreferReader,
            ..default_options("svc-a")
        }
    );
}

#[test]
fn typo_in_key_is_an_error() {
    let (_dir, path) = write_config("rwlock.toml", "retry_cnt = 3\n");

    let err = Options::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got: {:?}", err);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Options::load(dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }), "got: {:?}", err);
}

#[test]
fn option_keys_outside_section_are_an_error() {
    let (_dir, path) = write_config(
        "app.toml",
        r#"
lock_ttl = "5s"

[rwlock]
app_id = "svc-a"
"#,
    );

    let err = Options::load(&path).unwrap_err();
    assert!(
        matches!(&err, ConfigError::KeysOutsideSection { keys } if keys == &["lock_ttl"]),
        "got: {:?}",
        err
    );
}
