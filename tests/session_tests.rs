use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{Store, casaos};

#[test]
fn test_missing_database_exits_with_one() {
    let store = Store::new();
    std::fs::remove_file(&store.db).unwrap();

    store
        .cmd()
        .write_stdin("6\n")
        .assert()
        .code(1)
        .stderr(contains("Is CasaOS installed?"));

    assert!(!store.backup.exists());
}

#[test]
fn test_service_not_running_exits_with_one() {
    let store = Store::new();

    store
        .cmd_with("false")
        .write_stdin("6\n")
        .assert()
        .code(1)
        .stderr(contains("not found or not running"));
}

#[test]
fn test_backup_is_taken_and_exit_is_clean() {
    let store = Store::new();
    store.seed("alice", "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(contains("Backup created at"))
        .stdout(contains("CasaOS User Management"))
        .stdout(contains("Exiting..."));

    assert_eq!(
        std::fs::read(&store.db).unwrap(),
        std::fs::read(&store.backup).unwrap()
    );
}

#[test]
fn test_end_of_input_is_a_clean_exit() {
    let store = Store::new();
    store.cmd().write_stdin("").assert().success();
}

#[test]
fn test_list_empty_store() {
    let store = Store::new();

    store
        .cmd()
        .write_stdin("1\n6\n")
        .assert()
        .success()
        .stdout(contains("No users found."));
}

#[test]
fn test_add_then_list() {
    let store = Store::new();

    store
        .cmd()
        .write_stdin("3\nalice\nsecret1\n1\n6\n")
        .assert()
        .success()
        .stdout(contains("User 'alice' added successfully"))
        .stdout(contains("Users in the database:"))
        .stdout(contains("alice").and(contains("admin")));

    let users = store.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].0, 1);
    assert_eq!(users[0].1, "alice");
    // md5("secret1")
    assert_eq!(users[0].2, "e52d98c459819a11775936d8dfbb7929");
    assert_eq!(users[0].3, "admin");
}

#[test]
fn test_duplicate_username_is_rejected() {
    let store = Store::new();
    store.seed("alice", "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("3\nalice\nother\n6\n")
        .assert()
        .success()
        .stderr(contains("A user with the username 'alice' already exists."));

    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_edit_and_remove_unknown_id() {
    let store = Store::new();
    store.seed("alice", "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("2\n42\nsecret2\n4\n42\n6\n")
        .assert()
        .success()
        .stderr(contains("User ID 42 not found."));

    assert_eq!(store.users()[0].2, "e54cfb3714f76cedd4b27889e1f6a174");
}

#[test]
fn test_edit_then_remove() {
    let store = Store::new();
    store.seed("alice", "e52d98c459819a11775936d8dfbb7929");

    store
        .cmd()
        .write_stdin("2\n1\nsecret2\n")
        .assert()
        .success()
        .stdout(contains("Password updated successfully."));
    assert_eq!(store.users()[0].2, "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("4\n1\n1\n6\n")
        .assert()
        .success()
        .stdout(contains("User removed successfully."))
        .stdout(contains("No users found."));
    assert!(store.users().is_empty());
}

#[test]
fn test_invalid_option_redisplays_menu() {
    let store = Store::new();

    store
        .cmd()
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stderr(contains("Invalid option. Please try again."));
}

#[test]
fn test_non_utf8_choice_is_an_invalid_option() {
    let store = Store::new();

    let output = store
        .cmd()
        .write_stdin(&b"\xff\xfe\n1\n6\n"[..])
        .output()
        .expect("run casaos-users");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid option. Please try again."));
    assert!(!stderr.contains("I/O error"));
    // initial menu, after the rejected line, after the listing
    assert_eq!(stdout.matches("CasaOS User Management").count(), 3);
    assert!(stdout.contains("No users found."));
    assert!(stdout.contains("Exiting..."));
}

#[test]
fn test_reset_declined_keeps_database() {
    let store = Store::new();
    store.seed("alice", "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("5\nno\n6\n")
        .assert()
        .success()
        .stdout(contains("Database reset canceled."));

    assert!(store.db.exists());
    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_reset_confirmed_deletes_database() {
    let store = Store::new();
    store.seed("alice", "e54cfb3714f76cedd4b27889e1f6a174");

    store
        .cmd()
        .write_stdin("5\nyes\n6\n")
        .assert()
        .success()
        .stdout(contains("Database reset successfully."))
        .stdout(contains("CasaOS service restarted."));

    assert!(!store.db.exists());
    assert!(store.backup.exists());
}

#[test]
fn test_failing_service_calls_are_warnings() {
    let store = Store::new();
    // `ls status <unit>` finds both files, `ls stop <unit>` does not:
    // the status query passes and every state change fails.
    let workdir = store.dir.path().join("svc");
    std::fs::create_dir_all(&workdir).unwrap();
    std::fs::write(workdir.join("status"), "").unwrap();
    std::fs::write(workdir.join("casaos-user-service.service"), "").unwrap();

    store
        .cmd_with("ls")
        .current_dir(&workdir)
        .write_stdin("3\nbob\npw\n6\n")
        .assert()
        .success()
        .stdout(contains("Could not stop"))
        .stdout(contains("Could not start"))
        .stdout(contains("User 'bob' added successfully"));

    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_config_print_shows_overrides() {
    casaos()
        .args(["--db", "/tmp/elsewhere.db", "--no-sudo", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database: /tmp/elsewhere.db"))
        .stdout(contains("service: casaos-user-service.service"))
        .stdout(contains("use_sudo: false"));
}

#[test]
fn test_config_file_is_loaded() {
    let store = Store::new();
    let cfg = store.dir.path().join("casaos-users.yaml");
    std::fs::write(&cfg, "service: custom-user.service\n").unwrap();

    casaos()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("service: custom-user.service"))
        .stdout(contains("database: /var/lib/casaos/db/user.db"));
}
