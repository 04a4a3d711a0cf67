//! End-to-end tests of the `assistant` binary
mod common;

use std::fs;

use common::{assistant, run};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_note_lifecycle() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["note", "create", "Groceries", "--content", "milk, eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created note #1: Groceries"));

    run(&dir, &["note", "create", "Ideas"]);

    assistant(&dir)
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").and(predicate::str::contains("Ideas")));

    assistant(&dir)
        .args(["note", "edit", "1", "--title", "Shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated note #1: Shopping"));

    assistant(&dir)
        .args(["note", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("milk, eggs"));

    assistant(&dir)
        .args(["note", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted note #1"));

    assistant(&dir)
        .args(["note", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 1"));

    assert!(dir.path().join("data").join("notes.json").exists());
}

#[test]
fn test_note_blank_title_rejected() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["note", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title cannot be empty"));

    assert!(!dir.path().join("data").join("notes.json").exists());
}

#[test]
fn test_task_priority_fallback_and_edit_rejection() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["task", "create", "Call", "--priority", "Urgent", "--due", "01-02-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: defaults used for"))
        .stdout(predicate::str::contains("priority"));

    assistant(&dir)
        .args(["task", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority:    Medium"));

    run(&dir, &["task", "edit", "1", "--priority", "High"]);

    assistant(&dir)
        .args(["task", "edit", "1", "--priority", "Urgent", "--title", "Call back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task #1: Call back"))
        .stdout(predicate::str::contains("Not changed"));

    assistant(&dir)
        .args(["task", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority:    High"));
}

#[test]
fn test_task_invalid_date_rejected() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["task", "create", "Pay", "--due", "31-04-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_task_done_and_filter() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["task", "create", "Pay rent", "--priority", "High", "--due", "01-02-2024"]);
    run(&dir, &["task", "create", "Call mum", "--priority", "Low", "--due", "03-02-2024"]);

    assistant(&dir)
        .args(["task", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as done"));

    assistant(&dir)
        .args(["task", "filter", "--status", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Call mum").and(predicate::str::contains("Pay rent").not()));

    assistant(&dir)
        .args(["task", "filter", "--due", "01-02-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"));

    assistant(&dir)
        .args(["task", "done", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: 9"));
}

#[test]
fn test_task_filter_requires_one_criterion() {
    let dir = TempDir::new().unwrap();

    assistant(&dir).args(["task", "filter"]).assert().failure();
    assistant(&dir)
        .args(["task", "filter", "--status", "done", "--priority", "High"])
        .assert()
        .failure();
}

#[test]
fn test_contact_search() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["contact", "create", "Ada Lovelace", "--phone", "555-0100"]);
    run(&dir, &["contact", "create", "Bob", "--phone", "555-0199"]);

    assistant(&dir)
        .args(["contact", "search", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace").and(predicate::str::contains("Bob").not()));

    assistant(&dir)
        .args(["contact", "search", "0199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn test_finance_report_and_balance() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["finance", "create", "100", "Salary", "--date", "05-01-2024"]);
    run(&dir, &["finance", "create", "-40", "Food", "--date", "10-01-2024"]);
    run(&dir, &["finance", "create", "20", "Gift", "--date", "01-02-2024"]);

    assistant(&dir)
        .args(["finance", "report", "01-01-2024", "31-01-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"))
        .stdout(predicate::str::contains("-40.00"))
        .stdout(predicate::str::contains("60.00"));

    assistant(&dir)
        .args(["finance", "report", "01-06-2024", "30-06-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No finance records from"));

    assistant(&dir)
        .args(["finance", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 80.00"));
}

#[test]
fn test_finance_edit_negative_amount() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["finance", "create", "10", "Misc", "--date", "05-01-2024"]);

    assistant(&dir)
        .args(["finance", "edit", "1", "--amount", "-12.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-12.50"));
}

#[test]
fn test_csv_export_then_import() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("contacts.csv");
    let csv_arg = csv.to_str().unwrap();

    assistant(&dir)
        .args(["contact", "export", csv_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts to export."));
    assert!(!csv.exists());

    run(&dir, &["contact", "create", "Ada", "--email", "ada@example.org"]);
    assistant(&dir)
        .args(["contact", "export", csv_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 contacts"));

    let other = TempDir::new().unwrap();
    assistant(&other)
        .args(["contact", "import", csv_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 contacts"));

    assert_eq!(
        fs::read_to_string(dir.path().join("data").join("contacts.json")).unwrap(),
        fs::read_to_string(other.path().join("data").join("contacts.json")).unwrap()
    );
}

#[test]
fn test_bad_csv_import_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("finance.csv");
    fs::write(
        &csv,
        "id,amount,category,date,description\n1,ten,Misc,05-01-2024,\n",
    )
    .unwrap();

    assistant(&dir)
        .args(["finance", "import", csv.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2, column 'amount'"));

    assert!(!dir.path().join("data").join("finance.json").exists());
}

#[test]
fn test_corrupt_store_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("tasks.json"), "not json").unwrap();

    assistant(&dir)
        .args(["task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));

    assistant(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("CORRUPT"));
}

#[test]
fn test_calculator() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["calc", "2 + 2"])
        .assert()
        .success()
        .stdout("4\n");

    assistant(&dir)
        .args(["calc", "7", "/", "2"])
        .assert()
        .success()
        .stdout("3.5\n");

    assistant(&dir)
        .args(["calc", "10 / 0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));

    assistant(&dir)
        .args(["calc", "2 + os.system('x')"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));
}

#[test]
fn test_audit_log_records_changes() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["note", "create", "Draft"]);
    run(&dir, &["note", "edit", "1", "--title", "Final"]);
    run(&dir, &["note", "delete", "1"]);

    assistant(&dir)
        .args(["audit", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Note #1"))
        .stdout(predicate::str::contains("DELETE Note #1"))
        .stdout(predicate::str::contains("CREATE").not());
}

#[test]
fn test_audit_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"audit_enabled": false, "list_limit": 1}"#,
    )
    .unwrap();

    run(&dir, &["note", "create", "First"]);
    run(&dir, &["note", "create", "Second"]);
    assert!(!dir.path().join("audit.log").exists());

    assistant(&dir)
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First").and(predicate::str::contains("Second").not()));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    assistant(&dir)
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit enabled:   true"));

    assert!(dir.path().join("config.json").exists());
}
