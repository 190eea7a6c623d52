use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flowsight(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flowsight").unwrap();
    cmd.env("FLOW_SIGHT_DATA_DIR", data_dir.path())
        .env_remove("FLOW_SIGHT_LOG");
    cmd
}

fn seed(data_dir: &TempDir) {
    let data = data_dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("accounts.json"),
        r#"{"accounts": [{"id": "4f1c2b9e-0d7a-4e7c-9a51-3c2d1e0f9a11", "name": "Main", "balance": 500000}]}"#,
    )
    .unwrap();
    std::fs::write(
        data.join("income.json"),
        r#"{"sources": [{"id": "9b2d4c6e-1a3f-4b5d-8e7f-0a1b2c3d4e5f", "name": "Salary",
            "income_type": "monthly_fixed", "base_amount": 300000}]}"#,
    )
    .unwrap();
    std::fs::write(
        data.join("recurring_payments.json"),
        r#"{"payments": [{"id": "0c1d2e3f-4a5b-4c6d-9e8f-7a6b5c4d3e2f", "name": "Rent",
            "amount": 90000, "payment_day": 27, "start_year_month": "2024-01"}]}"#,
    )
    .unwrap();
}

#[test]
fn init_creates_stores() {
    let data_dir = TempDir::new().unwrap();

    flowsight(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("cards.json").exists());
}

#[test]
fn project_json_only_changes() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    let output = flowsight(&data_dir)
        .args(["project", "--months", "2", "--only-changes", "--format", "json"])
        .args(["--as-of", "2024-05-10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dates: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-05-25", "2024-05-27", "2024-06-25", "2024-06-27"]);
    assert_eq!(rows[3]["balance"], 500000 + 2 * (300000 - 90000));
    assert_eq!(rows[1]["details"][0]["description"], "固定支出: Rent");
}

#[test]
fn project_rejects_zero_months() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    flowsight(&data_dir)
        .args(["project", "--months", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("months must be at least 1"));
}

#[test]
fn project_csv_to_file() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);
    let out = data_dir.path().join("projection.csv");

    flowsight(&data_dir)
        .args(["project", "--months", "1", "--format", "csv", "--as-of", "2024-05-10"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 31 rows"));

    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.starts_with("Date,Income,Expense,Balance,Details"));
    assert!(csv.contains("2024-05-25,300000,0,800000"));
}

#[test]
fn summary_shows_current_month() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    flowsight(&data_dir)
        .args(["summary", "--as-of", "2024-05-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Balance:"))
        .stdout(predicate::str::contains("500000"))
        .stdout(predicate::str::contains("2024-05-27"));
}

#[test]
fn config_prints_paths() {
    let data_dir = TempDir::new().unwrap();

    flowsight(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default months: 36"));
}

#[test]
fn all_days_overrides_only_changes_preference() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"only_changes": true, "output_format": "json"}"#,
    )
    .unwrap();

    let rows_for = |extra: &[&str]| -> usize {
        let output = flowsight(&data_dir)
            .args(["project", "--months", "1", "--as-of", "2024-05-10"])
            .args(extra)
            .output()
            .unwrap();
        assert!(output.status.success());
        let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        rows.as_array().unwrap().len()
    };

    assert_eq!(rows_for(&[]), 2);
    assert_eq!(rows_for(&["--all-days"]), 31);

    flowsight(&data_dir)
        .args(["project", "--only-changes", "--all-days"])
        .assert()
        .failure();
}
