use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;

fn orderpad(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("orderpad").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn first_list_seeds_the_bundled_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Seeded the product catalog"))
        .stdout(predicates::str::contains("Taaza Toned Milk - 500ml"))
        .stdout(predicates::str::contains("Butter"));

    // A second run reads the persisted catalog without reseeding.
    orderpad(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Seeded").not());

    assert!(data_dir.join("catalog.json").exists());
}

#[test]
fn save_history_and_view_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .args(["total", "milk-taaza-500=3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("81.00"));

    orderpad(&data_dir)
        .args(["save", "milk-taaza-500=3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order saved."));

    orderpad(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicates::str::contains("1."))
        .stdout(predicates::str::contains("81.00"));

    orderpad(&data_dir)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Taaza Toned Milk"))
        .stdout(predicates::str::contains("3 x"));
}

#[test]
fn zero_quantity_save_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .args(["save", "milk-taaza-500=0"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Cannot save an empty order."));

    orderpad(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicates::str::contains("No saved records."));
}

#[test]
fn export_writes_a_csv_for_the_current_month() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");
    let out_dir = temp_dir.path().join("exports");
    std::fs::create_dir_all(&out_dir).unwrap();

    orderpad(&data_dir)
        .args(["save", "butter-100=2"])
        .assert()
        .success();

    let now = Local::now();
    let filter = format!("{}-{}", now.month(), now.year());
    orderpad(&data_dir)
        .args(["export", filter.as_str(), "--out"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 1 record"));

    let path = out_dir.join(format!("OrderPad_History_{}.csv", filter));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("Total Amount"));
    assert!(content.contains("2 x Pasteurised Butter"));
    assert!(content.contains("120.00"));
}

#[test]
fn invalid_export_filter_produces_no_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");
    let out_dir = temp_dir.path().join("exports");
    std::fs::create_dir_all(&out_dir).unwrap();

    orderpad(&data_dir)
        .args(["save", "butter-100=2"])
        .assert()
        .success();

    orderpad(&data_dir)
        .args(["export", "13-2025", "--out"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicates::str::contains("Invalid month-year filter"));

    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn added_products_can_be_ordered_and_removed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .args(["add", "Chocolate Milkshake", "300ml", "45", "Beverages"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added Chocolate Milkshake - 300ml"));

    let list = orderpad(&data_dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    assert!(stdout.contains("Beverages"));

    // Pull the generated id out of the listing to remove it again.
    let id = stdout
        .split_whitespace()
        .find(|w| w.starts_with("custom-"))
        .expect("listing should show the generated id")
        .to_string();

    orderpad(&data_dir)
        .args(["remove", id.as_str()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed"));

    orderpad(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Beverages").not());
}

#[test]
fn theme_preference_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = dark"));

    orderpad(&data_dir)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Theme set to light."));

    orderpad(&data_dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("theme = light"));
}

#[test]
fn load_last_prints_the_previous_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("orderpad");

    orderpad(&data_dir)
        .arg("load")
        .assert()
        .success()
        .stdout(predicates::str::contains("No saved orders."));

    orderpad(&data_dir)
        .args(["save", "milk-taaza-500=3", "butter-100=1"])
        .assert()
        .success();

    orderpad(&data_dir)
        .arg("load")
        .assert()
        .success()
        .stdout(predicates::str::contains("milk-taaza-500=3"))
        .stdout(predicates::str::contains("butter-100=1"));
}
