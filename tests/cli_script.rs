use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const NOW: &str = "2024-03-06T12:00:00";

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_dashboard_cli").unwrap();
    cmd.env("BUDGET_DASHBOARD_CLI_SCRIPT", "1")
        .env("BUDGET_DASHBOARD_HOME", home.path())
        .env("BUDGET_DASHBOARD_NOW", NOW)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_runs_weekly_flow() {
    let home = TempDir::new().unwrap();
    let input = "\
set income 3.500.000
set food 700000
debt-add Loan Friend 700000 2024-03-27
expense-add \"Movie night\" 120000 2024-03-05
gas
summary
filter week
config-save
exit
";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Debt `Loan` added"))
        .stdout(contains("Weekly summary (Tuần 10/2024)"))
        .stdout(contains("Gas fills         : 1"))
        .stdout(contains("Debt contribution : 233.333 ₫"))
        .stdout(contains("Configuration saved"));

    let json = std::fs::read_to_string(home.path().join("config/config.json")).unwrap();
    assert!(json.contains("\"weekly_income\": 3500000"));
    assert!(json.contains("\"default_filter\": \"week\""));
}

#[test]
fn saved_settings_are_loaded_on_next_start() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("set misc 250000\nconfig-save\n")
        .assert()
        .success();

    script_cmd(&home)
        .write_stdin("settings\n")
        .assert()
        .success()
        .stdout(contains("Misc budget   : 250.000 ₫"));
}

#[test]
fn configured_locale_and_currency_format_amounts() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("config")).unwrap();
    std::fs::write(
        home.path().join("config/config.json"),
        r#"{ "locale": "en-US", "currency": "USD", "default_filter": "month" }"#,
    )
    .unwrap();

    script_cmd(&home)
        .write_stdin("set misc 250000\nsettings\n")
        .assert()
        .success()
        .stdout(contains("misc set to $250,000.00."))
        .stdout(contains("Misc budget   : $250,000.00"))
        .stdout(contains("₫").not());
}

#[test]
fn recurring_debts_follow_month_filter() {
    let home = TempDir::new().unwrap();
    let input = "\
debt-recurring Bike Dealer 1000000 2024-01-15 2024-04-15 monthly
filter month 2024 2
debt-list
";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("4 Monthly installment(s) added."))
        .stdout(contains("Filter set to Tháng 2/2024."))
        .stdout(contains("Bike (Tháng 2/2024)"))
        .stdout(contains("Active: 1"))
        .stdout(contains("Bike (Tháng 3/2024)").not());
}

#[test]
fn errors_and_typos_do_not_stop_the_script() {
    let home = TempDir::new().unwrap();
    let input = "\
sumary
pay nosuch 100
withdraw
filter week 2021 53
weeks 2021
";

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Suggestion: `summary`?"))
        .stdout(contains("no debt matches `nosuch`"))
        .stdout(contains("usage: withdraw <id> <amount> <reason...>"))
        .stdout(contains("2021 has weeks 1..=52"))
        .stdout(contains("Tuần 52 (27/12/2021 - 02/01/2022)"));
}

#[test]
fn invalid_pinned_clock_fails_startup() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .env("BUDGET_DASHBOARD_NOW", "yesterday")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("BUDGET_DASHBOARD_NOW"));
}
