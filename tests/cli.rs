//! E2E tests for the calculator commands

use std::process::{Command, Output};

fn dokcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dokcalc"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_of(args: &[&str]) -> String {
    let output = dokcalc(args);
    assert!(output.status.success(), "Command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn words_euro_amount() {
    let stdout = stdout_of(&["words", "1250.50"]);
    assert_eq!(
        stdout.trim(),
        "vienas tūkstantis du šimtai penkiasdešimt eurų ir penkiasdešimt centų"
    );
}

#[test]
fn words_currency_without_subunit() {
    let stdout = stdout_of(&["words", "5000,75", "--currency", "JPY", "--capitalize"]);
    assert_eq!(stdout.trim(), "Penki tūkstančiai jenų");
}

#[test]
fn words_invalid_amount_is_zero() {
    let stdout = stdout_of(&["words", "abc"]);
    assert_eq!(stdout.trim(), "nulis eurų");
}

#[test]
fn words_lists_currencies() {
    let stdout = stdout_of(&["words", "--list"]);
    assert!(stdout.contains("EUR  euras / centas"));
    assert!(stdout.contains("JPY  jena / -"));
}

#[test]
fn salary_gross_to_net_json() {
    let stdout = stdout_of(&["salary", "1038", "--json"]);
    assert!(stdout.contains(r#""net": "777.39""#), "{stdout}");
    assert!(stdout.contains(r#""npd": "747""#), "{stdout}");
}

#[test]
fn salary_net_to_gross() {
    let stdout = stdout_of(&["salary", "777,39", "--net", "--json"]);
    assert!(stdout.contains(r#""gross": "1038.00""#), "{stdout}");
}

#[test]
fn salary_table() {
    let stdout = stdout_of(&["salary", "2000", "--npd", "none", "--pension-supplement"]);
    assert!(stdout.contains("Pension supplement"));
    assert!(stdout.contains("1 150,00 €"));
    assert!(stdout.contains("Income tax (GPM 20%)"));
}

#[test]
fn salary_table_shows_top_marginal_rate() {
    let stdout = stdout_of(&["salary", "15000", "--npd", "none"]);
    assert!(stdout.contains("Income tax (GPM 32%)"), "{stdout}");
}

#[test]
fn salary_rejects_broken_policy_file() {
    let output = dokcalc(&["salary", "1000", "--policy", "tests/data/invoice.json"]);
    assert!(!output.status.success());
}

#[test]
fn vat_add_and_extract() {
    let stdout = stdout_of(&["vat", "100"]);
    assert!(stdout.contains("121,00 €"));

    let stdout = stdout_of(&["vat", "10", "--rate", "9", "--extract"]);
    assert!(stdout.contains("9,17 €"));
    assert!(stdout.contains("0,83 €"));
}

#[test]
fn vat_oversized_amount_is_zero() {
    let stdout = stdout_of(&["vat", "79228162514264337593543950335"]);
    assert!(stdout.contains("0,00 €"), "{stdout}");
}

#[test]
fn dividend_person_with_treaty_credit() {
    let stdout = stdout_of(&[
        "dividend",
        "person",
        "1000",
        "--foreign-percent",
        "20",
        "--treaty-credit",
        "--json",
    ]);
    assert!(stdout.contains(r#""gpm_payable": "0"#), "{stdout}");
}

#[test]
fn dividend_company_share_too_low() {
    let stdout = stdout_of(&["dividend", "company", "10000", "--share", "9.99", "--months", "12"]);
    assert!(stdout.contains("share percentage"));
    assert!(stdout.contains("1 500,00 €"));
}

#[test]
fn dividend_company_exempt() {
    let stdout = stdout_of(&["dividend", "company", "10000", "--share", "10", "--months", "12"]);
    assert!(stdout.contains("participation exemption applies"));
}

#[test]
fn invoice_totals() {
    let stdout = stdout_of(&["invoice", "tests/data/invoice.json"]);
    assert!(stdout.contains("DOK-0042"));
    assert!(stdout.contains("1113,20"));
    assert!(stdout.contains("Vienas tūkstantis šimtas trylika eurų ir dvidešimt centų"));
}

#[test]
fn invoice_json() {
    let stdout = stdout_of(&["invoice", "tests/data/invoice.json", "--json"]);
    let printed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(printed["total"], "1113,20");
    assert_eq!(printed["vat_rate"], "21%");
    assert_eq!(printed["lines"].as_array().unwrap().len(), 2);
}

#[test]
fn batch_salaries() {
    let stdout = stdout_of(&["batch", "tests/data/salaries.csv"]);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "row_num,gross,npd,income_tax,social_insurance,net,employer_contribution,total_employer_cost"
    );
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("1,1038.00,747.00,58.20,202.41,777.39,"));
    assert!(lines[2].starts_with("2,1038.00,"));
    assert!(lines[3].starts_with("3,2000.00,0.00,400.00,450.00,1150.00,"));
    assert!(lines[4].starts_with("4,0.00,"));
}

#[test]
fn schema_outputs() {
    let stdout = stdout_of(&["schema", "batch-header"]);
    assert_eq!(stdout.trim(), "amount,direction,npd,pension_supplement");

    let stdout = stdout_of(&["schema", "invoice"]);
    assert!(stdout.contains("\"issue_date\""));

    let stdout = stdout_of(&["schema", "batch-fields"]);
    assert!(stdout.contains("amount"));
    assert!(stdout.contains("required"));
}
