pub mod batch;
pub mod dividend;
pub mod invoice;
pub mod salary;
pub mod schema;
pub mod vat;
pub mod words;

use anyhow::Context;
use dokcalc::core::{format_eur, SalaryPolicy};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Built-in policy, or one read from a JSON file.
pub fn load_policy(path: Option<&Path>) -> anyhow::Result<SalaryPolicy> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening policy file {}", path.display()))?;
            let policy = SalaryPolicy::from_json(BufReader::new(file))
                .with_context(|| format!("reading policy file {}", path.display()))?;
            Ok(policy)
        }
        None => Ok(SalaryPolicy::default()),
    }
}

/// Open a file for reading, or stdin with "-".
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        if buffer.is_empty() {
            anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
        }
        Ok(Box::new(io::Cursor::new(buffer)))
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// One labelled amount of a calculation breakdown.
#[derive(Debug, Clone, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "")]
    pub label: String,
    #[tabled(rename = "EUR")]
    pub amount: String,
}

impl BreakdownRow {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        BreakdownRow { label: label.into(), amount: format_eur(amount) }
    }
}

pub fn print_breakdown(rows: &[BreakdownRow]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}
