//! Batch command - salary calculation for every row of a CSV file

use super::{load_policy, open_input};
use clap::Args;
use dokcalc::core::{calculate_salary, parse_amount, Direction, NpdMode, SalaryInput, SalaryOptions};
use dokcalc_derive::CsvColumns;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Column of the batch CSV input, as listed by `dokcalc schema`.
#[derive(Debug, Clone, Copy)]
pub struct CsvColumn {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Input row. Values are read as text and coerced like form input:
/// malformed amounts count as zero and unknown options fall back to defaults.
#[derive(Debug, Deserialize, CsvColumns)]
pub struct SalaryRow {
    /// Monthly amount, gross or net
    pub amount: String,
    /// "gross" (default) or "net"
    #[serde(default)]
    pub direction: String,
    /// standard, none, basic, 1127 or 1057
    #[serde(default, rename = "npd")]
    pub npd_mode: String,
    /// "true", "yes" or "1" to add the 3% pension supplement
    #[serde(default)]
    pub pension_supplement: String,
}

impl SalaryRow {
    fn to_input(&self, row_num: usize) -> SalaryInput {
        let direction = match self.direction.trim().to_lowercase().as_str() {
            "net" | "neto" => Direction::Net,
            _ => Direction::Gross,
        };
        let npd_mode = NpdMode::from_str(self.npd_mode.trim()).unwrap_or_else(|| {
            log::warn!("Row {}: unknown NPD mode {:?}, using standard", row_num, self.npd_mode);
            NpdMode::Standard
        });
        let pension_supplement = matches!(
            self.pension_supplement.trim().to_lowercase().as_str(),
            "true" | "yes" | "1" | "taip"
        );
        SalaryInput {
            amount: parse_amount(&self.amount),
            direction,
            options: SalaryOptions { npd_mode, pension_supplement },
        }
    }
}

#[derive(Debug, Serialize)]
struct SalaryOutputRow {
    row_num: usize,
    gross: String,
    npd: String,
    income_tax: String,
    social_insurance: String,
    net: String,
    employer_contribution: String,
    total_employer_cost: String,
}

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV file with salary rows, or "-" for stdin (see `dokcalc schema batch-fields`)
    file: PathBuf,

    /// JSON file overriding the built-in tax constants
    #[arg(long)]
    policy: Option<PathBuf>,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let policy = load_policy(self.policy.as_deref())?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(open_input(&self.file)?);
        let mut writer = csv::Writer::from_writer(io::stdout());

        let mut count = 0;
        for (i, record) in reader.deserialize::<SalaryRow>().enumerate() {
            let row_num = i + 1;
            let row = record?;
            let result = calculate_salary(&row.to_input(row_num), &policy).rounded();
            writer.serialize(SalaryOutputRow {
                row_num,
                gross: format!("{:.2}", result.gross),
                npd: format!("{:.2}", result.npd),
                income_tax: format!("{:.2}", result.income_tax),
                social_insurance: format!("{:.2}", result.social_insurance),
                net: format!("{:.2}", result.net),
                employer_contribution: format!("{:.2}", result.employer_contribution),
                total_employer_cost: format!("{:.2}", result.total_employer_cost),
            })?;
            count += 1;
        }
        writer.flush()?;
        log::info!("Calculated {} salary rows", count);
        Ok(())
    }
}
