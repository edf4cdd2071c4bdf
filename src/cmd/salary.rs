//! Salary command - gross to net and back

use super::{load_policy, print_breakdown, BreakdownRow};
use clap::{Args, ValueEnum};
use dokcalc::core::{calculate_salary, parse_amount, Direction, NpdMode, SalaryInput, SalaryOptions};
use rust_decimal_macros::dec;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SalaryCommand {
    /// Monthly amount (gross unless --net); "1 250,50" style input is accepted
    amount: String,

    /// Treat the amount as net pay and solve for gross
    #[arg(long)]
    net: bool,

    /// Tax-free allowance (NPD) to apply
    #[arg(long, value_enum, default_value_t = NpdArg::Standard)]
    npd: NpdArg,

    /// Add the 3% II pillar pension supplement
    #[arg(short, long)]
    pension_supplement: bool,

    /// JSON file overriding the built-in tax constants
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum NpdArg {
    #[default]
    Standard,
    None,
    Basic,
    #[value(name = "1127")]
    WorkCapacity0To25,
    #[value(name = "1057")]
    WorkCapacity30To55,
}

impl From<NpdArg> for NpdMode {
    fn from(arg: NpdArg) -> Self {
        match arg {
            NpdArg::Standard => NpdMode::Standard,
            NpdArg::None => NpdMode::None,
            NpdArg::Basic => NpdMode::Basic,
            NpdArg::WorkCapacity0To25 => NpdMode::WorkCapacity0To25,
            NpdArg::WorkCapacity30To55 => NpdMode::WorkCapacity30To55,
        }
    }
}

impl SalaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let policy = load_policy(self.policy.as_deref())?;
        let input = SalaryInput {
            amount: parse_amount(&self.amount),
            direction: if self.net { Direction::Net } else { Direction::Gross },
            options: SalaryOptions {
                npd_mode: self.npd.into(),
                pension_supplement: self.pension_supplement,
            },
        };
        log::info!("Calculating salary for {:?} under {} rules", input, policy.year);

        let result = calculate_salary(&input, &policy).rounded();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let marginal = policy.income_tax.marginal_rate(result.gross - result.npd);
        let mut rows = vec![
            BreakdownRow::new("Gross salary", result.gross),
            BreakdownRow::new("Tax-free allowance (NPD)", result.npd),
            BreakdownRow::new(
                format!("Income tax (GPM {}%)", (marginal * dec!(100)).normalize()),
                result.income_tax,
            ),
            BreakdownRow::new("Pension insurance (VSD)", result.pension_insurance),
            BreakdownRow::new("Health insurance (PSD)", result.health_insurance),
        ];
        if self.pension_supplement {
            rows.push(BreakdownRow::new("Pension supplement", result.pension_supplement));
        }
        rows.extend([
            BreakdownRow::new("Net salary", result.net),
            BreakdownRow::new("Employer contribution", result.employer_contribution),
            BreakdownRow::new("Total employer cost", result.total_employer_cost),
        ]);
        print_breakdown(&rows);
        Ok(())
    }
}
