//! VAT command - add or extract PVM

use super::{print_breakdown, BreakdownRow};
use clap::Args;
use dokcalc::core::{add_vat, extract_vat, parse_amount, round_money, VatBreakdown};

#[derive(Args, Debug)]
pub struct VatCommand {
    /// Amount without VAT, or with VAT when --extract is given
    amount: String,

    /// VAT rate in percent (21, 9 or 5 in Lithuania)
    #[arg(short, long, default_value = "21")]
    rate: String,

    /// The amount already includes VAT; split it into base and VAT
    #[arg(short, long)]
    extract: bool,

    /// Output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl VatCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let amount = parse_amount(&self.amount);
        let rate = parse_amount(&self.rate);
        let breakdown = if self.extract {
            extract_vat(amount, rate)
        } else {
            add_vat(amount, rate)
        };
        // rounded parts must still add up to the total
        let base = round_money(breakdown.base);
        let total = round_money(breakdown.total);
        let breakdown = VatBreakdown { base, vat: total - base, total, rate: breakdown.rate };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            print_breakdown(&[
                BreakdownRow::new("Amount excl. VAT", breakdown.base),
                BreakdownRow::new(format!("VAT {}%", breakdown.rate.normalize()), breakdown.vat),
                BreakdownRow::new("Amount incl. VAT", breakdown.total),
            ]);
        }
        Ok(())
    }
}
