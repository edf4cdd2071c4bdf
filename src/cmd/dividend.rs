//! Dividend command - personal GPM and the corporate participation exemption

use clap::{Args, Subcommand};
use dokcalc::core::{
    company_dividend_tax, parse_amount, person_dividend_tax, round_money, CompanyDividendInput,
    DividendSource, ForeignTax, PersonDividendInput,
};
use rust_decimal_macros::dec;

use super::{print_breakdown, BreakdownRow};

#[derive(Args, Debug)]
pub struct DividendCommand {
    #[command(subcommand)]
    recipient: Recipient,
}

#[derive(Subcommand, Debug)]
enum Recipient {
    /// Dividends received by an individual
    Person(PersonArgs),
    /// Dividends received by a Lithuanian company
    Company(CompanyArgs),
}

#[derive(Args, Debug)]
struct PersonArgs {
    /// Gross dividend amount
    amount: String,

    /// Tax withheld abroad as a percentage of the gross dividend
    #[arg(long, conflicts_with = "foreign_sum")]
    foreign_percent: Option<String>,

    /// Tax withheld abroad as an absolute sum
    #[arg(long)]
    foreign_sum: Option<String>,

    /// A double tax treaty allows crediting the foreign tax
    #[arg(long)]
    treaty_credit: bool,

    /// Output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompanyArgs {
    /// Gross dividend amount
    amount: String,

    /// Voting share held in the paying company, in percent
    #[arg(short, long)]
    share: String,

    /// Months the shares have been held without interruption
    #[arg(short, long)]
    months: u32,

    /// The payer is registered in a target (low-tax) territory
    #[arg(long)]
    target_territory: bool,

    /// Output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl DividendCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match &self.recipient {
            Recipient::Person(args) => args.exec(),
            Recipient::Company(args) => args.exec(),
        }
    }
}

impl PersonArgs {
    fn source(&self) -> DividendSource {
        let foreign_tax = match (&self.foreign_percent, &self.foreign_sum) {
            (Some(percent), _) => Some(ForeignTax::Percent(parse_amount(percent))),
            (None, Some(sum)) => Some(ForeignTax::Sum(parse_amount(sum))),
            (None, None) => None,
        };
        match foreign_tax {
            Some(foreign_tax) => DividendSource::Foreign {
                foreign_tax,
                treaty_credit: self.treaty_credit,
            },
            None => DividendSource::Domestic,
        }
    }

    fn exec(&self) -> anyhow::Result<()> {
        let input = PersonDividendInput {
            gross: parse_amount(&self.amount),
            source: self.source(),
        };
        let result = person_dividend_tax(&input);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let mut rows = vec![
            BreakdownRow::new("Gross dividend", result.gross),
            BreakdownRow::new("GPM 15%", round_money(result.gpm_full)),
        ];
        if let DividendSource::Foreign { .. } = input.source {
            rows.push(BreakdownRow::new("Foreign tax", round_money(result.foreign_tax)));
            rows.push(BreakdownRow::new("Treaty credit", round_money(result.credit)));
            rows.push(BreakdownRow::new("GPM payable in Lithuania", round_money(result.gpm_payable)));
        }
        rows.push(BreakdownRow::new("Total tax", round_money(result.total_tax)));
        rows.push(BreakdownRow::new("Net dividend", round_money(result.net)));
        print_breakdown(&rows);
        Ok(())
    }
}

impl CompanyArgs {
    fn exec(&self) -> anyhow::Result<()> {
        let result = company_dividend_tax(&CompanyDividendInput {
            gross: parse_amount(&self.amount),
            voting_share_percent: parse_amount(&self.share),
            holding_months: self.months,
            target_territory: self.target_territory,
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print_breakdown(&[
            BreakdownRow::new("Gross dividend", result.gross),
            BreakdownRow::new(
                format!("Corporate tax {}%", (result.rate * dec!(100)).normalize()),
                round_money(result.tax),
            ),
            BreakdownRow::new("Net dividend", round_money(result.net)),
        ]);
        println!("{}", result.reason());
        Ok(())
    }
}
