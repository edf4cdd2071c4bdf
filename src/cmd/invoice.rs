//! Invoice command - totals, VAT and the total in words for an invoice JSON

use clap::Args;
use dokcalc::core::invoice::{calculate_invoice, Invoice, PrintedLine};
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use super::open_input;

#[derive(Args, Debug)]
pub struct InvoiceCommand {
    /// Invoice JSON file, or "-" for stdin (see `dokcalc schema invoice`)
    file: PathBuf,

    /// Output the printable totals as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "#")]
    row_num: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Price")]
    unit_price: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl LineRow {
    fn new(row_num: usize, line: &PrintedLine) -> Self {
        LineRow {
            row_num,
            description: line.description.clone(),
            quantity: line.quantity.clone(),
            unit: line.unit.clone(),
            unit_price: line.unit_price.clone(),
            amount: line.amount.clone(),
        }
    }
}

impl InvoiceCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let invoice = Invoice::from_json(open_input(&self.file)?)?;
        let printed = calculate_invoice(&invoice)?.printed();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&printed)?);
            return Ok(());
        }

        let rows: Vec<LineRow> = printed
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| LineRow::new(i + 1, line))
            .collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string();

        println!("Invoice {} ({})", printed.number, invoice.issue_date);
        println!("{}", table);
        println!("Subtotal: {} {}", printed.subtotal, printed.currency);
        if let Some(rate) = &printed.vat_rate {
            println!("VAT {}: {} {}", rate, printed.vat, printed.currency);
        }
        println!("Total: {} {}", printed.total, printed.currency);
        println!("Amount in words: {}", printed.total_in_words);
        Ok(())
    }
}
