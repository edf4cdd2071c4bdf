//! Schema command - print expected input formats

use super::batch::SalaryRow;
use clap::Args;
use dokcalc::core::{Invoice, SalaryPolicy};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which format to describe
    #[arg(value_enum, default_value = "invoice")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the invoice input
    Invoice,
    /// Built-in salary policy, as a starting point for --policy files
    Policy,
    /// CSV header row for batch salary input
    BatchHeader,
    /// Batch CSV column descriptions
    BatchFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::Invoice => {
                let schema = schema_for!(Invoice);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::Policy => {
                println!("{}", serde_json::to_string_pretty(&SalaryPolicy::default())?);
            }
            SchemaFormat::BatchHeader => println!("{}", SalaryRow::csv_header()),
            SchemaFormat::BatchFields => self.print_batch_fields(),
        }
        Ok(())
    }

    fn print_batch_fields(&self) {
        println!("Batch CSV Input Format");
        println!("======================");
        println!();
        for column in SalaryRow::csv_columns() {
            let req = if column.required { "required" } else { "optional" };
            println!("{:20} ({:8})  {}", column.name, req, column.description);
        }
        println!();
        println!("Amounts accept decimal commas; malformed values count as zero");
    }
}
