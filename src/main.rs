use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(name = "dokcalc", version, about = "Lithuanian salary, VAT, dividend and invoice calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Gross to net salary (or net to gross with --net)
    Salary(cmd::salary::SalaryCommand),
    /// Add or extract VAT
    Vat(cmd::vat::VatCommand),
    /// Dividend tax for a person or a company
    Dividend(cmd::dividend::DividendCommand),
    /// Spell an amount out in Lithuanian
    Words(cmd::words::WordsCommand),
    /// Invoice totals and amount in words from invoice JSON
    Invoice(cmd::invoice::InvoiceCommand),
    /// Salary calculation for each row of a CSV file
    Batch(cmd::batch::BatchCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Salary(salary) => salary.exec(),
        Command::Vat(vat) => vat.exec(),
        Command::Dividend(dividend) => dividend.exec(),
        Command::Words(words) => words.exec(),
        Command::Invoice(invoice) => invoice.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
