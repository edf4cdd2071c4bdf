//! Words command - amount in Lithuanian words

use clap::Args;
use dokcalc::core::words::{amount_in_words, capitalize, currencies};
use dokcalc::core::parse_amount;

#[derive(Args, Debug)]
pub struct WordsCommand {
    /// Amount to spell out, e.g. 1250.50 or "1 250,50"
    #[arg(required_unless_present = "list")]
    amount: Option<String>,

    /// ISO 4217 currency code
    #[arg(short, long, default_value = "EUR")]
    currency: String,

    /// Start with a capital letter, as on an invoice
    #[arg(long)]
    capitalize: bool,

    /// List the supported currency codes instead
    #[arg(long, conflicts_with = "amount")]
    list: bool,
}

impl WordsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.list {
            for currency in currencies::CURRENCIES {
                let minor = currency.minor.map_or("-", |m| m.single);
                println!("{}  {} / {}", currency.code, currency.major.single, minor);
            }
            return Ok(());
        }

        let amount = parse_amount(self.amount.as_deref().unwrap_or_default());
        let words = amount_in_words(amount, &self.currency);
        if self.capitalize {
            println!("{}", capitalize(&words));
        } else {
            println!("{}", words);
        }
        Ok(())
    }
}
