//! Invoice arithmetic for the invoice generator: line amounts, VAT, total
//! and the total in words. Layout is left to the PDF renderer.

use super::amount::{format_decimal_comma, round_money, MAX_AMOUNT};
use super::error::InvoiceError;
use super::words::{amount_in_words, capitalize, DEFAULT_CURRENCY};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Seller or buyer details, printed as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Party {
    pub name: String,
    /// Company or personal code
    #[serde(default)]
    pub code: Option<String>,
    /// PVM mokėtojo kodas
    #[serde(default)]
    pub vat_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceLine {
    pub description: String,
    #[schemars(with = "f64")]
    pub quantity: Decimal,
    /// Unit of measure, e.g. "vnt." or "val."
    #[serde(default)]
    pub unit: Option<String>,
    /// Price per unit before VAT
    #[schemars(with = "f64")]
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Invoice {
    /// Series and number, e.g. "DOK-0042"
    pub number: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub seller: Party,
    #[serde(default)]
    pub buyer: Party,
    /// ISO 4217 code, EUR when omitted
    #[serde(default = "default_currency")]
    pub currency: String,
    /// VAT rate in percent; omit for sellers not registered for VAT
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub vat_rate: Option<Decimal>,
    pub lines: Vec<InvoiceLine>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Invoice {
    pub fn from_json<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTotal {
    pub description: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub number: String,
    pub currency: String,
    pub lines: Vec<LineTotal>,
    pub subtotal: Decimal,
    pub vat_rate: Option<Decimal>,
    pub vat: Decimal,
    pub total: Decimal,
    pub total_in_words: String,
}

/// Totals as the PDF layer prints them: decimal commas, two decimals and
/// the words sentence capitalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintedTotals {
    pub number: String,
    pub currency: String,
    pub lines: Vec<PrintedLine>,
    pub subtotal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<String>,
    pub vat: String,
    pub total: String,
    pub total_in_words: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintedLine {
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub amount: String,
}

impl InvoiceTotals {
    pub fn printed(&self) -> PrintedTotals {
        PrintedTotals {
            number: self.number.clone(),
            currency: self.currency.clone(),
            lines: self
                .lines
                .iter()
                .map(|l| PrintedLine {
                    description: l.description.clone(),
                    quantity: l.quantity.normalize().to_string().replace('.', ","),
                    unit: l.unit.clone().unwrap_or_default(),
                    unit_price: format_decimal_comma(l.unit_price),
                    amount: format_decimal_comma(l.amount),
                })
                .collect(),
            subtotal: format_decimal_comma(self.subtotal),
            vat_rate: self.vat_rate.map(|r| format!("{}%", r.normalize())),
            vat: format_decimal_comma(self.vat),
            total: format_decimal_comma(self.total),
            total_in_words: capitalize(&self.total_in_words),
        }
    }
}

fn validate(invoice: &Invoice) -> Result<(), InvoiceError> {
    if invoice.lines.is_empty() {
        return Err(InvoiceError::NoLines { number: invoice.number.clone() });
    }
    for (i, line) in invoice.lines.iter().enumerate() {
        if line.quantity < Decimal::ZERO {
            return Err(InvoiceError::NegativeQuantity { line: i + 1 });
        }
        if line.unit_price < Decimal::ZERO {
            return Err(InvoiceError::NegativePrice { line: i + 1 });
        }
    }
    if let Some(rate) = invoice.vat_rate {
        if rate < Decimal::ZERO {
            return Err(InvoiceError::NegativeVatRate(rate));
        }
        if rate > MAX_AMOUNT {
            return Err(InvoiceError::VatRateTooLarge(rate));
        }
    }
    if let Some(due) = invoice.due_date {
        if due < invoice.issue_date {
            return Err(InvoiceError::DueBeforeIssue {
                issued: invoice.issue_date.to_string(),
                due: due.to_string(),
            });
        }
    }
    Ok(())
}

/// Line amounts are rounded to cents before summing; VAT is charged once on
/// the subtotal.
pub fn calculate_invoice(invoice: &Invoice) -> Result<InvoiceTotals, InvoiceError> {
    validate(invoice)?;

    let too_large = || InvoiceError::TotalTooLarge {
        number: invoice.number.clone(),
        max: MAX_AMOUNT,
    };

    let mut lines = Vec::with_capacity(invoice.lines.len());
    let mut subtotal = Decimal::ZERO;
    for (i, line) in invoice.lines.iter().enumerate() {
        let amount = line
            .quantity
            .checked_mul(line.unit_price)
            .filter(|amount| *amount <= MAX_AMOUNT)
            .ok_or(InvoiceError::LineTooLarge { line: i + 1 })?;
        let amount = round_money(amount);
        subtotal = subtotal.checked_add(amount).ok_or_else(too_large)?;
        lines.push(LineTotal {
            description: line.description.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            unit_price: line.unit_price,
            amount,
        });
    }
    if subtotal > MAX_AMOUNT {
        return Err(too_large());
    }

    let vat = invoice
        .vat_rate
        .map_or(Decimal::ZERO, |rate| round_money(subtotal * (rate / dec!(100))));
    let total = subtotal + vat;
    if total > MAX_AMOUNT {
        return Err(too_large());
    }

    log::debug!("Invoice {}: subtotal {}, vat {}, total {}", invoice.number, subtotal, vat, total);

    Ok(InvoiceTotals {
        number: invoice.number.clone(),
        currency: invoice.currency.to_uppercase(),
        lines,
        subtotal,
        vat_rate: invoice.vat_rate,
        vat,
        total,
        total_in_words: amount_in_words(total, &invoice.currency),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "number": "DOK-0042",
        "issue_date": "2025-03-01",
        "due_date": "2025-03-15",
        "seller": { "name": "UAB DokSkenas", "code": "305000000", "vat_code": "LT100000000000" },
        "buyer": { "name": "MB Klientas" },
        "vat_rate": 21,
        "lines": [
            { "description": "Dokumentų skaitmeninimas", "quantity": 3, "unit": "mėn.", "unit_price": "300" },
            { "description": "Papildomi puslapiai", "quantity": "1.5", "unit_price": "13.33" }
        ]
    }"#;

    fn sample() -> Invoice {
        Invoice::from_json(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn totals_with_vat() {
        let totals = calculate_invoice(&sample()).unwrap();
        assert_eq!(totals.lines[0].amount, dec!(900));
        // 19.995 rounds half away from zero
        assert_eq!(totals.lines[1].amount, dec!(20.00));
        assert_eq!(totals.subtotal, dec!(920.00));
        assert_eq!(totals.vat, dec!(193.20));
        assert_eq!(totals.total, dec!(1113.20));
        assert_eq!(totals.currency, "EUR");
        assert_eq!(
            totals.total_in_words,
            "vienas tūkstantis šimtas trylika eurų ir dvidešimt centų"
        );
    }

    #[test]
    fn printed_uses_decimal_commas() {
        let printed = calculate_invoice(&sample()).unwrap().printed();
        assert_eq!(printed.subtotal, "920,00");
        assert_eq!(printed.vat, "193,20");
        assert_eq!(printed.total, "1113,20");
        assert_eq!(printed.vat_rate.as_deref(), Some("21%"));
        assert_eq!(printed.lines[1].quantity, "1,5");
        assert_eq!(printed.lines[1].unit_price, "13,33");
        assert!(printed.total_in_words.starts_with("Vienas tūkstantis"));
    }

    #[test]
    fn without_vat() {
        let mut invoice = sample();
        invoice.vat_rate = None;
        let totals = calculate_invoice(&invoice).unwrap();
        assert_eq!(totals.vat, Decimal::ZERO);
        assert_eq!(totals.total, totals.subtotal);
        assert_eq!(totals.printed().vat_rate, None);
    }

    #[test]
    fn rejects_inconsistent_invoices() {
        let mut invoice = sample();
        invoice.due_date = NaiveDate::from_ymd_opt(2025, 2, 1);
        assert!(matches!(calculate_invoice(&invoice), Err(InvoiceError::DueBeforeIssue { .. })));

        let mut invoice = sample();
        invoice.lines[1].quantity = dec!(-1);
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::NegativeQuantity { line: 2 }));

        let mut invoice = sample();
        invoice.lines[0].unit_price = dec!(-1);
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::NegativePrice { line: 1 }));

        let mut invoice = sample();
        invoice.vat_rate = Some(dec!(-21));
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::NegativeVatRate(dec!(-21))));

        let mut invoice = sample();
        invoice.lines.clear();
        assert_eq!(
            calculate_invoice(&invoice),
            Err(InvoiceError::NoLines { number: "DOK-0042".to_string() })
        );
    }

    #[test]
    fn rejects_oversized_amounts() {
        let mut invoice = sample();
        invoice.lines[0].unit_price = Decimal::MAX;
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::LineTooLarge { line: 1 }));

        let mut invoice = sample();
        invoice.lines[0].unit_price = MAX_AMOUNT;
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::LineTooLarge { line: 1 }));

        let too_large = Err(InvoiceError::TotalTooLarge {
            number: "DOK-0042".to_string(),
            max: MAX_AMOUNT,
        });
        let mut invoice = sample();
        invoice.lines[0].quantity = Decimal::ONE;
        invoice.lines[0].unit_price = MAX_AMOUNT;
        assert_eq!(calculate_invoice(&invoice), too_large);

        // subtotal fits exactly, VAT pushes the total over
        invoice.lines[0].unit_price = MAX_AMOUNT - dec!(20);
        assert_eq!(calculate_invoice(&invoice), too_large);
        invoice.vat_rate = None;
        assert_eq!(calculate_invoice(&invoice).unwrap().total, MAX_AMOUNT);

        let mut invoice = sample();
        invoice.vat_rate = Some(Decimal::MAX);
        assert_eq!(calculate_invoice(&invoice), Err(InvoiceError::VatRateTooLarge(Decimal::MAX)));
    }

    #[test]
    fn foreign_currency_words() {
        let mut invoice = sample();
        invoice.currency = "usd".to_string();
        invoice.vat_rate = None;
        let totals = calculate_invoice(&invoice).unwrap();
        assert_eq!(totals.currency, "USD");
        assert_eq!(totals.total_in_words, "devyni šimtai dvidešimt dolerių");
    }
}
