use rust_decimal::Decimal;

/// Problems with a user-supplied salary policy file.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid policy json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("policy has no income tax brackets")]
    NoIncomeTaxBrackets,
    #[error("income tax bracket {index} is out of order")]
    UnorderedBrackets { index: usize },
    #[error("top income tax rate plus social rates is {burden}, must be below 1")]
    RatesTooHigh { burden: Decimal },
}

/// Invoice validation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("invoice {number} has no lines")]
    NoLines { number: String },
    #[error("line {line} has a negative quantity")]
    NegativeQuantity { line: usize },
    #[error("line {line} has a negative unit price")]
    NegativePrice { line: usize },
    #[error("VAT rate {0}% is negative")]
    NegativeVatRate(Decimal),
    #[error("VAT rate {0}% is too large")]
    VatRateTooLarge(Decimal),
    #[error("line {line} amount is too large")]
    LineTooLarge { line: usize },
    #[error("invoice {number} total exceeds {max}")]
    TotalTooLarge { number: String, max: Decimal },
    #[error("due date {due} is before issue date {issued}")]
    DueBeforeIssue { issued: String, due: String },
}
