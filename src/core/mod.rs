pub mod amount;
pub mod brackets;
pub mod dividend;
pub mod error;
pub mod invoice;
pub mod salary;
pub mod vat;
pub mod words;

// Flat public surface for calculators and converters.
pub use amount::{
    coerce_amount, format_decimal_comma, format_eur, format_grouped, parse_amount, round_money,
    MAX_AMOUNT,
};
pub use brackets::{TaxBracket, TaxBrackets};
pub use dividend::{
    company_dividend_tax, participation_exemption, person_dividend_tax, CompanyDividendInput,
    CompanyDividendResult, DenialReason, DividendSource, ForeignTax, PersonDividendInput,
    PersonDividendResult,
};
pub use error::{InvoiceError, PolicyError};
pub use invoice::{calculate_invoice, Invoice, InvoiceLine, InvoiceTotals, Party};
pub use salary::{
    calculate_npd, calculate_salary, gross_from_net, net_from_gross, Direction, NpdMode,
    SalaryInput, SalaryOptions, SalaryPolicy, SalaryResult, GROSS_SEARCH_ITERATIONS,
};
pub use vat::{add_vat, extract_vat, VatBreakdown};
pub use words::{amount_in_words, number_in_words, Gender};
