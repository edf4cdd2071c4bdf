//! Dividend taxation for individuals and for companies.

use super::amount::coerce_amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GPM on dividends received by an individual.
pub const PERSONAL_DIVIDEND_RATE: Decimal = dec!(0.15);
/// Corporate income tax on dividends that do not qualify for exemption.
pub const CORPORATE_DIVIDEND_RATE: Decimal = dec!(0.15);

/// Participation exemption thresholds.
pub const MIN_VOTING_SHARE_PERCENT: Decimal = dec!(10);
pub const MIN_HOLDING_MONTHS: u32 = 12;

/// Tax withheld abroad, either as a rate of the gross dividend or a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ForeignTax {
    Percent(Decimal),
    Sum(Decimal),
}

impl ForeignTax {
    pub fn amount(&self, gross: Decimal) -> Decimal {
        match *self {
            ForeignTax::Percent(rate) => gross * (coerce_amount(rate) / dec!(100)),
            ForeignTax::Sum(sum) => coerce_amount(sum),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividendSource {
    Domestic,
    Foreign {
        foreign_tax: ForeignTax,
        /// A double tax treaty lets the foreign tax be credited against GPM.
        treaty_credit: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDividendInput {
    pub gross: Decimal,
    pub source: DividendSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PersonDividendResult {
    pub gross: Decimal,
    /// 15% of gross, before any credit.
    pub gpm_full: Decimal,
    pub foreign_tax: Decimal,
    pub credit: Decimal,
    pub gpm_payable: Decimal,
    pub total_tax: Decimal,
    pub net: Decimal,
}

/// Tax on dividends received by an individual.
///
/// Without a treaty credit the foreign tax is not offset at all: both the
/// foreign tax and the full local GPM are paid.
pub fn person_dividend_tax(input: &PersonDividendInput) -> PersonDividendResult {
    let gross = coerce_amount(input.gross);
    let gpm_full = gross * PERSONAL_DIVIDEND_RATE;

    let (foreign_tax, credit) = match input.source {
        DividendSource::Domestic => (Decimal::ZERO, Decimal::ZERO),
        DividendSource::Foreign { foreign_tax, treaty_credit } => {
            let foreign_tax = foreign_tax.amount(gross);
            let credit = if treaty_credit {
                foreign_tax.min(gpm_full)
            } else {
                Decimal::ZERO
            };
            (foreign_tax, credit)
        }
    };

    let gpm_payable = (gpm_full - credit).max(Decimal::ZERO);
    let total_tax = foreign_tax + gpm_payable;

    PersonDividendResult {
        gross,
        gpm_full,
        foreign_tax,
        credit,
        gpm_payable,
        total_tax,
        net: gross - total_tax,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanyDividendInput {
    pub gross: Decimal,
    pub voting_share_percent: Decimal,
    pub holding_months: u32,
    /// Payer is registered in a listed low-tax ("target") territory.
    pub target_territory: bool,
}

/// First participation exemption condition that failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DenialReason {
    ShareTooLow { voting_share_percent: Decimal },
    HoldingTooShort { holding_months: u32 },
    TargetTerritory,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::ShareTooLow { voting_share_percent } => write!(
                f,
                "voting share percentage {}% is below the required {}%",
                voting_share_percent, MIN_VOTING_SHARE_PERCENT
            ),
            DenialReason::HoldingTooShort { holding_months } => write!(
                f,
                "shares held for {} months, at least {} required",
                holding_months, MIN_HOLDING_MONTHS
            ),
            DenialReason::TargetTerritory => {
                write!(f, "payer is registered in a target territory")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanyDividendResult {
    pub gross: Decimal,
    pub exempt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<DenialReason>,
    pub rate: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
}

impl CompanyDividendResult {
    pub fn reason(&self) -> String {
        match &self.denial {
            Some(denial) => denial.to_string(),
            None => "participation exemption applies".to_string(),
        }
    }
}

/// Checks the three exemption conditions in priority order.
pub fn participation_exemption(input: &CompanyDividendInput) -> Result<(), DenialReason> {
    let share = coerce_amount(input.voting_share_percent);
    if share < MIN_VOTING_SHARE_PERCENT {
        return Err(DenialReason::ShareTooLow { voting_share_percent: share });
    }
    if input.holding_months < MIN_HOLDING_MONTHS {
        return Err(DenialReason::HoldingTooShort { holding_months: input.holding_months });
    }
    if input.target_territory {
        return Err(DenialReason::TargetTerritory);
    }
    Ok(())
}

/// Corporate tax on dividends received by a Lithuanian company.
pub fn company_dividend_tax(input: &CompanyDividendInput) -> CompanyDividendResult {
    let gross = coerce_amount(input.gross);
    let denial = participation_exemption(input).err();
    let rate = if denial.is_some() { CORPORATE_DIVIDEND_RATE } else { Decimal::ZERO };
    let tax = gross * rate;

    CompanyDividendResult {
        gross,
        exempt: denial.is_none(),
        denial,
        rate,
        tax,
        net: gross - tax,
    }
}
