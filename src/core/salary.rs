//! Monthly salary calculations under Lithuanian payroll rules.
//!
//! Gross to net is a direct computation. Net to gross has no closed form
//! because the tax-free allowance (NPD) itself depends on gross, so it is
//! solved by bisection over the forward function.

use super::amount::{coerce_amount, round_money};
use super::brackets::{TaxBracket, TaxBrackets};
use super::error::PolicyError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Number of bisection steps used to invert [`net_from_gross`]. Fifty halvings
/// of the initial bracket leave an error far below one cent.
pub const GROSS_SEARCH_ITERATIONS: usize = 50;

/// Which tax-free allowance applies to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NpdMode {
    /// Income-dependent allowance.
    #[default]
    Standard,
    /// No allowance claimed (e.g. not the main workplace).
    None,
    /// Flat basic allowance regardless of income.
    Basic,
    /// Work capacity of 0-25%.
    WorkCapacity0To25,
    /// Work capacity of 30-55%.
    WorkCapacity30To55,
}

impl NpdMode {
    pub fn from_str(s: &str) -> Option<NpdMode> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "standard" | "" => Some(NpdMode::Standard),
            "none" => Some(NpdMode::None),
            "basic" | "747" => Some(NpdMode::Basic),
            "work-capacity-0-to-25" | "1127" => Some(NpdMode::WorkCapacity0To25),
            "work-capacity-30-to-55" | "1057" => Some(NpdMode::WorkCapacity30To55),
            _ => None,
        }
    }
}

/// Whether the entered amount is the gross ("ant popieriaus") or net
/// ("į rankas") salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Gross,
    Net,
}

/// Piecewise-linear NPD schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpdSchedule {
    /// Full allowance, granted up to `first_threshold` inclusive.
    pub basic: Decimal,
    pub first_threshold: Decimal,
    pub first_coefficient: Decimal,
    pub second_threshold: Decimal,
    /// Above `second_threshold`: `second_base - second_coefficient * (gross - second_offset)`.
    pub second_base: Decimal,
    pub second_coefficient: Decimal,
    pub second_offset: Decimal,
    pub work_capacity_0_to_25: Decimal,
    pub work_capacity_30_to_55: Decimal,
}

/// All constants of a payroll tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryPolicy {
    pub year: i32,
    pub npd: NpdSchedule,
    /// GPM bands applied to monthly taxable income.
    pub income_tax: TaxBrackets,
    /// Employee VSD (pension social insurance).
    pub pension_rate: Decimal,
    /// Employee PSD (compulsory health insurance).
    pub health_rate: Decimal,
    /// Optional II pillar pension accumulation.
    pub pension_supplement_rate: Decimal,
    /// Employer social insurance contribution.
    pub employer_rate: Decimal,
}

impl SalaryPolicy {
    /// Rules in force for 2025.
    pub fn year_2025() -> Self {
        SalaryPolicy {
            year: 2025,
            npd: NpdSchedule {
                basic: dec!(747),
                first_threshold: dec!(1038),
                first_coefficient: dec!(0.49),
                second_threshold: dec!(2387.29),
                second_base: dec!(400),
                second_coefficient: dec!(0.18),
                second_offset: dec!(642),
                work_capacity_0_to_25: dec!(1127),
                work_capacity_30_to_55: dec!(1057),
            },
            // 60 average wages per year, spread over 12 months
            income_tax: TaxBrackets::new(vec![
                TaxBracket { up_to: Some(dec!(10544.40)), rate: dec!(0.20) },
                TaxBracket { up_to: None, rate: dec!(0.32) },
            ]),
            pension_rate: dec!(0.1252),
            health_rate: dec!(0.0698),
            pension_supplement_rate: dec!(0.03),
            employer_rate: dec!(0.0177),
        }
    }

    /// Load a policy from JSON, e.g. to try next year's constants.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, PolicyError> {
        let policy: SalaryPolicy = serde_json::from_reader(reader)?;
        policy.validate()?;
        log::debug!("Loaded salary policy for {}", policy.year);
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        let brackets = self.income_tax.brackets();
        if brackets.is_empty() {
            return Err(PolicyError::NoIncomeTaxBrackets);
        }
        let mut previous = Decimal::MIN;
        for (i, bracket) in brackets.iter().enumerate() {
            match bracket.up_to {
                Some(up_to) if up_to > previous => previous = up_to,
                None if i == brackets.len() - 1 => {}
                _ => return Err(PolicyError::UnorderedBrackets { index: i }),
            }
        }
        let burden = self.income_tax.top_rate() + self.social_rate(true);
        if burden >= Decimal::ONE {
            return Err(PolicyError::RatesTooHigh { burden });
        }
        Ok(())
    }

    /// Employee social insurance rate, with or without the pension supplement.
    pub fn social_rate(&self, pension_supplement: bool) -> Decimal {
        let supplement = if pension_supplement {
            self.pension_supplement_rate
        } else {
            Decimal::ZERO
        };
        self.pension_rate + self.health_rate + supplement
    }
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        SalaryPolicy::year_2025()
    }
}

/// Per-employee choices that change the deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryOptions {
    #[serde(default)]
    pub npd_mode: NpdMode,
    #[serde(default)]
    pub pension_supplement: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryInput {
    pub amount: Decimal,
    pub direction: Direction,
    pub options: SalaryOptions,
}

impl SalaryInput {
    pub fn gross(amount: Decimal) -> Self {
        SalaryInput { amount, direction: Direction::Gross, options: SalaryOptions::default() }
    }

    pub fn net(amount: Decimal) -> Self {
        SalaryInput { amount, direction: Direction::Net, options: SalaryOptions::default() }
    }

    pub fn with_npd_mode(mut self, npd_mode: NpdMode) -> Self {
        self.options.npd_mode = npd_mode;
        self
    }

    pub fn with_pension_supplement(mut self, pension_supplement: bool) -> Self {
        self.options.pension_supplement = pension_supplement;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SalaryResult {
    pub gross: Decimal,
    pub net: Decimal,
    pub npd: Decimal,
    pub income_tax: Decimal,
    /// Sum of the employee's pension, health and supplement contributions.
    pub social_insurance: Decimal,
    pub pension_insurance: Decimal,
    pub health_insurance: Decimal,
    pub pension_supplement: Decimal,
    pub employer_contribution: Decimal,
    pub total_employer_cost: Decimal,
}

impl SalaryResult {
    /// Every field rounded to cents, for display.
    pub fn rounded(&self) -> SalaryResult {
        SalaryResult {
            gross: round_money(self.gross),
            net: round_money(self.net),
            npd: round_money(self.npd),
            income_tax: round_money(self.income_tax),
            social_insurance: round_money(self.social_insurance),
            pension_insurance: round_money(self.pension_insurance),
            health_insurance: round_money(self.health_insurance),
            pension_supplement: round_money(self.pension_supplement),
            employer_contribution: round_money(self.employer_contribution),
            total_employer_cost: round_money(self.total_employer_cost),
        }
    }
}

/// Monthly tax-free allowance for `gross`.
pub fn calculate_npd(gross: Decimal, mode: NpdMode, policy: &SalaryPolicy) -> Decimal {
    let npd = &policy.npd;
    match mode {
        NpdMode::None => Decimal::ZERO,
        NpdMode::Basic => npd.basic,
        NpdMode::WorkCapacity0To25 => npd.work_capacity_0_to_25,
        NpdMode::WorkCapacity30To55 => npd.work_capacity_30_to_55,
        NpdMode::Standard => {
            let gross = coerce_amount(gross);
            let allowance = if gross <= npd.first_threshold {
                npd.basic
            } else if gross <= npd.second_threshold {
                npd.basic - npd.first_coefficient * (gross - npd.first_threshold)
            } else {
                npd.second_base - npd.second_coefficient * (gross - npd.second_offset)
            };
            allowance.max(Decimal::ZERO)
        }
    }
}

/// Forward computation: deductions and net pay for a gross salary.
pub fn net_from_gross(gross: Decimal, options: SalaryOptions, policy: &SalaryPolicy) -> SalaryResult {
    deductions(coerce_amount(gross), options, policy)
}

/// Deductions for an already coerced gross. The inverse search may try
/// gross values above `MAX_AMOUNT`, so this does not coerce again.
fn deductions(gross: Decimal, options: SalaryOptions, policy: &SalaryPolicy) -> SalaryResult {
    let npd = calculate_npd(gross, options.npd_mode, policy);
    let income_tax = policy.income_tax.tax_on(gross - npd).max(Decimal::ZERO);

    let pension_insurance = gross * policy.pension_rate;
    let health_insurance = gross * policy.health_rate;
    let pension_supplement = if options.pension_supplement {
        gross * policy.pension_supplement_rate
    } else {
        Decimal::ZERO
    };
    let social_insurance = pension_insurance + health_insurance + pension_supplement;

    let employer_contribution = gross * policy.employer_rate;

    SalaryResult {
        gross,
        net: gross - income_tax - social_insurance,
        npd,
        income_tax,
        social_insurance,
        pension_insurance,
        health_insurance,
        pension_supplement,
        employer_contribution,
        total_employer_cost: gross + employer_contribution,
    }
}

/// Inverse computation: the gross salary that pays out `net`.
///
/// The search starts from `[net, net / (1 - top income rate - social rate)]`;
/// the upper end is the gross needed with no allowance at the highest rate.
pub fn gross_from_net(net: Decimal, options: SalaryOptions, policy: &SalaryPolicy) -> SalaryResult {
    let target = coerce_amount(net);
    let burden = policy.income_tax.top_rate() + policy.social_rate(options.pension_supplement);
    if target.is_zero() || burden >= Decimal::ONE {
        return net_from_gross(Decimal::ZERO, options, policy);
    }

    let two = dec!(2);
    let mut low = target;
    let mut high = target / (Decimal::ONE - burden);
    for _ in 0..GROSS_SEARCH_ITERATIONS {
        let mid = (low + high) / two;
        if deductions(mid, options, policy).net < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    let gross = (low + high) / two;
    log::debug!("Solved gross {} for net {} in {} steps", gross, target, GROSS_SEARCH_ITERATIONS);
    deductions(gross, options, policy)
}

/// Entry point used by the calculators: dispatches on the entered direction.
pub fn calculate_salary(input: &SalaryInput, policy: &SalaryPolicy) -> SalaryResult {
    match input.direction {
        Direction::Gross => net_from_gross(input.amount, input.options, policy),
        Direction::Net => gross_from_net(input.amount, input.options, policy),
    }
}
