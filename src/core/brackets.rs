use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A band of a progressive schedule. `up_to` is the inclusive upper bound of
/// the band; `None` marks the open top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
}

/// Progressive tax schedule: each rate applies only to the slice of the
/// amount that falls inside its band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxBrackets(Vec<TaxBracket>);

impl TaxBrackets {
    /// Bands must be sorted by `up_to` with the open band last.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        TaxBrackets(brackets)
    }

    /// A single rate applied to everything.
    pub fn flat(rate: Decimal) -> Self {
        TaxBrackets(vec![TaxBracket { up_to: None, rate }])
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }

    /// Tax due on `amount`. Non-positive amounts owe nothing.
    pub fn tax_on(&self, amount: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for bracket in &self.0 {
            if amount <= lower {
                break;
            }
            let upper = bracket.up_to.map_or(amount, |up_to| up_to.min(amount));
            if upper > lower {
                tax += (upper - lower) * bracket.rate;
            }
            match bracket.up_to {
                Some(up_to) => lower = up_to,
                None => break,
            }
        }
        tax
    }

    /// Marginal rate of the highest band. Used to bound the gross salary
    /// search from above.
    pub fn top_rate(&self) -> Decimal {
        self.0
            .iter()
            .map(|b| b.rate)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Marginal rate applying to the next unit above `amount`.
    pub fn marginal_rate(&self, amount: Decimal) -> Decimal {
        self.0
            .iter()
            .find(|b| b.up_to.is_none_or(|up_to| amount < up_to))
            .or(self.0.last())
            .map_or(Decimal::ZERO, |b| b.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gpm() -> TaxBrackets {
        TaxBrackets::new(vec![
            TaxBracket { up_to: Some(dec!(10544.40)), rate: dec!(0.20) },
            TaxBracket { up_to: None, rate: dec!(0.32) },
        ])
    }

    #[test]
    fn flat_rate() {
        assert_eq!(TaxBrackets::flat(dec!(0.15)).tax_on(dec!(1000)), dec!(150));
    }

    #[test]
    fn amount_inside_first_band() {
        assert_eq!(gpm().tax_on(dec!(1000)), dec!(200));
        assert_eq!(gpm().tax_on(dec!(10544.40)), dec!(2108.88));
    }

    #[test]
    fn amount_spanning_bands() {
        // 10544.40 @ 20% + 455.60 @ 32%
        assert_eq!(gpm().tax_on(dec!(11000)), dec!(2108.88) + dec!(145.792));
    }

    #[test]
    fn non_positive_amounts_owe_nothing() {
        assert_eq!(gpm().tax_on(dec!(0)), Decimal::ZERO);
        assert_eq!(gpm().tax_on(dec!(-50)), Decimal::ZERO);
    }

    #[test]
    fn rates() {
        assert_eq!(gpm().top_rate(), dec!(0.32));
        assert_eq!(gpm().marginal_rate(dec!(500)), dec!(0.20));
        assert_eq!(gpm().marginal_rate(dec!(20000)), dec!(0.32));
    }
}
