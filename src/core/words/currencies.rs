//! Currency unit declensions.
//!
//! Each unit carries its three counted forms and grammatical gender:
//! `single` after 1 (21, 101...), `few` after 2-9, `many` after 0 and 10-19.

use super::{Form, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub single: &'static str,
    pub few: &'static str,
    pub many: &'static str,
    pub gender: Gender,
}

impl Unit {
    pub const fn new(single: &'static str, few: &'static str, many: &'static str, gender: Gender) -> Self {
        Unit { single, few, many, gender }
    }

    pub fn form(&self, form: Form) -> &'static str {
        match form {
            Form::Single => self.single,
            Form::Few => self.few,
            Form::Many => self.many,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub major: Unit,
    /// `None` for currencies whose subunit is not used; fractions are dropped.
    pub minor: Option<Unit>,
}

/// Builds a unit from a stem and its declension pattern.
macro_rules! unit {
    (masc_as $stem:literal) => {
        Unit::new(concat!($stem, "as"), concat!($stem, "ai"), concat!($stem, "ų"), Gender::Masculine)
    };
    (masc_is $stem:literal) => {
        Unit::new(concat!($stem, "is"), concat!($stem, "iai"), concat!($stem, "ių"), Gender::Masculine)
    };
    (fem_a $stem:literal) => {
        Unit::new(concat!($stem, "a"), concat!($stem, "os"), concat!($stem, "ų"), Gender::Feminine)
    };
    (fem_e $stem:literal) => {
        Unit::new(concat!($stem, "ė"), concat!($stem, "ės"), concat!($stem, "ių"), Gender::Feminine)
    };
}

macro_rules! currencies {
    ($($code:literal => $major:expr, $minor:expr;)*) => {
        pub static CURRENCIES: &[Currency] = &[
            $(Currency { code: $code, major: $major, minor: $minor },)*
        ];
    };
}

const CENT: Unit = unit!(masc_as "cent");
const CENTAVO: Unit = unit!(masc_as "centav");
const CENTIMO: Unit = unit!(masc_as "sentim");
const SANTIM: Unit = unit!(masc_as "santim");
const DOLLAR: Unit = unit!(masc_is "doler");
const POUND: Unit = unit!(masc_as "svar");
const PESO: Unit = unit!(masc_as "pes");
const FRANC: Unit = unit!(masc_as "frank");
const KRONA: Unit = unit!(fem_a "kron");
const ORE: Unit = unit!(fem_e "er");
const RUPEE: Unit = unit!(fem_a "rupij");
const PAISA: Unit = unit!(fem_a "pais");
const RUBLE: Unit = unit!(masc_is "rubl");
const KOPECK: Unit = unit!(fem_a "kapeik");
const LEU: Unit = unit!(fem_a "lėj");
const BAN: Unit = unit!(masc_is "ban");
const DINAR: Unit = unit!(masc_as "dinar");
const RIAL: Unit = unit!(masc_as "rial");
const DIRHAM: Unit = unit!(masc_as "dirham");
const PIASTRE: Unit = unit!(masc_as "piastr");
const SHILLING: Unit = unit!(masc_as "šiling");
const TIYIN: Unit = unit!(masc_as "tyin");

currencies! {
    // Europe
    "EUR" => unit!(masc_as "eur"), Some(CENT);
    "LTL" => unit!(masc_as "lit"), Some(CENT);
    "GBP" => POUND, Some(unit!(masc_as "pens"));
    "CHF" => FRANC, Some(unit!(masc_as "rapen"));
    "PLN" => unit!(masc_as "zlot"), Some(unit!(masc_is "graš"));
    "SEK" => KRONA, Some(ORE);
    "NOK" => KRONA, Some(ORE);
    "DKK" => KRONA, Some(ORE);
    "ISK" => KRONA, None;
    "CZK" => KRONA, Some(unit!(masc_is "haler"));
    "HUF" => unit!(masc_as "forint"), None;
    "RON" => LEU, Some(BAN);
    "MDL" => LEU, Some(BAN);
    "BGN" => unit!(masc_as "lev"), Some(unit!(fem_a "stotink"));
    "RSD" => DINAR, None;
    "MKD" => unit!(masc_as "denar"), None;
    "BAM" => unit!(fem_e "mark"), Some(unit!(masc_as "fening"));
    "ALL" => unit!(masc_as "lek"), None;
    "UAH" => unit!(fem_a "grivin"), Some(KOPECK);
    "BYN" => RUBLE, Some(KOPECK);
    "RUB" => RUBLE, Some(KOPECK);
    "TRY" => unit!(fem_a "lir"), Some(unit!(masc_as "kuruš"));
    // Caucasus and Central Asia
    "GEL" => unit!(masc_is "lar"), Some(unit!(masc_is "tetr"));
    "AMD" => unit!(masc_as "dram"), None;
    "AZN" => unit!(masc_as "manat"), Some(unit!(masc_as "kapik"));
    "KZT" => unit!(fem_e "teng"), Some(TIYIN);
    "KGS" => unit!(masc_as "som"), Some(TIYIN);
    "UZS" => unit!(masc_as "sum"), None;
    "MNT" => unit!(masc_as "tugrik"), None;
    "AFN" => unit!(masc_is "afgan"), None;
    // Asia and Oceania
    "JPY" => unit!(fem_a "jen"), None;
    "CNY" => unit!(masc_is "juan"), Some(unit!(masc_is "fen"));
    "KRW" => unit!(masc_as "von"), None;
    "INR" => RUPEE, Some(PAISA);
    "PKR" => RUPEE, None;
    "LKR" => RUPEE, Some(CENT);
    "NPR" => RUPEE, Some(PAISA);
    "IDR" => RUPEE, None;
    "BDT" => unit!(fem_a "tak"), Some(PAISA);
    "MVR" => unit!(fem_a "rufij"), Some(unit!(masc_is "lar"));
    "THB" => unit!(masc_as "bat"), Some(unit!(masc_as "satang"));
    "VND" => unit!(masc_as "dong"), None;
    "MYR" => unit!(masc_as "ringit"), Some(unit!(masc_as "sen"));
    "LAK" => unit!(masc_as "kip"), None;
    "KHR" => unit!(masc_is "riel"), None;
    "MMK" => unit!(masc_as "kijat"), None;
    "MOP" => unit!(fem_a "patak"), Some(unit!(masc_as "av"));
    "HKD" => DOLLAR, Some(CENT);
    "SGD" => DOLLAR, Some(CENT);
    "TWD" => DOLLAR, Some(CENT);
    "BND" => DOLLAR, Some(CENT);
    "PHP" => PESO, Some(CENTIMO);
    "AUD" => DOLLAR, Some(CENT);
    "NZD" => DOLLAR, Some(CENT);
    "FJD" => DOLLAR, Some(CENT);
    // Middle East
    "ILS" => unit!(masc_is "šekel"), Some(unit!(fem_a "agor"));
    "AED" => DIRHAM, Some(unit!(masc_as "fils"));
    "SAR" => RIAL, Some(unit!(masc_as "halal"));
    "QAR" => RIAL, Some(DIRHAM);
    "YER" => RIAL, None;
    "IRR" => RIAL, None;
    "IQD" => DINAR, None;
    "SYP" => POUND, Some(PIASTRE);
    "LBP" => POUND, None;
    // Africa
    "EGP" => POUND, Some(PIASTRE);
    "SDG" => POUND, Some(PIASTRE);
    "MAD" => DIRHAM, Some(SANTIM);
    "DZD" => DINAR, Some(SANTIM);
    "TND" => DINAR, None;
    "ZAR" => unit!(masc_as "rand"), Some(CENT);
    "NAD" => DOLLAR, Some(CENT);
    "NGN" => unit!(fem_a "nair"), Some(unit!(masc_as "kob"));
    "KES" => SHILLING, Some(CENT);
    "TZS" => SHILLING, Some(CENT);
    "UGX" => SHILLING, None;
    "SOS" => SHILLING, Some(CENT);
    "ETB" => unit!(masc_as "bir"), Some(SANTIM);
    "XOF" => FRANC, None;
    "XAF" => FRANC, None;
    "CDF" => FRANC, Some(SANTIM);
    "RWF" => FRANC, None;
    "MGA" => unit!(masc_is "ariar"), None;
    "MUR" => RUPEE, Some(CENT);
    "SCR" => RUPEE, Some(CENT);
    "MZN" => unit!(masc_is "metikal"), Some(CENTAVO);
    "AOA" => unit!(fem_a "kvanz"), Some(CENTIMO);
    // Americas
    "USD" => DOLLAR, Some(CENT);
    "CAD" => DOLLAR, Some(CENT);
    "JMD" => DOLLAR, Some(CENT);
    "TTD" => DOLLAR, Some(CENT);
    "BSD" => DOLLAR, Some(CENT);
    "MXN" => PESO, Some(CENTAVO);
    "ARS" => PESO, Some(CENTAVO);
    "CLP" => PESO, None;
    "COP" => PESO, Some(CENTAVO);
    "DOP" => PESO, Some(CENTAVO);
    "UYU" => PESO, Some(unit!(masc_as "centezim"));
    "BRL" => unit!(masc_as "real"), Some(CENTAVO);
    "PEN" => unit!(masc_is "sol"), Some(CENTIMO);
    "BOB" => unit!(masc_as "bolivian"), Some(CENTAVO);
    "VES" => unit!(masc_as "bolivar"), Some(CENTIMO);
    "PYG" => unit!(masc_is "guaran"), None;
    "NIO" => unit!(fem_a "kordob"), Some(CENTAVO);
    "CRC" => unit!(masc_as "kolon"), Some(CENTIMO);
    "GTQ" => unit!(masc_is "kecal"), Some(CENTAVO);
}

/// Case-insensitive lookup by ISO 4217 code.
pub fn find(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Minor unit used when the currency code is not in the table.
pub const FALLBACK_MINOR: Unit = CENT;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_upper_case() {
        let mut seen = HashSet::new();
        for currency in CURRENCIES {
            assert!(seen.insert(currency.code), "duplicate {}", currency.code);
            assert_eq!(currency.code, currency.code.to_uppercase());
            assert_eq!(currency.code.len(), 3);
        }
        assert!(CURRENCIES.len() >= 80);
    }

    #[test]
    fn declension_patterns() {
        let eur = find("EUR").unwrap();
        assert_eq!((eur.major.single, eur.major.few, eur.major.many), ("euras", "eurai", "eurų"));
        let usd = find("usd").unwrap();
        assert_eq!((usd.major.single, usd.major.few, usd.major.many), ("doleris", "doleriai", "dolerių"));
        let sek = find(" sek ").unwrap();
        assert_eq!(sek.major.form(Form::Few), "kronos");
        assert_eq!(sek.minor.unwrap().form(Form::Many), "erių");
        assert_eq!(sek.major.gender, Gender::Feminine);
    }

    #[test]
    fn currencies_without_subunit() {
        assert_eq!(find("JPY").unwrap().minor, None);
        assert_eq!(find("HUF").unwrap().minor, None);
        assert!(find("EUR").unwrap().minor.is_some());
    }

    #[test]
    fn unknown_code() {
        assert_eq!(find("XYZ"), None);
        assert_eq!(find(""), None);
    }
}
