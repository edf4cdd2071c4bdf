//! Monetary amounts in Lithuanian words, as printed on invoices
//! ("suma žodžiais").

pub mod currencies;

use super::amount::{coerce_amount, round_money};
use currencies::{Currency, Unit, FALLBACK_MINOR};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Grammatical gender of the noun being counted. Only the numerals 1-9
/// agree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Which of a noun's three counted forms follows a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// vienas euras
    Single,
    /// du eurai
    Few,
    /// dešimt eurų, vienuolika eurų, nulis eurų
    Many,
}

impl Form {
    /// Chosen by the last two digits: 11-19 and a trailing 0 take the
    /// genitive plural, a trailing 1 the singular, 2-9 the plural.
    pub fn for_count(n: u128) -> Form {
        let last_two = n % 100;
        let last = n % 10;
        if (11..=19).contains(&last_two) || last == 0 {
            Form::Many
        } else if last == 1 {
            Form::Single
        } else {
            Form::Few
        }
    }
}

const ZERO: &str = "nulis";

const ONES_MASCULINE: [&str; 10] = [
    "", "vienas", "du", "trys", "keturi", "penki", "šeši", "septyni", "aštuoni", "devyni",
];

const ONES_FEMININE: [&str; 10] = [
    "", "viena", "dvi", "trys", "keturios", "penkios", "šešios", "septynios", "aštuonios",
    "devynios",
];

const TEENS: [&str; 10] = [
    "dešimt",
    "vienuolika",
    "dvylika",
    "trylika",
    "keturiolika",
    "penkiolika",
    "šešiolika",
    "septyniolika",
    "aštuoniolika",
    "devyniolika",
];

const TENS: [&str; 10] = [
    "",
    "",
    "dvidešimt",
    "trisdešimt",
    "keturiasdešimt",
    "penkiasdešimt",
    "šešiasdešimt",
    "septyniasdešimt",
    "aštuoniasdešimt",
    "devyniasdešimt",
];

const HUNDRED: Unit = Unit::new("šimtas", "šimtai", "šimtų", Gender::Masculine);

/// Scale words, largest first.
const SCALES: [(u128, Unit); 3] = [
    (1_000_000_000, Unit::new("milijardas", "milijardai", "milijardų", Gender::Masculine)),
    (1_000_000, Unit::new("milijonas", "milijonai", "milijonų", Gender::Masculine)),
    (1_000, Unit::new("tūkstantis", "tūkstančiai", "tūkstančių", Gender::Masculine)),
];

fn ones(digit: u128, gender: Gender) -> &'static str {
    let table = match gender {
        Gender::Masculine => &ONES_MASCULINE,
        Gender::Feminine => &ONES_FEMININE,
    };
    table[digit as usize]
}

/// Words for 1..=999.
fn group_words(n: u128, gender: Gender, words: &mut Vec<&'static str>) {
    let hundreds = n / 100;
    let rest = n % 100;

    match hundreds {
        0 => {}
        1 => words.push(HUNDRED.single),
        h => {
            words.push(ones(h, Gender::Masculine));
            words.push(HUNDRED.few);
        }
    }

    match rest {
        0 => {}
        10..=19 => words.push(TEENS[(rest - 10) as usize]),
        _ => {
            let tens = rest / 10;
            let unit = rest % 10;
            if tens > 0 {
                words.push(TENS[tens as usize]);
            }
            if unit > 0 {
                words.push(ones(unit, gender));
            }
        }
    }
}

fn integer_words(mut n: u128, gender: Gender, words: &mut Vec<&'static str>) {
    for (scale, name) in SCALES {
        let count = n / scale;
        if count == 0 {
            continue;
        }
        if count >= 1000 {
            // beyond the largest scale word: "tūkstantis milijardų"
            integer_words(count, Gender::Masculine, words);
        } else {
            group_words(count, Gender::Masculine, words);
        }
        words.push(name.form(Form::for_count(count)));
        n %= scale;
    }
    if n > 0 {
        group_words(n, gender, words);
    }
}

/// A whole number in words, agreeing with a noun of `gender`.
pub fn number_in_words(n: u128, gender: Gender) -> String {
    if n == 0 {
        return ZERO.to_string();
    }
    let mut words = Vec::new();
    integer_words(n, gender, &mut words);
    words.join(" ")
}

/// `n` followed by the correctly declined `unit`.
fn counted(n: u128, unit: &Unit) -> String {
    format!("{} {}", number_in_words(n, unit.gender), unit.form(Form::for_count(n)))
}

/// Currency assumed when none is given.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Converts a monetary amount to Lithuanian words.
///
/// The amount is rounded to cents first. Cents are appended only when
/// nonzero and when the currency has a subunit in use; otherwise the
/// fraction is dropped. Unknown currency codes are counted as
/// indeclinable masculine nouns spelled as the code itself, with cents
/// as the subunit. A blank code means euros.
///
/// ```
/// use dokcalc::core::words::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     amount_in_words(dec!(1250.50), "EUR"),
///     "vienas tūkstantis du šimtai penkiasdešimt eurų ir penkiasdešimt centų"
/// );
/// ```
pub fn amount_in_words(amount: Decimal, currency_code: &str) -> String {
    let amount = round_money(coerce_amount(amount));
    let whole = amount.trunc();
    let cents = ((amount - whole) * dec!(100)).to_u128().unwrap_or(0);
    let whole = whole.to_u128().unwrap_or(0);

    let code = match currency_code.trim() {
        "" => DEFAULT_CURRENCY,
        code => code,
    };

    let (major_phrase, minor) = match currencies::find(code) {
        Some(Currency { major, minor, .. }) => (counted(whole, major), *minor),
        None => {
            log::warn!("Unknown currency {:?}, spelling the code as the unit", code);
            let code = code.to_uppercase();
            (format!("{} {}", number_in_words(whole, Gender::Masculine), code), Some(FALLBACK_MINOR))
        }
    };

    match minor {
        Some(minor) if cents > 0 => format!("{} ir {}", major_phrase, counted(cents, &minor)),
        _ => major_phrase,
    }
}

/// Upper-cases the first letter, for the start of a printed sentence.
pub fn capitalize(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur(amount: Decimal) -> String {
        amount_in_words(amount, "EUR")
    }

    #[test]
    fn form_selection() {
        assert_eq!(Form::for_count(0), Form::Many);
        assert_eq!(Form::for_count(1), Form::Single);
        assert_eq!(Form::for_count(2), Form::Few);
        assert_eq!(Form::for_count(9), Form::Few);
        assert_eq!(Form::for_count(10), Form::Many);
        assert_eq!(Form::for_count(11), Form::Many);
        assert_eq!(Form::for_count(19), Form::Many);
        assert_eq!(Form::for_count(21), Form::Single);
        assert_eq!(Form::for_count(111), Form::Many);
        assert_eq!(Form::for_count(112), Form::Many);
        assert_eq!(Form::for_count(122), Form::Few);
        assert_eq!(Form::for_count(1000), Form::Many);
    }

    #[test]
    fn small_numbers() {
        assert_eq!(number_in_words(0, Gender::Masculine), "nulis");
        assert_eq!(number_in_words(7, Gender::Masculine), "septyni");
        assert_eq!(number_in_words(7, Gender::Feminine), "septynios");
        assert_eq!(number_in_words(10, Gender::Feminine), "dešimt");
        assert_eq!(number_in_words(15, Gender::Masculine), "penkiolika");
        assert_eq!(number_in_words(40, Gender::Masculine), "keturiasdešimt");
        assert_eq!(number_in_words(99, Gender::Feminine), "devyniasdešimt devynios");
    }

    #[test]
    fn hundreds() {
        assert_eq!(number_in_words(100, Gender::Masculine), "šimtas");
        assert_eq!(number_in_words(101, Gender::Feminine), "šimtas viena");
        assert_eq!(number_in_words(200, Gender::Feminine), "du šimtai");
        assert_eq!(number_in_words(919, Gender::Masculine), "devyni šimtai devyniolika");
    }

    #[test]
    fn scales() {
        assert_eq!(number_in_words(1000, Gender::Masculine), "vienas tūkstantis");
        assert_eq!(number_in_words(2002, Gender::Feminine), "du tūkstančiai dvi");
        assert_eq!(number_in_words(11_000, Gender::Masculine), "vienuolika tūkstančių");
        assert_eq!(number_in_words(21_000, Gender::Masculine), "dvidešimt vienas tūkstantis");
        assert_eq!(number_in_words(1_000_000, Gender::Masculine), "vienas milijonas");
        assert_eq!(
            number_in_words(3_512_013, Gender::Masculine),
            "trys milijonai penki šimtai dvylika tūkstančių trylika"
        );
        assert_eq!(number_in_words(2_000_000_000, Gender::Masculine), "du milijardai");
        assert_eq!(
            number_in_words(5_000_000_000_000, Gender::Masculine),
            "penki tūkstančiai milijardų"
        );
    }

    #[test]
    fn zero_euros() {
        let words = eur(Decimal::ZERO);
        assert_eq!(words, "nulis eurų");
        assert!(words.starts_with("nulis"));
        assert!(words.ends_with("eurų"));
    }

    #[test]
    fn thousand_two_hundred_fifty_and_a_half() {
        assert_eq!(
            eur(dec!(1250.50)),
            "vienas tūkstantis du šimtai penkiasdešimt eurų ir penkiasdešimt centų"
        );
    }

    #[test]
    fn unit_forms_follow_last_two_digits() {
        assert_eq!(eur(dec!(1)), "vienas euras");
        assert_eq!(eur(dec!(2)), "du eurai");
        assert_eq!(eur(dec!(21.01)), "dvidešimt vienas euras ir vienas centas");
        assert_eq!(eur(dec!(11)), "vienuolika eurų");
        assert_eq!(eur(dec!(111)), "šimtas vienuolika eurų");
        assert_eq!(eur(dec!(1013)), "vienas tūkstantis trylika eurų");
        assert_eq!(eur(dec!(15000)), "penkiolika tūkstančių eurų");
        assert_eq!(eur(dec!(0.12)), "nulis eurų ir dvylika centų");
    }

    #[test]
    fn feminine_currencies_agree() {
        assert_eq!(amount_in_words(dec!(1), "TRY"), "viena lira");
        assert_eq!(amount_in_words(dec!(2.02), "UAH"), "dvi grivinos ir dvi kapeikos");
        assert_eq!(amount_in_words(dec!(2000), "SEK"), "du tūkstančiai kronų");
        assert_eq!(amount_in_words(dec!(31), "PLN"), "trisdešimt vienas zlotas");
    }

    #[test]
    fn currency_without_subunit_drops_fraction() {
        assert_eq!(amount_in_words(dec!(5000.00), "JPY"), "penki tūkstančiai jenų");
        let words = amount_in_words(dec!(5000.75), "JPY");
        assert_eq!(words, "penki tūkstančiai jenų");
        assert!(!words.contains(" ir "));
    }

    #[test]
    fn cents_round_and_carry() {
        assert_eq!(eur(dec!(0.999)), "vienas euras");
        assert_eq!(eur(dec!(5.005)), "penki eurai ir vienas centas");
        assert_eq!(eur(dec!(7.00)), "septyni eurai");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        assert_eq!(amount_in_words(dec!(3.10), "xyz"), "trys XYZ ir dešimt centų");
    }

    #[test]
    fn blank_currency_is_euro() {
        assert_eq!(amount_in_words(dec!(3), ""), "trys eurai");
        assert_eq!(amount_in_words(dec!(3), "  "), "trys eurai");
        assert_eq!(amount_in_words(dec!(21.01), " \t"), "dvidešimt vienas euras ir vienas centas");
    }

    #[test]
    fn negative_amount_is_zero() {
        assert_eq!(eur(dec!(-4)), "nulis eurų");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("šimtas eurų"), "Šimtas eurų");
        assert_eq!(capitalize(""), "");
    }
}
