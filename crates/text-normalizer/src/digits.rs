//! Digit-by-digit spelling.

use norm_core::Lang;

const ES_DIGITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const EN_DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Spoken names of the digits 0-9.
pub fn digit_names(lang: Lang) -> &'static [&'static str; 10] {
    match lang {
        Lang::Es => &ES_DIGITS,
        Lang::En => &EN_DIGITS,
    }
}

/// Spell a digit string one character at a time, space separated.
///
/// Non-digit characters are passed through as their own item.
pub fn spell_digits(s: &str, lang: Lang) -> String {
    let names = digit_names(lang);
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => names[d as usize].to_string(),
            _ => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
