//! Number to words conversion for Spanish and English.

use norm_core::Lang;

/// Convert a non-negative integer to words.
///
/// Falls back to the bare numeral when the number is beyond the largest
/// scale the language table covers.
pub fn num_to_words(num: u64, lang: Lang) -> String {
    let words = match lang {
        Lang::Es => num_to_words_es(num),
        Lang::En => num_to_words_en(num),
    };
    words.unwrap_or_else(|| num.to_string())
}

// ============================================================================
// Spanish number conversion
// ============================================================================

const ES_UNITS: [&str; 30] = [
    "",
    "uno",
    "dos",
    "tres",
    "cuatro",
    "cinco",
    "seis",
    "siete",
    "ocho",
    "nueve",
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const ES_TENS: [&str; 10] = [
    "",
    "",
    "",
    "treinta",
    "cuarenta",
    "cincuenta",
    "sesenta",
    "setenta",
    "ochenta",
    "noventa",
];

const ES_HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Long-scale names: (value, singular, plural).
const ES_SCALES: [(u64, &str, &str); 2] = [
    (1_000_000_000_000, "billón", "billones"),
    (1_000_000, "millón", "millones"),
];

/// First value without a Spanish name (un trillón).
const ES_LIMIT: u64 = 1_000_000_000_000_000_000;

/// Convert 1..=99 to Spanish words.
fn tens_to_words_es(n: usize) -> String {
    if n < 30 {
        return ES_UNITS[n].to_string();
    }
    let tens = n / 10;
    let ones = n % 10;
    if ones == 0 {
        ES_TENS[tens].to_string()
    } else {
        format!("{} y {}", ES_TENS[tens], ES_UNITS[ones])
    }
}

/// Convert hundreds part (0-999) to Spanish words.
fn hundreds_to_words_es(n: u64) -> String {
    let n = n as usize;
    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return "cien".to_string();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(ES_HUNDREDS[h].to_string());
    }

    let remainder = n % 100;
    if remainder > 0 {
        parts.push(tens_to_words_es(remainder));
    }

    parts.join(" ")
}

/// Shorten a trailing "uno" before a masculine noun or a scale word:
/// "veintiuno" -> "veintiún", "treinta y uno" -> "treinta y un".
pub(crate) fn apocope_es(words: &str) -> String {
    if let Some(head) = words.strip_suffix("veintiuno") {
        format!("{head}veintiún")
    } else if words == "uno" {
        "un".to_string()
    } else if let Some(head) = words.strip_suffix(" uno") {
        format!("{head} un")
    } else {
        words.to_string()
    }
}

/// Convert 1..1_000_000 to Spanish words.
fn below_million_es(n: u64) -> String {
    let thousands = n / 1_000;
    let rest = n % 1_000;

    let mut parts = Vec::new();
    match thousands {
        0 => {}
        1 => parts.push("mil".to_string()),
        _ => parts.push(format!(
            "{} mil",
            apocope_es(&hundreds_to_words_es(thousands))
        )),
    }
    if rest > 0 {
        parts.push(hundreds_to_words_es(rest));
    }

    parts.join(" ")
}

fn positive_to_words_es(n: u64) -> String {
    for (value, singular, plural) in ES_SCALES {
        if n >= value {
            let count = n / value;
            let rest = n % value;
            let head = if count == 1 {
                format!("un {singular}")
            } else {
                format!("{} {plural}", apocope_es(&positive_to_words_es(count)))
            };
            return if rest == 0 {
                head
            } else {
                format!("{head} {}", positive_to_words_es(rest))
            };
        }
    }
    below_million_es(n)
}

/// Convert a number to Spanish words, or `None` past the billones scale.
pub fn num_to_words_es(num: u64) -> Option<String> {
    if num >= ES_LIMIT {
        return None;
    }
    if num == 0 {
        return Some("cero".to_string());
    }
    Some(positive_to_words_es(num))
}

// ============================================================================
// English number conversion
// ============================================================================

const EN_ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const EN_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const EN_SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// First value without an English name (one quadrillion).
const EN_LIMIT: u64 = 1_000_000_000_000_000;

/// Convert hundreds part (0-999) to English words.
fn hundreds_to_words_en(n: u64) -> String {
    let n = n as usize;
    if n == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(format!("{} hundred", EN_ONES[h]));
    }

    let remainder = n % 100;
    if remainder > 0 {
        if remainder < 20 {
            parts.push(EN_ONES[remainder].to_string());
        } else {
            let tens = remainder / 10;
            let ones = remainder % 10;
            if ones > 0 {
                parts.push(format!("{}-{}", EN_TENS[tens], EN_ONES[ones]));
            } else {
                parts.push(EN_TENS[tens].to_string());
            }
        }
    }

    parts.join(" ")
}

/// Convert a number to English words, or `None` past the trillions scale.
pub fn num_to_words_en(num: u64) -> Option<String> {
    if num >= EN_LIMIT {
        return None;
    }
    if num == 0 {
        return Some("zero".to_string());
    }

    let mut parts = Vec::new();
    let mut n = num;

    for (value, name) in EN_SCALES {
        let count = n / value;
        if count > 0 {
            parts.push(hundreds_to_words_en(count));
            parts.push(name.to_string());
        }
        n %= value;
    }

    if n > 0 {
        parts.push(hundreds_to_words_en(n));
    }

    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn es(n: u64) -> String {
        num_to_words_es(n).unwrap()
    }

    fn en(n: u64) -> String {
        num_to_words_en(n).unwrap()
    }

    #[test]
    fn test_spanish_basic() {
        assert_eq!(es(0), "cero");
        assert_eq!(es(1), "uno");
        assert_eq!(es(10), "diez");
        assert_eq!(es(15), "quince");
        assert_eq!(es(16), "dieciséis");
        assert_eq!(es(20), "veinte");
        assert_eq!(es(21), "veintiuno");
        assert_eq!(es(22), "veintidós");
        assert_eq!(es(30), "treinta");
        assert_eq!(es(45), "cuarenta y cinco");
        assert_eq!(es(99), "noventa y nueve");
    }

    #[test]
    fn test_spanish_hundreds() {
        assert_eq!(es(100), "cien");
        assert_eq!(es(101), "ciento uno");
        assert_eq!(es(115), "ciento quince");
        assert_eq!(es(200), "doscientos");
        assert_eq!(es(500), "quinientos");
        assert_eq!(es(999), "novecientos noventa y nueve");
    }

    #[test]
    fn test_spanish_thousands() {
        assert_eq!(es(1000), "mil");
        assert_eq!(es(1500), "mil quinientos");
        assert_eq!(es(1984), "mil novecientos ochenta y cuatro");
        assert_eq!(es(2023), "dos mil veintitrés");
        assert_eq!(es(21_000), "veintiún mil");
        assert_eq!(es(31_000), "treinta y un mil");
        assert_eq!(es(100_000), "cien mil");
        assert_eq!(es(101_000), "ciento un mil");
        assert_eq!(es(999_999), "novecientos noventa y nueve mil novecientos noventa y nueve");
    }

    #[test]
    fn test_spanish_millions() {
        assert_eq!(es(1_000_000), "un millón");
        assert_eq!(es(2_000_000), "dos millones");
        assert_eq!(es(2_500_000), "dos millones quinientos mil");
        assert_eq!(es(21_000_000), "veintiún millones");
        assert_eq!(es(1_000_000_000), "mil millones");
        assert_eq!(es(1_000_000_000_000), "un billón");
    }

    #[test]
    fn test_spanish_apocope() {
        assert_eq!(apocope_es("uno"), "un");
        assert_eq!(apocope_es("veintiuno"), "veintiún");
        assert_eq!(apocope_es("ciento uno"), "ciento un");
        assert_eq!(apocope_es("dos"), "dos");
    }

    #[test]
    fn test_english_basic() {
        assert_eq!(en(0), "zero");
        assert_eq!(en(1), "one");
        assert_eq!(en(10), "ten");
        assert_eq!(en(11), "eleven");
        assert_eq!(en(20), "twenty");
        assert_eq!(en(21), "twenty-one");
        assert_eq!(en(45), "forty-five");
        assert_eq!(en(100), "one hundred");
        assert_eq!(en(101), "one hundred one");
        assert_eq!(en(111), "one hundred eleven");
    }

    #[test]
    fn test_english_thousands() {
        assert_eq!(en(1000), "one thousand");
        assert_eq!(en(2000), "two thousand");
        assert_eq!(en(1001), "one thousand one");
        assert_eq!(en(2345), "two thousand three hundred forty-five");
    }

    #[test]
    fn test_english_millions() {
        assert_eq!(en(1_000_000), "one million");
        assert_eq!(en(2_500_000), "two million five hundred thousand");
        assert_eq!(en(3_000_000_000), "three billion");
        assert_eq!(en(999_000_000_000_000), "nine hundred ninety-nine trillion");
    }

    #[test]
    fn test_fallback_past_largest_scale() {
        assert!(num_to_words_en(EN_LIMIT).is_none());
        assert!(num_to_words_es(ES_LIMIT).is_none());
        assert_eq!(num_to_words(EN_LIMIT, Lang::En), "1000000000000000");
        assert_eq!(num_to_words(42, Lang::Es), "cuarenta y dos");
    }

    #[test]
    fn test_small_numbers_contain_no_digits() {
        for n in (0..20_000).step_by(7) {
            for lang in Lang::ALL {
                let words = num_to_words(n, lang);
                assert!(
                    !words.chars().any(|c| c.is_ascii_digit()),
                    "{lang}: {n} -> {words}"
                );
            }
        }
    }
}
