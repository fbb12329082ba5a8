//! Text-to-value helpers for listing cards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Layout codes in lookup order. The first one found in a title wins.
pub const FLAT_TYPES: [&str; 12] = [
    "1+kk",
    "1+1",
    "2+kk",
    "2+1",
    "3+kk",
    "3+1",
    "4+kk",
    "4+1",
    "5+kk",
    "5+1",
    "6 a více",
    "Atypický",
];

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

static HOUSE_AREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*m².*?pozemek\s*([0-9]+)\s*m²").expect("valid house area regex")
});

static FLAT_AREA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*m²").expect("valid flat area regex"));

/// Concatenates every digit run in `price_text` and parses the result.
///
/// Thousand separators disappear this way ("5 200 000 Kč" -> 5200000), but so
/// does the boundary between unrelated numbers in the same text.
pub fn clean_price(price_text: &str) -> Option<u64> {
    let digits: String = DIGIT_RUN
        .find_iter(price_text)
        .map(|m| m.as_str())
        .collect();

    let price = if digits.is_empty() {
        None
    } else {
        digits.parse::<u64>().ok()
    };
    tracing::debug!(price_text, ?price, "Cleaned price");
    price
}

/// Returns `(usable_area, land_size)` from a house title such as
/// "Prodej rodinného domu 120 m², pozemek 450 m²".
pub fn parse_house_area(title: &str) -> (Option<u32>, Option<u32>) {
    match HOUSE_AREA.captures(title) {
        Some(caps) => (
            caps.get(1).and_then(|m| m.as_str().parse().ok()),
            caps.get(2).and_then(|m| m.as_str().parse().ok()),
        ),
        None => (None, None),
    }
}

pub fn parse_flat_area(title: &str) -> Option<u32> {
    FLAT_AREA
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn find_flat_type(title: &str) -> Option<&'static str> {
    FLAT_TYPES.iter().copied().find(|code| title.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_price_merges_thousand_groups() {
        assert_eq!(clean_price("5 200 000 Kč"), Some(5_200_000));
        assert_eq!(clean_price("12\u{a0}990\u{a0}000 Kč"), Some(12_990_000));
    }

    #[test]
    fn test_clean_price_without_digits_is_absent() {
        assert_eq!(clean_price("Price on request"), None);
        assert_eq!(clean_price("Cena na vyžádání"), None);
        assert_eq!(clean_price(""), None);
    }

    #[test]
    fn test_clean_price_merges_unrelated_numbers() {
        // Known limitation: every digit run is glued together.
        assert_eq!(clean_price("3 500 Kč/měsíc + 2 000 Kč poplatky"), Some(35002000));
        assert_eq!(clean_price("2 pokoje, 3 500 Kč"), Some(23500));
    }

    #[test]
    fn test_clean_price_overflow_is_absent() {
        assert_eq!(clean_price("99999999999999999999999 Kč"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        assert_eq!(clean_price("٣ 500 000 Kč"), Some(500_000));
        assert_eq!(clean_price("５ Kč"), None);
        assert_eq!(parse_flat_area("Prodej bytu ٤ 52 m²"), Some(52));
        assert_eq!(
            parse_house_area("Dům ٢ 120 m², pozemek 450 m²"),
            (Some(120), Some(450))
        );
    }

    #[test]
    fn test_parse_house_area() {
        assert_eq!(
            parse_house_area("Dům 120 m², pozemek 450 m²"),
            (Some(120), Some(450))
        );
        assert_eq!(
            parse_house_area("Prodej rodinného domu 95m², pozemek 1200m²"),
            (Some(95), Some(1200))
        );
    }

    #[test]
    fn test_parse_house_area_needs_both_parts_in_order() {
        assert_eq!(parse_house_area("Prodej rodinného domu 120 m²"), (None, None));
        assert_eq!(parse_house_area("pozemek 450 m², dům 120 m²"), (None, None));
        assert_eq!(parse_house_area("Dům 120 m², Pozemek 450 m²"), (None, None));
    }

    #[test]
    fn test_parse_flat_area() {
        assert_eq!(parse_flat_area("Bytová jednotka 2+kk 55 m²"), Some(55));
        assert_eq!(parse_flat_area("Prodej bytu 3+1 78 m² 80 m²"), Some(78));
        assert_eq!(parse_flat_area("Prodej bytu 3+1"), None);
    }

    #[test]
    fn test_find_flat_type() {
        assert_eq!(find_flat_type("Bytová jednotka 2+kk 55 m²"), Some("2+kk"));
        assert_eq!(find_flat_type("Prodej bytu 6 a více 140 m²"), Some("6 a více"));
        assert_eq!(find_flat_type("Prodej bytu atypický"), None);
        assert_eq!(find_flat_type("Prodej bytu 55 m²"), None);
    }

    #[test]
    fn test_find_flat_type_prefers_declared_order() {
        assert_eq!(find_flat_type("Byt 2+kk nebo 1+1, 55 m²"), Some("1+1"));
        assert_eq!(find_flat_type("Byt 3+1 / 1+kk"), Some("1+kk"));
    }
}
