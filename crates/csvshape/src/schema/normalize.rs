//! Header token normalization.
//!
//! Turns a column name as it appears in a CSV header into the canonical
//! field name it should bind to, e.g. `"Lv. 50 HP"` into `lv_50_hp`.

use crate::error::{CsvShapeError, Result};

const SEPARATOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Separator,
}

fn classify(token: &str, ch: char) -> Result<CharClass> {
    if ch.is_whitespace() || matches!(ch, '_' | '.' | '-') {
        Ok(CharClass::Separator)
    } else if ch.is_numeric() {
        Ok(CharClass::Digit)
    } else if ch.is_alphabetic() {
        Ok(CharClass::Letter)
    } else {
        Err(CsvShapeError::InvalidHeaderToken {
            token: token.to_string(),
            character: ch,
        })
    }
}

/// Append a separator unless the output is empty or already ends with one.
fn publish_separator(out: &mut String) -> bool {
    if out.is_empty() || out.ends_with(SEPARATOR) {
        return false;
    }
    out.push(SEPARATOR);
    true
}

/// Normalize a raw header token into a canonical field name.
///
/// Runs of whitespace, underscores, dots and hyphens collapse into a single
/// underscore, leading separators are dropped, and a boundary between letters
/// and digits always gets an underscore. The result is lowercased. Any other
/// punctuation is rejected with [`CsvShapeError::InvalidHeaderToken`].
///
/// # Example
///
/// ```
/// use csvshape::normalize;
///
/// assert_eq!(normalize("Lv. 50 HP").unwrap(), "lv_50_hp");
/// assert_eq!(normalize("ATK50").unwrap(), "atk_50");
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<CharClass> = None;

    for ch in raw.chars() {
        let class = classify(raw, ch)?;

        if class == CharClass::Separator {
            if publish_separator(&mut out) {
                prev = Some(CharClass::Separator);
            }
            continue;
        }

        if prev.is_some_and(|p| p != class) {
            publish_separator(&mut out);
        }
        out.push(ch);
        prev = Some(class);
    }

    Ok(out.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize("Type").unwrap(), "type");
        assert_eq!(normalize("digimon").unwrap(), "digimon");
    }

    #[test]
    fn test_normalize_punctuated_header() {
        assert_eq!(normalize("Lv. 50 HP").unwrap(), "lv_50_hp");
        assert_eq!(normalize("Lv50 SP").unwrap(), "lv_50_sp");
        assert_eq!(normalize("Lv 50 HP").unwrap(), "lv_50_hp");
    }

    #[test]
    fn test_normalize_whitespace_only() {
        assert_eq!(normalize("  ").unwrap(), "");
        assert_eq!(normalize("").unwrap(), "");
    }

    #[test]
    fn test_normalize_letter_digit_boundaries() {
        assert_eq!(normalize("ATK50").unwrap(), "atk_50");
        assert_eq!(normalize("50ATK").unwrap(), "50_atk");
        assert_eq!(normalize("a1b2").unwrap(), "a_1_b_2");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("Equip   Slots").unwrap(), "equip_slots");
        assert_eq!(normalize("sp__cost").unwrap(), "sp_cost");
        assert_eq!(normalize("  SP Cost").unwrap(), "sp_cost");
        assert_eq!(normalize("_number").unwrap(), "number");
    }

    #[test]
    fn test_normalize_keeps_trailing_separator() {
        assert_eq!(normalize("HP ").unwrap(), "hp_");
    }

    #[test]
    fn test_normalize_rejects_symbols() {
        let err = normalize("HP (max)").unwrap_err();
        assert!(matches!(
            err,
            CsvShapeError::InvalidHeaderToken { character: '(', .. }
        ));
        assert!(normalize("rate%").is_err());
    }
}
