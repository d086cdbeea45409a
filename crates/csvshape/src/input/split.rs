//! Splitting a single CSV line into fields.

/// Field delimiter.
const DELIMITER: char = ',';

/// Quote character that opens and closes a quoted span.
const QUOTE: char = '"';

/// Split one CSV line into its fields.
///
/// Commas inside a double-quoted span do not end the field. Quote characters
/// only toggle the span and are never part of the output, so `""` inside a
/// quoted field closes and immediately reopens it rather than producing a
/// literal quote. An unterminated quote simply runs to the end of the line.
///
/// The result always has one more element than the number of unquoted
/// commas, so an empty line yields a single empty field.
///
/// # Example
///
/// ```
/// use csvshape::split_line;
///
/// assert_eq!(split_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
/// ```
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_line("number,digimon,memory"), vec!["number", "digimon", "memory"]);
    }

    #[test]
    fn test_split_quoted_delimiter() {
        assert_eq!(split_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_empty_line() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_line(",,"), vec!["", "", ""]);
        assert_eq!(split_line("1,,3"), vec!["1", "", "3"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert_eq!(split_line("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn test_split_doubled_quote_is_dropped() {
        assert_eq!(split_line("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn test_split_keeps_whitespace() {
        assert_eq!(split_line(" a , b "), vec![" a ", " b "]);
    }
}
