//! Escaping for text destined for markup attributes.

/// Escapes double and single quotes for safe interpolation into attribute
/// values.
///
/// The renderer already entity-escapes `<`, `>` and `&` wherever it writes
/// text; this helper only closes the quote gap for forwarded attributes.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_both_quote_kinds() {
        assert_eq!(escape_quotes(r#"Say "hi""#), "Say &quot;hi&quot;");
        assert_eq!(escape_quotes("it's"), "it&#39;s");
    }

    #[test]
    fn passes_clean_strings_through() {
        assert_eq!(escape_quotes("Our Work"), "Our Work");
    }

    #[test]
    fn leaves_other_markup_characters_alone() {
        assert_eq!(escape_quotes("<b> & </b>"), "<b> & </b>");
    }
}
