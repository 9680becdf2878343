/// Escapes the five XML special characters so `text` can sit inside an element or an
/// attribute value. Existing entities are not recognised: `&amp;` becomes `&amp;amp;`.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("<b>&amp;</b>"), "&lt;b&gt;&amp;amp;&lt;/b&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(
            escape_xml(r#"She said "it's fine""#),
            "She said &quot;it&apos;s fine&quot;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_xml("Stay hungry — stay foolish."), "Stay hungry — stay foolish.");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn escaping_twice_escapes_the_ampersands_again() {
        let once = escape_xml("a < b");
        assert_eq!(once, "a &lt; b");
        assert_eq!(escape_xml(&once), "a &amp;lt; b");
    }
}
