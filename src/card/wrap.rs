/// Approximate advance of one character at the card's font size.
pub const CHAR_WIDTH: i64 = 12;

/// Greedily fills lines with space-separated words until the next word would push the
/// line to `max_width` pixels or beyond.
///
/// Width is estimated as `chars × CHAR_WIDTH`, not measured. A word wider than the whole
/// budget is never broken and ends up alone on its line. Splitting happens on every single
/// space, so runs of spaces produce empty words which keep the extra spacing inside a line
/// and vanish at the start of one.
pub fn wrap_text(text: &str, max_width: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if fits(&candidate, max_width) {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn fits(line: &str, max_width: i64) -> bool {
    let chars = i64::try_from(line.chars().count()).unwrap_or(i64::MAX);
    chars.saturating_mul(CHAR_WIDTH) < max_width
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod \
                         tempor incididunt ut labore et dolore magna aliqua Ut enim ad minim veniam";

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Hello world", 700), vec!["Hello world"]);
    }

    #[test]
    fn long_text_breaks_at_word_boundaries() {
        // 100px fits at most 8 characters
        let lines = wrap_text("aaa bbb ccc ddd", 100);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn exact_fit_is_rejected() {
        // 5 chars * 12 = 60, which is not strictly less than 60
        assert_eq!(wrap_text("ab cd", 60), vec!["ab", "cd"]);
        assert_eq!(wrap_text("ab cd", 61), vec!["ab cd"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 100);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn non_positive_width_puts_every_word_on_its_own_line() {
        assert_eq!(wrap_text("one two three", -20), vec!["one", "two", "three"]);
        assert_eq!(wrap_text("one two", 0), vec!["one", "two"]);
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_text("", 700).is_empty());
    }

    #[test]
    fn doubled_spaces_are_kept_inside_a_line() {
        assert_eq!(wrap_text("a  b", 700), vec!["a  b"]);
    }

    #[test]
    fn leading_empty_words_do_not_create_blank_lines() {
        let lines = wrap_text("aaaaaaaa  bb", 100);
        assert_eq!(lines, vec!["aaaaaaaa", "bb"]);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 9 chars, 25 bytes
        assert_eq!(wrap_text("ああああ ああああ", 200), vec!["ああああ ああああ"]);
        assert_eq!(wrap_text("ああああ ああああ", 100), vec!["ああああ", "ああああ"]);
    }

    #[test]
    fn rejoined_lines_reproduce_the_words() {
        for max_width in [1, 60, 100, 250, 700, 10_000] {
            let lines = wrap_text(LOREM, max_width);
            assert_eq!(lines.join(" "), LOREM, "max_width = {max_width}");
        }
    }

    #[test]
    fn lines_never_exceed_the_budget_or_the_longest_word() {
        let longest = LOREM.split(' ').map(|w| w.chars().count()).max().unwrap();

        for max_width in [1, 60, 100, 250, 700] {
            for line in wrap_text(LOREM, max_width) {
                let len = line.chars().count();
                let within_budget = (len as i64) * CHAR_WIDTH < max_width;
                assert!(
                    within_budget || (!line.contains(' ') && len <= longest),
                    "line {line:?} overflows {max_width}px"
                );
            }
        }
    }
}
