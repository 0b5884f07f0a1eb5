//! Text normalization and tokenization
//!
//! Raw article text is extracted from PDFs, so words are often split across
//! lines with a hyphen. Normalization joins them back; tokenization then
//! walks the text lazily, one word at a time.

/// Join hyphenated line breaks and collapse the remaining ones to spaces
///
/// `\r\n` counts as a single line break.
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::normalize_text;
///
/// assert_eq!(normalize_text("co-\noperation\nworks"), "cooperation works");
/// ```
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace("-\n", "")
        .replace('\n', " ")
}

/// Lazy iterator over the words of a text
///
/// A word is a run of alphanumeric characters; a single hyphen between two
/// alphanumeric characters stays inside the word (`кто-то`). Everything else
/// separates words and is never yielded.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.position..];
        let start = match rest.find(char::is_alphanumeric) {
            Some(offset) => self.position + offset,
            None => {
                self.position = self.text.len();
                return None;
            }
        };

        let mut end = start;
        let mut chars = self.text[start..].char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if c.is_alphanumeric() {
                end = start + offset + c.len_utf8();
            } else if c == '-' && chars.peek().is_some_and(|&(_, n)| n.is_alphanumeric()) {
                continue;
            } else {
                break;
            }
        }

        self.position = end;
        Some(&self.text[start..end])
    }
}

/// Split `text` into words without allocating
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::tokenize;
///
/// let words: Vec<&str> = tokenize("Кто-то пришёл, 2 раза!").collect();
/// assert_eq!(words, vec!["Кто-то", "пришёл", "2", "раза"]);
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, position: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_hyphenated_line_break_joins_word() {
        let text = normalize_text("co-\noperation works");
        assert_eq!(words(&text), vec!["cooperation", "works"]);
    }

    #[test]
    fn test_crlf_line_breaks() {
        assert_eq!(normalize_text("пере-\r\nход\r\nвперёд"), "переход вперёд");
    }

    #[test]
    fn test_plain_line_break_becomes_space() {
        assert_eq!(normalize_text("one\ntwo\n\nthree"), "one two  three");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(
            words("«Слово», (другое); третье..."),
            vec!["Слово", "другое", "третье"]
        );
    }

    #[test]
    fn test_hyphen_rules() {
        assert_eq!(words("кто-то"), vec!["кто-то"]);
        assert_eq!(words("a--b"), vec!["a", "b"]);
        assert_eq!(words("-start end-"), vec!["start", "end"]);
        assert_eq!(words("x - y"), vec!["x", "y"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(words("").is_empty());
        assert!(words("  ,.;  ").is_empty());
    }

    #[test]
    fn test_tokens_is_lazy_and_fused() {
        let mut tokens = tokenize("one two");
        assert_eq!(tokens.next(), Some("one"));
        assert_eq!(tokens.next(), Some("two"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    proptest! {
        #[test]
        fn prop_tokens_are_well_formed(text in "\\PC{0,64}") {
            for token in tokenize(&text) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.starts_with('-'));
                prop_assert!(!token.ends_with('-'));
                prop_assert!(token.chars().all(|c| c.is_alphanumeric() || c == '-'));
            }
        }

        #[test]
        fn prop_retokenizing_joined_tokens_is_stable(text in "\\PC{0,64}") {
            let first: Vec<&str> = tokenize(&text).collect();
            let joined = first.join(" ");
            let second: Vec<&str> = tokenize(&joined).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_normalized_text_has_no_line_breaks(text in "[a-z\\-\\n\\r ]{0,64}") {
            let normalized = normalize_text(&text);
            prop_assert!(!normalized.contains('\n'));
        }
    }
}
