//! Line tokenization: leading indentation plus a gap-free token sequence.
//!
//! A line is split into its leading indentation (spaces and tabs) and an
//! ordered sequence of tokens. At each position the scanner consumes, in
//! priority order: a maximal digit run, a maximal word-character run
//! (`[A-Za-z0-9_]`), a maximal whitespace run, or the single symbol
//! character. The indent plus the tokens concatenate back to the input line
//! with no gaps or overlaps.
//!
//! The digit alternative only wins when the position *starts* with a digit:
//! `1px` splits into `1`, `px`, but `file1` stays a single word token because
//! the word run swallows embedded digits.

/// Split a line into its leading indentation and its tokens.
///
/// The indent is the longest leading run of space and tab characters and may
/// be empty. Tokens are borrowed slices of `line`.
pub fn split_tokens(line: &str) -> (&str, Vec<&str>) {
    let indent_len = run_len(line, |c| c == ' ' || c == '\t');
    let (indent, rest) = line.split_at(indent_len);
    (indent, scan(rest))
}

fn scan(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        let Some(first) = rest.chars().next() else {
            break;
        };
        let len = if first.is_ascii_digit() {
            run_len(rest, |c| c.is_ascii_digit())
        } else if is_word(first) {
            run_len(rest, is_word)
        } else if first.is_whitespace() {
            run_len(rest, char::is_whitespace)
        } else {
            first.len_utf8()
        };
        tokens.push(&rest[..len]);
        pos += len;
    }
    tokens
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Length in bytes of the longest prefix of `text` whose characters all
/// satisfy `pred`.
fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        split_tokens(line).1
    }

    #[test]
    fn empty_line() {
        let (indent, tokens) = split_tokens("");
        assert_eq!(indent, "");
        assert!(tokens.is_empty());
    }

    #[test]
    fn indent_is_spaces_and_tabs_only() {
        let (indent, tokens) = split_tokens(" \t  let x");
        assert_eq!(indent, " \t  ");
        assert_eq!(tokens, vec!["let", " ", "x"]);
    }

    #[test]
    fn whitespace_only_line_is_all_indent() {
        let (indent, tokens) = split_tokens("   \t");
        assert_eq!(indent, "   \t");
        assert!(tokens.is_empty());
    }

    #[test]
    fn word_run_swallows_embedded_digits() {
        assert_eq!(tokens("file1.txt"), vec!["file1", ".", "txt"]);
    }

    #[test]
    fn digit_run_wins_at_digit_start() {
        assert_eq!(tokens("1px"), vec!["1", "px"]);
        assert_eq!(tokens("42"), vec!["42"]);
    }

    #[test]
    fn symbols_are_single_characters() {
        assert_eq!(tokens("a+=b;"), vec!["a", "+", "=", "b", ";"]);
    }

    #[test]
    fn interior_whitespace_is_a_token() {
        assert_eq!(tokens("version  2"), vec!["version", "  ", "2"]);
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert_eq!(tokens("snake_case_name"), vec!["snake_case_name"]);
    }

    #[test]
    fn non_ascii_symbols_are_single_tokens() {
        assert_eq!(tokens("a→b"), vec!["a", "→", "b"]);
    }

    #[test]
    fn trailing_whitespace_is_kept() {
        assert_eq!(tokens("end  "), vec!["end", "  "]);
    }

    #[test]
    fn tokens_concatenate_back_to_the_line() {
        let lines = [
            "fn main() { println!(\"hi\"); }",
            "  x = 10 * y_2;",
            "\tkey: value, other: 3.14",
            "mixed — unicode ☃ here",
            "   ",
        ];
        for line in lines {
            let (indent, tokens) = split_tokens(line);
            let rebuilt: String = std::iter::once(indent).chain(tokens).collect();
            assert_eq!(rebuilt, line, "line {line:?} did not round-trip");
        }
    }
}
