use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! class {
    ($($ts:expr),+) => {{
        concatcp!(r"[", $($ts),+, r"]")
    }}
}

// Characters that may start or continue an atom besides letters and digits.
// `-` is escaped so it is not read as a range.
const S_SYMBOL: &str = r"!#$%&|*\-+/:<=>?@^_~";
const S_LETTER: &str = r"\p{Alphabetic}";
const S_DIGIT: &str = r"0-9";

const S_ATOM: &str = concatcp!(
    "^",
    class!(S_LETTER, S_SYMBOL),
    class!(S_LETTER, S_DIGIT, S_SYMBOL),
    "*"
);
const S_NUMBER: &str = concatcp!("^", class!(S_DIGIT), "+");
const S_STRING: &str = r#"^"[^"]*""#;
const S_SEPARATOR: &str = r"^ +";

pub(super) static ATOM: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_ATOM).expect("Error compiling regex."));
pub(super) static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_NUMBER).expect("Error compiling regex."));
pub(super) static STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_STRING).expect("Error compiling regex."));
pub(super) static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_SEPARATOR).expect("Error compiling regex."));

#[cfg(test)]
mod tests {
    use super::*;

    fn lexeme<'a>(regex: &Regex, input: &'a str) -> Option<&'a str> {
        regex.find(input).map(|m| m.as_str())
    }

    #[test]
    fn atom_lexemes() {
        assert_eq!(lexeme(&ATOM, "foo bar"), Some("foo"));
        assert_eq!(lexeme(&ATOM, "what? 2"), Some("what?"));
        assert_eq!(lexeme(&ATOM, "#true)"), Some("#true"));
        assert_eq!(lexeme(&ATOM, "-5"), Some("-5"));
        assert_eq!(lexeme(&ATOM, "string<=?"), Some("string<=?"));
        assert_eq!(lexeme(&ATOM, "1abc"), None);
        assert_eq!(lexeme(&ATOM, ".x"), None);
        assert_eq!(lexeme(&ATOM, " foo"), None);
    }

    #[test]
    fn other_lexemes() {
        assert_eq!(lexeme(&NUMBER, "123abc"), Some("123"));
        assert_eq!(lexeme(&NUMBER, "abc"), None);
        assert_eq!(lexeme(&STRING, r#""two" 3"#), Some(r#""two""#));
        assert_eq!(lexeme(&STRING, r#""open"#), None);
        assert_eq!(lexeme(&SEPARATOR, "   x"), Some("   "));
        assert_eq!(lexeme(&SEPARATOR, "\tx"), None);
    }
}
