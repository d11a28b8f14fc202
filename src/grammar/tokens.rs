//! Shared lexical layer for both grammar versions.
//!
//! Leaf parsers over `&str`, built with nom. Both grammars consume the same
//! token shapes: identifiers, quoted strings, numbers with optional unit
//! suffixes, `#hex` tokens, `url(...)`, `@`-keywords, `!important`, and
//! `/* */` comments.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// A CSS identifier: starts with a letter, `_` or `-`, continues with
/// alphanumerics, `-` and `_`. Covers vendor-prefixed names.
pub fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_ident_start),
        take_while(is_ident_char),
    ))(input)
}

/// An `@`-keyword including the `@`, e.g. `@media`, `@-webkit-keyframes`.
pub fn at_keyword(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('@'), ident))(input)
}

/// A quoted string including its quotes.
///
/// An unterminated string (closing quote missing before a newline or EOF)
/// is a hard failure: the grammar cannot resynchronize from inside a
/// string, so this surfaces as `nom::Err::Failure`.
pub fn string_lit(input: &str) -> IResult<&str, &str> {
    let quote = match input.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )))
        }
    };
    let mut escaped = false;
    for (i, c) in input.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\n' => break,
            c if c == quote => {
                let end = i + c.len_utf8();
                return Ok((&input[end..], &input[..end]));
            }
            _ => {}
        }
    }
    Err(nom::Err::Failure(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// The content of a quoted string, quotes stripped.
pub fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if s.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[s.len() - 1] == bytes[0] {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// A signed decimal number: `12`, `-1.5`, `+.5`, `.25`.
pub fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(alt((char('+'), char('-')))),
        alt((
            recognize(tuple((digit1, opt(pair(char('.'), digit1))))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// A number with an optional unit suffix or `%`: `12px`, `50%`, `1.5`.
pub fn dimension(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        number,
        opt(alt((tag("%"), recognize(ident)))),
    ))(input)
}

/// A `#`-token: hex colors and `#id` fragments alike.
pub fn hash(input: &str) -> IResult<&str, &str> {
    recognize(preceded(char('#'), take_while1(is_ident_char)))(input)
}

/// `url(...)` with either a quoted string or a bare URI inside. Returns the
/// URI without quotes or surrounding whitespace.
pub fn uri(input: &str) -> IResult<&str, &str> {
    let (rest, _) = tag_no_case("url(")(input)?;
    let rest = rest.trim_start();
    if rest.starts_with('"') || rest.starts_with('\'') {
        let (rest, quoted) = string_lit(rest)?;
        let rest = rest.trim_start();
        let (rest, _) = char(')')(rest)?;
        return Ok((rest, unquote(quoted)));
    }
    let (rest, bare) = take_while(|c: char| c != ')' && c != '\n')(rest)?;
    let (rest, _) = char(')')(rest)?;
    Ok((rest, bare.trim()))
}

/// `!important`, whitespace between `!` and the keyword allowed.
pub fn important(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('!'),
        take_while(|c: char| c.is_whitespace()),
        tag_no_case("important"),
    )))(input)
}

/// Skip whitespace and `/* */` comments; always succeeds.
///
/// An unterminated comment swallows the rest of the input, matching the
/// forgiving behavior browsers apply at EOF.
pub fn skip_ws_and_comments(input: &str) -> &str {
    let mut rest = input;
    loop {
        let trimmed = rest.trim_start();
        if let Some(after_open) = trimmed.strip_prefix("/*") {
            match after_open.find("*/") {
                Some(end) => rest = &after_open[end + 2..],
                None => return "",
            }
        } else if trimmed.len() != rest.len() {
            rest = trimmed;
        } else {
            return rest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idents() {
        assert_eq!(ident("color: red"), Ok((": red", "color")));
        assert_eq!(ident("-webkit-box x"), Ok((" x", "-webkit-box")));
        assert!(ident("123").is_err());
    }

    #[test]
    fn strings_keep_quotes() {
        assert_eq!(string_lit("\"abc\" rest"), Ok((" rest", "\"abc\"")));
        assert_eq!(string_lit("'a\\'b'"), Ok(("", "'a\\'b'")));
        assert!(matches!(string_lit("\"abc"), Err(nom::Err::Failure(_))));
    }

    #[test]
    fn numbers_and_dimensions() {
        assert_eq!(number("-1.5px"), Ok(("px", "-1.5")));
        assert_eq!(dimension("50% wide"), Ok((" wide", "50%")));
        assert_eq!(dimension("12pt;"), Ok((";", "12pt")));
    }

    #[test]
    fn uris() {
        assert_eq!(uri("url(a.png) x"), Ok((" x", "a.png")));
        assert_eq!(uri("url( \"a b.png\" )"), Ok(("", "a b.png")));
        assert_eq!(uri("URL(x)"), Ok(("", "x")));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(skip_ws_and_comments("  /* x */  a"), "a");
        assert_eq!(skip_ws_and_comments("/* unterminated"), "");
        assert_eq!(skip_ws_and_comments("a"), "a");
    }
}
