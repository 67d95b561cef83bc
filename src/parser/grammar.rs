// # ========================= START OF THE GRAMMAR =========================
//
// Alternatives are ordered: the first one that matches wins, and when all of
// them fail the failure of the last one tried is reported. Whitespace is only
// consumed where a rule asks for `sep`.
//
// expr:        atom | number | string | quoted | list
// atom:        (letter | symbol) (letter | digit | symbol)*
// number:      digit+
// string:      '"' (!'"')* '"'
// quoted:      "'" expr
// list:        '(' [sep.expr+ [sep '.' sep expr]] ')'
// sep:         ' '+

use tracing::trace;

use super::combinators::*;
use super::lexemes::{ATOM, NUMBER, SEPARATOR, STRING};
use crate::error::Result;
use crate::value::Value;

/// Reads exactly one expression spanning the whole of `source`.
pub fn parse(source: &str) -> Result<Value> {
    trace!(source, "reading");
    match left(expr, end_of_input).parse(ParserInput::new(source)) {
        ParseResult::Ok((value, _)) => Ok(value),
        ParseResult::Err(failure) => Err(failure.into()),
    }
}

fn expr(input: ParserInput) -> ParseResult<Value> {
    atom.or(number)
        .or(string)
        .or(quoted)
        .or(list)
        .parse(input)
}

// `#t` and `#f` are only booleans when they are the whole lexeme, so `#true`
// stays an atom.
fn atom(input: ParserInput) -> ParseResult<Value> {
    pattern(&ATOM, "atom")
        .map(|lexeme| match lexeme {
            "#t" => Value::Boolean(true),
            "#f" => Value::Boolean(false),
            name => Value::atom(name),
        })
        .parse(input)
}

fn number(input: ParserInput) -> ParseResult<Value> {
    pattern(&NUMBER, "number")
        .try_map(|digits| {
            digits
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| "integer literal within 64 bits".to_string())
        })
        .parse(input)
}

fn string(input: ParserInput) -> ParseResult<Value> {
    pattern(&STRING, "string literal")
        .map(|lexeme| Value::text(&lexeme[1..lexeme.len() - 1]))
        .parse(input)
}

fn quoted(input: ParserInput) -> ParseResult<Value> {
    right(literal("'"), expr)
        .map(|quoted| Value::List(vec![Value::atom("quote"), quoted]))
        .parse(input)
}

fn list(input: ParserInput) -> ParseResult<Value> {
    right(literal("("), left(list_body, literal(")"))).parse(input)
}

// The leading elements are read once and shared by both list forms.
fn list_body(input: ParserInput) -> ParseResult<Value> {
    let tail = right(separator, right(literal("."), right(separator, expr)));
    maybe(pair(sep_by(expr, separator), maybe(tail)))
        .try_map(|body| match body {
            None => Ok(Value::nil()),
            Some((init, None)) => Ok(Value::List(init)),
            Some((init, Some(last))) => Value::dotted(init, last).map_err(|e| e.to_string()),
        })
        .parse(input)
}

fn separator(input: ParserInput) -> ParseResult<()> {
    pattern(&SEPARATOR, "` '").map(|_| ()).parse(input)
}
