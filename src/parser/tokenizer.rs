use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::{many0, many1},
    sequence::{preceded, terminated},
};

/// A quoted span. The closing quote is optional so an unterminated quote
/// swallows the rest of the line instead of failing the whole command.
fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(
        char(quote),
        terminated(take_while(move |c| c != quote), opt(char(quote))),
    )
}

fn bare_chunk(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"' && c != '\'')(input)
}

/// One token: adjacent quoted and bare pieces glue together, so
/// `na"me with spaces"` is a single token with the quotes stripped.
fn token(input: &str) -> IResult<&str, String> {
    map(
        many1(alt((quoted('"'), quoted('\''), bare_chunk))),
        |pieces| pieces.concat(),
    )(input)
}

/// Splits a raw command line into shell-like tokens: whitespace separates,
/// quoted substrings stay atomic with their quotes stripped. Purely
/// lexical, no type inference. An empty line yields no tokens.
#[must_use]
pub fn split_command(line: &str) -> Vec<String> {
    match many0(preceded(multispace0, token))(line) {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}
