use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, satisfy},
    combinator::{eof, map, value},
    error::context,
    multi::{many0, separated_list0},
    sequence::preceded,
};
use nom_language::error::VerboseError;

use super::{Segment, Spath};

// /foo/bar/baz - allowed - simple path
// foo/bar/baz - not allowed, missing leading `/`
// /servers/0/host - allowed - the all-digit segment addresses an array index
// /a~1b/c - allowed - `~1` decodes to a literal `/` inside the key `a/b`
// /a~0b - allowed - `~0` decodes to a literal `~`
// /a~b - not allowed - bare `~` must be escaped
pub(crate) fn parse_path(input: &str) -> IResult<&str, Spath, VerboseError<&str>> {
    context(
        "expected a path starting with '/' or empty input",
        alt((
            // exactly empty input
            value(Spath::default(), eof),
            // normal path: starts with '/'
            |i| {
                let (rest, segments) =
                    preceded(char('/'), separated_list0(char('/'), parse_segment)).parse(i)?;
                Ok((rest, Spath { segments }))
            },
        )),
    )
    .parse(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    // One decoded char inside a segment token.
    // - `~` must be escaped (~0 or ~1), so we exclude raw '~' here.
    // - '/' terminates the token.
    let segment_char = alt((
        unescape_json_pointer,
        satisfy(|c| c != '/' && c != '~'),
    ));
    context(
        "segment",
        map(many0(segment_char), |chars: Vec<char>| {
            classify(chars.into_iter().collect::<String>())
        }),
    )
    .parse(input)
}

// An all-digit segment addresses an array index; anything else is a field name.
// Digit runs too long for usize stay field names, matching keys like "000...1".
fn classify(raw: String) -> Segment {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(index) = raw.parse::<usize>() {
            return Segment::Index(index);
        }
    }
    Segment::Field(raw)
}

fn unescape_json_pointer(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    let (rest, _) = char('~').parse(input)?;
    let (rest, esc) = alt((char('0'), char('1'))).parse(rest)?;

    let decoded_char = match esc {
        '0' => '~',
        '1' => '/',
        _ => unreachable!(),
    };

    Ok((rest, decoded_char))
}
