use super::nom_prelude::*;

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub fn usize_<'a, E>(input: &'a str) -> IResult<&'a str, usize, E>
  where
    E: ParseError<&'a str> + FromExternalError<&'a str, ParseIntError>
{
  map_res(digit1, usize::from_str)(input)
}

/// An unsigned integer preceded by any amount of whitespace, line breaks included.
pub fn ws_usize(input: &str) -> VResult<usize> {
  preceded(multispace0, usize_)(input)
}

/// Like [`ws_usize`], but rejects values which do not fit an `i64`.
pub fn ws_i64(input: &str) -> VResult<i64> {
  map_res(ws_usize, i64::try_from)(input)
}

/// Trailing whitespace followed by the end of input.
pub fn finish_input(input: &str) -> VResult<()> {
  let (input, _) = multispace0(input)?;
  let (input, _) = eof(input)?;
  Ok((input, ()))
}

/// Turns a failed parse into an error message pointing at the offending line.
pub fn describe_error(input: &str, e: VerboseError<&str>) -> anyhow::Error {
  anyhow::Error::msg(convert_error(input, e))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn leading_whitespace_is_skipped() {
    assert_eq!(ws_usize(" \n 42 7"), Ok((" 7", 42)));
  }

  #[test]
  fn negative_numbers_are_rejected() {
    assert!(ws_usize("-3").is_err());
  }

  #[test]
  fn i64_overflow_is_rejected() {
    assert_eq!(ws_i64(" 9223372036854775807"), Ok(("", i64::MAX)));
    assert!(ws_i64("9223372036854775808").is_err());
  }

  #[test]
  fn trailing_garbage_is_rejected() {
    assert!(finish_input("  \n").is_ok());
    assert!(finish_input("  x").is_err());
  }
}
