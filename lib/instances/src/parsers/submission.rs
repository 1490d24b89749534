use std::path::Path;
use anyhow::Context;
use crate::Result;
use crate::raw::rides::Submission;
use super::{
  ParseInstance,
  common::*,
  nom_prelude::*,
};

#[derive(Debug, Copy, Clone)]
pub struct SubmissionFmt<P>(pub P);

#[derive(Debug, Copy, Clone)]
pub struct SubmissionStr<'a>(pub &'a str);

impl<P: AsRef<Path>> ParseInstance<SubmissionFmt<P>> for Submission {
  fn parse(path: SubmissionFmt<P>) -> Result<Submission> {
    let path = path.0.as_ref();
    let data = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {:?}", path))?;
    Submission::parse(SubmissionStr(&data)).with_context(|| format!("failed to parse {:?}", path))
  }
}

impl<'a> ParseInstance<SubmissionStr<'a>> for Submission {
  fn parse(input: SubmissionStr<'a>) -> Result<Submission> {
    match parsers::submission(input.0).finish() {
      Ok((_, submission)) => Ok(submission),
      Err(e) => Err(describe_error(input.0, e)),
    }
  }
}

mod parsers {
  use super::*;

  // M R0 R1 ... RM-1, one route per line
  fn route(input: &str) -> VResult<Vec<usize>> {
    let (input, m) = preceded(space0, usize_)(input)?;
    let (input, rides) = count(preceded(space1, usize_), m)(input)?;
    let (input, _) = terminated(space0, alt((line_ending, eof)))(input)?;
    Ok((input, rides))
  }

  pub fn submission(input: &str) -> VResult<Submission> {
    let (input, routes) = many0(route)(input)?;
    let (input, _) = finish_input(input)?;
    Ok((input, Submission { routes }))
  }
}
