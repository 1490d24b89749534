mod rides;
pub use rides::{RidesFmt, RidesStr};

mod submission;
pub use submission::{SubmissionFmt, SubmissionStr};


mod nom_prelude {
  pub use nom::{
    IResult,
    error::{
      self,
      ParseError,
      FromExternalError,
      VerboseError,
      convert_error,
    },
    branch::alt,
    sequence::*,
    multi::*,
    combinator::*,
    character::complete::*,
    Finish,
  };
  pub use std::str::FromStr;
  pub use std::num::ParseIntError;
  pub use std::convert::TryFrom;
}

mod common;

pub trait ParseInstance<Fmt>: Sized {
  fn parse(inputs: Fmt) -> crate::Result<Self>;
}
