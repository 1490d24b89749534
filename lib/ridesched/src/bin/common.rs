use std::fmt::Display;
use std::str::FromStr;
use std::path::PathBuf;
use std::io;
use anyhow::{Context, Result};
use structopt::StructOpt;

#[derive(Clone, Debug, StructOpt)]
pub struct OutputOptions {
  #[structopt(long="format", short="f", parse(try_from_str), default_value="text", possible_values=&OUTPUT_FORMAT_STRINGS)]
  pub fmt: OutputFormat,
  /// Write `<name>.out` files into this directory instead of printing to stdout
  #[structopt(long="output-dir", short="o")]
  pub dir: Option<PathBuf>,
}

pub fn clap_range_validator<T>(minval: Option<T>, maxval: Option<T>) -> impl Fn(String) -> Result<(), String>
    where
        T: FromStr + PartialOrd + Display + Copy,
        T::Err: Display
{
    return move |val| {
        let x: T = val.parse().map_err(|e: T::Err| e.to_string())?;
        if let Some(y) = minval {
            if x < y { return Err(format!("must be greater than {}", y)); }
        }
        if let Some(y) = maxval {
            if x > y { return Err(format!("must be less than {}", y)); }
        }
        return Ok(());
    };
}

pub const OUTPUT_FORMAT_STRINGS: [&str; 2] = ["text", "json-summ"];

#[derive(Debug, Copy, Clone)]
pub enum OutputFormat {
    Text,
    JsonSummary,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s {
            "text" => Ok(Self::Text),
            "json-summ" => Ok(Self::JsonSummary),
            _ => Err(format!("invalid string: {}", s))
        };
    }
}


impl Default for OutputFormat {
  fn default() -> Self { OutputFormat::Text }
}


pub trait SolutionOutput {
    fn name(&self) -> &str;
    fn write_text(&self, buf : impl io::Write) -> Result<()>;
    fn write_json_summary(&self, buf : impl io::Write) -> Result<()>;

    fn write(&self, buf : impl io::Write, output : OutputFormat) -> Result<()> {
        match output {
            OutputFormat::JsonSummary => self.write_json_summary(buf)?,
            OutputFormat::Text => self.write_text(buf)?,
        };
        Ok(())
    }
}

pub fn output_solution(options: &OutputOptions, solution: &impl SolutionOutput) -> Result<()> {
  match options.dir.as_ref() {
      Some(dir) => {
        let path = dir.join(format!("{}.out", solution.name()));
        let file = std::fs::File::create(&path)
          .with_context(|| format!("failed to create {:?}", path))?;
        solution.write(std::io::BufWriter::new(file), options.fmt)?;
      }
      None => {
        let stdout = std::io::stdout();
        solution.write(stdout.lock(), options.fmt)?;
      }
    }
  Ok(())
}
