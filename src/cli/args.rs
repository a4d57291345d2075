// Argument structures shared by the operation subcommands

use clap::Args;

use crate::config::{Config, OutputFormat};
use crate::error::Result;

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct OperandArgs {
    /// Left operand
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Right operand
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// An explicit `--format` wins over the configured one.
pub fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => format.parse(),
        None => Ok(config.output.format),
    }
}
