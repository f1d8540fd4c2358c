pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// Parse and validate the command line.
///
/// # Errors
///
/// Will return `Err` with a readable message if validation fails.
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::from(args))
}
