//! Sort command implementation.
//!
//! Prints its arguments, or the lines of standard input when there are
//! none, in natural order.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dirload::natsort::natural_sort;
use std::io::{self, BufRead, Write};

/// Sort strings in natural order.
#[derive(Args)]
pub struct SortCommand {
    /// Strings to sort (read from stdin, one per line, when omitted)
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,

    /// Compare letters without regard to case
    #[arg(long, short = 'i')]
    pub ignore_case: bool,
}

impl SortCommand {
    /// Execute the sort command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut items = if self.items.is_empty() {
            io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
        } else {
            self.items
        };

        natural_sort(&mut items, !self.ignore_case);

        let mut stdout = io::stdout().lock();
        for item in &items {
            writeln!(stdout, "{item}")?;
        }
        Ok(())
    }
}
