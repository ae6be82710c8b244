//! Natural ordering of file names.
//!
//! Directory listings come back in no particular order; this module puts
//! them in the order a person expects, where `ep2` comes before `ep10`.
//!
//! # Examples
//!
//! ```
//! use dirload::natsort::{compare, natural_sort};
//! use std::cmp::Ordering;
//!
//! let mut files = vec!["x2-y08", "x2-g8", "x2-y7"];
//! natural_sort(&mut files, true);
//! assert_eq!(files, ["x2-g8", "x2-y7", "x2-y08"]);
//!
//! assert_eq!(compare("1.009.20", "1.010.12", true), Ordering::Less);
//! ```

pub mod ordering;

#[cfg(test)]
mod proptests;

pub use ordering::{compare, natural_sort, sorted};
