pub mod line;

pub use line::{parse_line, ParseFailure, ParseOutcome};
