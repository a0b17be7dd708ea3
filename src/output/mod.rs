//! Terminal and file output
//!
//! Display utilities for CLI results and the CSV results writer.

pub mod display;
pub mod formatters;
pub mod results;

pub use display::{
    print_analysis_result, print_candidates, print_rank_result, print_solve_result,
};
pub use results::write_results_csv;
