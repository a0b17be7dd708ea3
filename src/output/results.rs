//! Ranked results as a CSV file

use crate::solver::EntropyResult;
use std::path::Path;

/// Column headers of the results file
pub const HEADER: [&str; 3] = ["Pokemon Name", "Entropy", "Average Pokemon Remaining"];

/// Write ranked results to `path`
///
/// Each row holds the name, the entropy in bits and the expected number of
/// Pokémon left out of `universe_size` after guessing it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_results_csv<P: AsRef<Path>>(
    path: P,
    results: &[EntropyResult],
    universe_size: usize,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for result in results {
        writer.write_record([
            result.name.clone(),
            result.entropy.to_string(),
            result.expected_remaining(universe_size).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
