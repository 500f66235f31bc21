//! Single-length estimate command implementation.

use anyhow::Result;
use foldcast_lib::prelude::*;

use crate::display;

/// Estimate per-sequence time at a single length on reference and target.
pub(crate) fn estimate(
    length: u32,
    curve_id: &str,
    target_id: &str,
    reference_id: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let estimator = display::build_estimator(curve_id, reference_id, target_id)?;
    let length = f64::from(length);

    println!("Length:    {length:.0} residues");
    println!("Curve:     {curve_id}");
    println!("Reference: {:.2}s per sequence", estimator.reference_seconds(length));
    println!(
        "Target:    {:.2}s per sequence ({} speedup)",
        estimator.target_seconds(length),
        estimator.speedup(),
    );

    if !quiet && !estimator.curve().covers(length) {
        println!(
            "\nNote: {length:.0} is outside the measured range {}-{}; the boundary \
             anchor's time is used unchanged (no extrapolation).",
            estimator.curve().min_length(),
            estimator.curve().max_length(),
        );
    }

    Ok(())
}
