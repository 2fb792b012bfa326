// Fault Chart
//
// Horizontal ASCII bar chart of fault totals, one bar per policy.

use crate::replacement::SimulationResult;

const BAR_WIDTH: usize = 40;

/// Render fault totals as horizontal bars.
///
/// Bars scale to the largest total, so the worst policy always spans the
/// full width and a nonzero total never rounds down to an empty bar.
pub fn fault_chart(results: &[SimulationResult]) -> String {
    let max_faults = results.iter().map(|r| r.total_faults()).max().unwrap_or(0);
    let name_width = results
        .iter()
        .map(|r| r.policy().name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Page faults by policy\n");
    for result in results {
        let bar_len = if max_faults == 0 {
            0
        } else {
            (result.total_faults() * BAR_WIDTH).div_ceil(max_faults)
        };
        out.push_str(&format!(
            "{:<name_width$} | {:<bar_width$} {}\n",
            result.policy().name(),
            "#".repeat(bar_len),
            result.total_faults(),
            bar_width = BAR_WIDTH,
        ));
    }
    out
}
