// Table Rendering
//
// Summary lines and the per-step trace table.

use crate::replacement::SimulationResult;

/// One line per result with its fault total.
pub fn summary(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "- {} - {} page faults\n",
            result.policy(),
            result.total_faults()
        ));
    }
    out
}

/// Per-step trace table for one result.
///
/// Frames render left to right in the policy's snapshot order, `-`
/// marks an empty slot and `*` flags a faulting step. Column widths are
/// computed from the content.
pub fn step_table(result: &SimulationResult) -> String {
    let frames = result
        .steps()
        .first()
        .map_or(0, |step| step.snapshot().len());

    // Column widths from headers and data
    let mut ref_width = "Ref".len();
    let mut slot_widths: Vec<usize> = (0..frames).map(|i| format!("F{}", i).len()).collect();
    for step in result.steps() {
        ref_width = ref_width.max(step.reference().to_string().len());
        for (i, slot) in step.snapshot().iter().enumerate() {
            slot_widths[i] = slot_widths[i].max(slot.to_string().len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", result.policy()));

    let header_slots: Vec<String> = (0..frames)
        .map(|i| format!("{:>width$}", format!("F{}", i), width = slot_widths[i]))
        .collect();
    out.push_str(&table_row(
        &format!("{:>width$}", "Ref", width = ref_width),
        &header_slots,
        "Fault",
    ));
    out.push('\n');

    let mut dashes: Vec<String> = vec!["-".repeat(ref_width)];
    if frames > 0 {
        dashes.push("-".repeat(slot_widths.iter().sum::<usize>() + frames - 1));
    }
    dashes.push("-".repeat("Fault".len()));
    out.push_str(&dashes.join("-+-"));
    out.push('\n');

    for step in result.steps() {
        let slot_cells: Vec<String> = step
            .snapshot()
            .iter()
            .enumerate()
            .map(|(i, slot)| format!("{:>width$}", slot.to_string(), width = slot_widths[i]))
            .collect();
        let line = table_row(
            &format!("{:>width$}", step.reference(), width = ref_width),
            &slot_cells,
            if step.fault() { "*" } else { "" },
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("Total: {} page faults\n", result.total_faults()));
    out
}

// Sections are Ref, the frame cells and the fault marker; the frame
// section drops out entirely when there are no frames.
fn table_row(ref_cell: &str, slot_cells: &[String], fault_cell: &str) -> String {
    let mut sections: Vec<String> = vec![ref_cell.to_string()];
    if !slot_cells.is_empty() {
        sections.push(slot_cells.join(" "));
    }
    sections.push(fault_cell.to_string());
    sections.join(" | ")
}
