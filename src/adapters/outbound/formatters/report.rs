use crate::dependency_graph::domain::{Cycle, NodeId};

/// Renders the recorded cycles, one arrow-joined chain per line
pub fn render_cycle_report(cycles: &[Cycle]) -> String {
    if cycles.is_empty() {
        return "No cyclic dependencies detected".to_string();
    }

    let mut out = format!("Cyclic dependencies detected ({}):", cycles.len());
    for (i, cycle) in cycles.iter().enumerate() {
        out.push_str(&format!("\n  Cycle {}: {}", i + 1, cycle));
    }
    out
}

/// Renders a numbered list of the packages depending on `target`
pub fn render_reverse_report(target: &str, dependents: &[NodeId]) -> String {
    if dependents.is_empty() {
        return format!("Reverse dependencies of {}: none found", target);
    }

    let mut out = format!("Reverse dependencies of {} ({}):", target, dependents.len());
    for (i, node) in dependents.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, node));
    }
    out
}
