use std::collections::BTreeSet;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let comparison = ctx.comparison.as_ref().context("comparison missing")?;
    let [first, second] = match ctx.structures.as_slice() {
        [first, second] => [first, second],
        _ => anyhow::bail!("expected 2 filtered structures"),
    };

    let mut out = String::new();
    out.push_str(&format!("microcmp v{}\n", version));
    out.push_str(&format!(
        "Cutoff: {} ({})\n",
        ctx.cutoff,
        if ctx.report.input_meta.background_corrected {
            "background corrected"
        } else {
            "no background correction"
        }
    ));
    for structure in [first, second] {
        out.push_str(&format!(
            "{}: {} samples, {} probes at or above cutoff\n",
            structure,
            structure.columns.len(),
            structure.probes.len()
        ));
    }

    out.push_str(&format_set("Shared probes", &comparison.shared));
    out.push_str(&format_set(
        &format!("Probes unique in {}", first.name),
        &comparison.unique_first,
    ));
    out.push_str(&format_set(
        &format!("Probes unique in {}", second.name),
        &comparison.unique_second,
    ));

    Ok(out)
}

fn format_set(label: &str, probes: &BTreeSet<String>) -> String {
    if probes.is_empty() {
        format!("{} (0): none\n", label)
    } else {
        let members: Vec<&str> = probes.iter().map(|p| p.as_str()).collect();
        format!("{} ({}): {}\n", label, probes.len(), members.join(", "))
    }
}
