use crate::error::Result;
use crate::options::BuildOptions;
use crate::plan::build_install_plan;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn plan(options: &BuildOptions, json: bool, output: Option<&Path>) -> Result<()> {
    let plan = build_install_plan(options);
    tracing::debug!(entries = plan.len(), "built install plan");

    if let Some(path) = output {
        let contents = serde_json::to_string_pretty(&plan)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write plan: {}", path.display()))?;
        println!(
            "{} Wrote install plan ({} entries) to {}",
            "✓".green(),
            plan.len(),
            path.display()
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{} {}", "==>".bold().green(), "Install plan".bold());
    for entry in &plan.entries {
        let mode = match entry.mode {
            Some(mode) => format!(" ({:04o})", mode),
            None => String::new(),
        };
        println!(
            "  {} -> {}{}",
            entry.source,
            entry.installed_path().cyan(),
            mode.dimmed()
        );
    }
    println!(
        "{}: {}",
        "Skip clean".bold(),
        plan.skip_clean.join(", ").dimmed()
    );

    Ok(())
}
