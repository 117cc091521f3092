use crate::error::Result;
use crate::options::BuildOptions;
use crate::source::resolve_source;
use crate::{formula, plan};
use colored::Colorize;

pub fn info(options: &BuildOptions) -> Result<()> {
    let spec = resolve_source(options);
    let install = plan::build_install_plan(options);

    println!("{}", format!("==> {}", formula::NAME).bold().green());
    println!("{}", formula::DESC);
    println!("{}: {}", "Homepage".bold(), formula::HOMEPAGE);
    println!("{}: {}", "Version".bold(), spec.version);
    println!(
        "{}: {} ({})",
        "Source".bold(),
        spec.repository,
        spec.reference.to_string().dimmed()
    );
    println!(
        "{}: {} files, completions {}",
        "Install".bold(),
        install.len(),
        if options.completions { "on" } else { "off" }
    );
    println!();

    println!("{}", "Options:".bold());
    for def in formula::OPTIONS {
        let marker = if options.is_set(def.name) { "*" } else { " " };
        println!(
            "  {} {}  {}",
            marker,
            format!("--{}", def.name).cyan(),
            def.help.dimmed()
        );
    }

    let used = options.used_options();
    if !used.is_empty() {
        println!();
        println!("{}: {}", "In effect".bold(), used.join(" "));
    }

    Ok(())
}
