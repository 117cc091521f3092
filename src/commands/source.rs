use crate::error::Result;
use crate::options::BuildOptions;
use crate::source::{SourceRef, resolve_source};
use colored::Colorize;

pub fn source(options: &BuildOptions, json: bool) -> Result<()> {
    let spec = resolve_source(options);

    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    println!("{} {}", "==>".bold().green(), "Source".bold());
    println!("{}: {}", "Repository".bold(), spec.repository.cyan());
    match &spec.reference {
        SourceRef::Tag { name, revision } => {
            println!("{}: {}", "Tag".bold(), name.cyan());
            println!("{}: {}", "Revision".bold(), revision.dimmed());
        }
        SourceRef::Branch { name } => {
            println!("{}: {}", "Branch".bold(), name.cyan());
        }
    }
    println!("{}: {}", "Version".bold(), spec.version);

    Ok(())
}
