use crate::error::Result;
use clap_complete::{Shell, generate};
use std::io;

/// Generate completions for this tool itself, for `eval`/redirect use.
pub fn completions(cmd: &mut clap::Command, shell: Shell) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
    Ok(())
}
