use crate::error::{PlanError, Result};
use crate::formula;
use colored::Colorize;
use std::process::Command;

/// Run the formula's smoke test: the installed tool must answer `help`
/// with a zero exit status.
pub fn check() -> Result<()> {
    let test = formula::SMOKE_TEST;
    println!(
        "{} Running {}",
        "==>".bold().green(),
        test.command_line().cyan()
    );

    let status = Command::new(test.program).args(test.args).status()?;

    if status.success() {
        println!("{} {} responds to `help`", "✓".green(), formula::NAME);
        Ok(())
    } else {
        println!("{} Smoke test failed", "✗".red());
        Err(PlanError::SmokeTestFailed {
            command: test.command_line(),
            status: status.to_string(),
        })
    }
}
