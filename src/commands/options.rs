use crate::error::Result;
use crate::formula;
use crate::options::BuildOptions;
use colored::Colorize;

pub fn options(selected: &BuildOptions) -> Result<()> {
    println!("{}", format!("==> {}", formula::NAME).bold().green());
    println!();

    for def in formula::OPTIONS {
        let flag = format!("--{}", def.name);
        if selected.is_set(def.name) {
            println!("{} {}", flag.cyan(), "(set)".green());
        } else {
            println!("{}", flag.cyan());
        }
        println!("\t{}", def.help);
    }

    Ok(())
}
