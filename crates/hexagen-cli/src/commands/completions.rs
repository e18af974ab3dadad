//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "hexagen";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut out = io::stdout();
    match args.shell {
        Shell::Bash => write_script(shells::Bash, &mut out),
        Shell::Zsh => write_script(shells::Zsh, &mut out),
        Shell::Fish => write_script(shells::Fish, &mut out),
        Shell::PowerShell => write_script(shells::PowerShell, &mut out),
        Shell::Elvish => write_script(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write_script<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_the_binary() {
        let mut buf = Vec::new();
        write_script(shells::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("hexagen"));
        assert!(script.contains("layers"));
    }
}
