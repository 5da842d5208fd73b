use clap::{Parser, Subcommand};
use scmprompt::cli;
use scmprompt::config::{self, Config};
use scmprompt::errors::Result;
use scmprompt::shell::Shell;
use scmprompt::suggestions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scmprompt")]
#[command(about = "Shell prompt fragment with user, host, directory and Mercurial/Git status", long_about = None)]
#[command(version)]
struct Cli {
    /// Inspect this directory instead of the current one
    #[arg(short = 'C', long, value_name = "PATH")]
    directory: Option<PathBuf>,

    /// Give up on a VCS command after this many milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Mark escape sequences for this shell's prompt (used by init-shell)
    #[arg(long, value_enum, value_name = "SHELL")]
    shell: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print shell code that draws the prompt with scmprompt
    InitShell {
        #[arg(long, value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::InitShell { shell }) => cli::init_shell::run(shell)?,
        None => {
            let config = Config::resolve(cli.directory, cli.timeout_ms, cli.shell)?;
            cli::show::run(&config)?
        }
    }

    Ok(())
}

fn main() {
    config::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        suggestions::display_error_with_suggestions(&e);
        std::process::exit(1);
    }
}
