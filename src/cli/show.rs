use crate::config::Config;
use crate::errors::Result;
use crate::prompt::{self, PromptContext};

/// Print the prompt for the configured directory
pub fn run(config: &Config) -> Result<()> {
    let runner = config.runner();
    let context = PromptContext::gather(&config.directory, &runner)?;

    for line in prompt::render(&context) {
        match config.shell {
            Some(shell) => println!("{}", shell.escape_line(&line)),
            None => println!("{}", line),
        }
    }

    Ok(())
}
