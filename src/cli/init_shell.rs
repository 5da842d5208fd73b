use crate::errors::Result;
use crate::shell::Shell;

/// Shell code that makes the shell run `scmprompt` whenever it draws the
/// prompt. The tool's output is never stored in the prompt variable, so
/// branch and directory names are shown, not evaluated.
pub fn snippet(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => {
            r#"# scmprompt shell integration
PS1='$(command scmprompt --shell bash 2>/dev/null)\n\$ '
"#
        }
        Shell::Zsh => {
            r#"# scmprompt shell integration
setopt PROMPT_SUBST
PROMPT='$(command scmprompt --shell zsh 2>/dev/null)'$'\n''%# '
"#
        }
    }
}

/// Output the shell hook so the tool can be wired up with:
///
/// ```bash
/// eval "$(scmprompt init-shell)"
/// ```
pub fn run(shell: Shell) -> Result<()> {
    print!("{}", snippet(shell));
    Ok(())
}
