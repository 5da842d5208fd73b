//! Adapting rendered lines to a shell's prompt language.
use clap::ValueEnum;

/// Shells with a prompt hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// Rewrite one rendered line so the shell draws it correctly.
    ///
    /// Escape sequences are marked as zero-width for the line editor:
    /// readline's `\x01`/`\x02` for bash, `%{`/`%}` for zsh. In zsh `%` is
    /// doubled because the prompt is run through `%` expansion after
    /// substitution. Bash never re-expands command substitution output, so
    /// `$`, backquote and backslash pass through untouched.
    pub fn escape_line(&self, line: &str) -> String {
        let (start, end) = match self {
            Shell::Bash => ("\x01", "\x02"),
            Shell::Zsh => ("%{", "%}"),
        };

        let mut out = String::with_capacity(line.len());
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            match c {
                '\x1b' => {
                    out.push_str(start);
                    out.push(c);
                    for c in chars.by_ref() {
                        out.push(c);
                        if c == 'm' {
                            break;
                        }
                    }
                    out.push_str(end);
                }
                '%' if *self == Shell::Zsh => out.push_str("%%"),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "\x1b[1m\x1b[33m(git:x$(id)\x1b[2m,unstaged:2\x1b[1m)\x1b[0m\x1b[37m";

    #[test]
    fn test_bash_marks_escapes_invisible() {
        assert_eq!(
            Shell::Bash.escape_line(LINE),
            "\x01\x1b[1m\x02\x01\x1b[33m\x02(git:x$(id)\x01\x1b[2m\x02,unstaged:2\x01\x1b[1m\x02)\x01\x1b[0m\x02\x01\x1b[37m\x02"
        );
    }

    #[test]
    fn test_zsh_marks_escapes_and_doubles_percent() {
        let line = "\x1b[1m(git:100%)\x1b[0m";

        assert_eq!(
            Shell::Zsh.escape_line(line),
            "%{\x1b[1m%}(git:100%%)%{\x1b[0m%}"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(Shell::Bash.escape_line(" "), " ");
        assert_eq!(Shell::Bash.escape_line("a\\b`c`$d"), "a\\b`c`$d");
    }

    #[test]
    fn test_visible_text_preserved() {
        let escaped = Shell::Bash.escape_line(LINE);
        let visible: String = escaped
            .split('\x01')
            .map(|part| part.split_once('\x02').map_or(part, |(_, rest)| rest))
            .collect();

        assert_eq!(visible, "(git:x$(id),unstaged:2)");
    }
}
