// Error display with hints for the person whose prompt broke
use crate::config::LOG_ENV;
use crate::errors::PromptError;
use colored::Colorize;

/// Hints for errors that reach the top level
pub fn suggestions(error: &PromptError) -> Vec<String> {
    match error {
        PromptError::Environment(reason) if reason.contains("directory") => vec![
            "Check that the directory still exists".to_string(),
            format!("Run {} to confirm where you are", "pwd -P".bright_cyan()),
        ],

        PromptError::Environment(reason) if reason.contains("user") => vec![format!(
            "Set {} or {} in your shell profile",
            "LOGNAME".bright_cyan(),
            "USER".bright_cyan()
        )],

        _ => Vec::new(),
    }
}

/// Display an error with helpful suggestions
pub fn display_error_with_suggestions(error: &PromptError) {
    eprintln!("\n{}: {}", "Error".bright_red().bold(), error);

    let hints = suggestions(error);
    if !hints.is_empty() {
        eprintln!("\n{}:", "Suggestions".bright_yellow());
        for hint in hints {
            eprintln!("  • {}", hint);
        }
    }

    eprintln!(
        "\n{}",
        format!("Set {}=debug for details.", LOG_ENV).dimmed()
    );
}
