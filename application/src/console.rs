//! [`Console`] surface of the administrator.

use service::list::{toast::Level, Confirm, Notifier, Prompt, Toast};
use tokio::io::{self, AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};

/// Terminal the administrator works in.
///
/// [`Toast`]s are printed as they come, and [`Prompt`]s are answered on the
/// standard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console {
    /// Indicator whether every [`Prompt`] is confirmed without asking.
    pub assume_yes: bool,
}

impl Console {
    /// Creates a new [`Console`].
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for Console {
    fn notify(&self, toast: Toast) {
        tracing::debug!(level = %toast.level, title = %toast.title, "toast");
        let line = format_toast(&toast);
        match toast.level {
            Level::Success => println!("{line}"),
            Level::Warning | Level::Error => eprintln!("{line}"),
        }
    }
}

impl Confirm for Console {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        println!("{}", format_prompt(prompt));
        if self.assume_yes {
            println!("{} [y/N] y", prompt.confirm);
            return true;
        }

        let mut stdout = io::stdout();
        let question = format!("{} [y/N] ", prompt.confirm);
        if let Err(e) = stdout.write_all(question.as_bytes()).await {
            tracing::warn!("failed to ask for confirmation: {e}");
            return false;
        }
        _ = stdout.flush().await;

        let mut answer = String::new();
        match BufReader::new(io::stdin()).read_line(&mut answer).await {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("failed to read confirmation: {e}");
                false
            }
        }
    }
}

/// Formats the provided [`Toast`] as a single line.
fn format_toast(toast: &Toast) -> String {
    let mark = match toast.level {
        Level::Success => "✓",
        Level::Warning => "!",
        Level::Error => "✗",
    };
    format!("{mark} {}: {}", toast.title, toast.text)
}

/// Formats the title and the text of the provided [`Prompt`].
fn format_prompt(prompt: &Prompt) -> String {
    format!("{}\n{}", prompt.title, prompt.text)
}

/// Indicates whether the provided `answer` confirms a [`Prompt`].
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod spec {
    use service::list::{Confirm as _, Prompt, Toast};

    use super::{format_prompt, format_toast, is_yes, Console};

    #[test]
    fn accepts_only_explicit_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no\n"));
        assert!(!is_yes("yep\n"));
    }

    #[test]
    fn formats_toasts() {
        assert_eq!(
            format_toast(&Toast::success("Success", "User blocked")),
            "✓ Success: User blocked",
        );
        assert_eq!(
            format_toast(&Toast::error("Error", "Failed to block user")),
            "✗ Error: Failed to block user",
        );
    }

    #[test]
    fn formats_prompts() {
        let prompt = Prompt {
            title: "Block User?".into(),
            text: "Are you sure you want to block Asha?".into(),
            confirm: "Yes, block".into(),
        };

        assert_eq!(
            format_prompt(&prompt),
            "Block User?\nAre you sure you want to block Asha?",
        );
    }

    #[tokio::test]
    async fn confirms_without_asking_when_assumed() {
        let prompt = Prompt {
            title: "Delete Template?".into(),
            text: "Are you sure?".into(),
            confirm: "Yes, Delete".into(),
        };

        assert!(Console::new(true).confirm(&prompt).await);
    }
}
