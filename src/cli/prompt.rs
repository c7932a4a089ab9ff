//! Interactive input: passwords and destructive-action confirmation.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password};
use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::error::{Error, Result};

/// Read a password.
///
/// Piped stdin supplies the first line (newline removed). On a terminal a
/// hidden prompt is shown, asking twice when `confirm` is set.
///
/// # Errors
///
/// Returns `Error::Usage` for an empty password.
pub fn password(confirm: bool) -> Result<Zeroizing<String>> {
    let password = if !io::stdin().is_terminal() {
        debug!("reading password from stdin");
        let mut line = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        line
    } else {
        let prompt = Password::new().with_prompt("Password");
        let prompt = if confirm {
            prompt.with_confirmation("Confirm password", "passwords do not match")
        } else {
            prompt
        };
        Zeroizing::new(prompt.interact()?)
    };

    if password.is_empty() {
        return Err(Error::Usage("password cannot be empty".to_string()));
    }
    Ok(password)
}

/// Confirm an in-place modification.
///
/// `yes` skips the check. Otherwise the user has to type back a random
/// six-digit PIN.
///
/// # Errors
///
/// Returns `Error::ConfirmationRequired` without a terminal, or
/// `Error::Cancelled` when the PIN does not match.
pub fn confirm(message: &str, yes: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    if !io::stdin().is_terminal() {
        return Err(Error::ConfirmationRequired);
    }

    let pin = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));
    output::warn(message);

    let input: String = Input::new()
        .with_prompt(format!("Type {} to confirm", pin))
        .allow_empty(true)
        .interact_text()?;

    if input.trim() == pin {
        Ok(())
    } else {
        Err(Error::Cancelled)
    }
}
