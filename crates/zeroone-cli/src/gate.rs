use std::io::{self, BufRead, Write};

use zeroone_optimistic::ConfirmGate;

/// Asks on the terminal. `--yes` answers for the user.
pub struct StdinGate {
    pub assume_yes: bool,
}

impl ConfirmGate for StdinGate {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
