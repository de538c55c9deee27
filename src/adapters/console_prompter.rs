use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::core::interfaces::adapters::UserPrompter;

/// Stdin/stdout implementation of the interaction shell.
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl UserPrompter for ConsolePrompter {
    fn ask_line(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        Ok(line.trim().to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.ask_line(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
