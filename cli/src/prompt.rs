use artistmap_core::TimeWindow;
use std::io::{BufRead, Write};
use thiserror::Error;

const QUIT: &str = "q";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("aborted")]
    Aborted,

    #[error("input ended before a value was entered")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Asks for missing settings on a line-based terminal. Entering `q` at any
/// re-prompt aborts.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn username(&mut self) -> Result<String, PromptError> {
        let mut answer = self.ask("Username: ")?;
        while answer.is_empty() {
            answer = self.ask("Please enter a Last.fm username: ")?;
        }
        Ok(answer)
    }

    pub fn count(&mut self, question: &str) -> Result<usize, PromptError> {
        let mut answer = self.ask(question)?;
        loop {
            if let Some(count) = parse_positive(&answer) {
                return Ok(count);
            }
            answer = self.ask_or_quit("Please enter a whole number greater than zero, or 'q' to quit: ")?;
        }
    }

    pub fn time_window(&mut self) -> Result<TimeWindow, PromptError> {
        let choices = TimeWindow::choices();
        let mut answer = self.ask(&format!(
            "What length of time do you want to search through? ({choices}): "
        ))?;

        loop {
            if let Ok(window) = answer.parse::<TimeWindow>() {
                return Ok(window);
            }
            answer = self.ask_or_quit(&format!(
                "I'm sorry, I didn't recognize that. The available options are: ({choices}). Please try again, or enter 'q' to quit: "
            ))?;
        }
    }

    fn ask_or_quit(&mut self, question: &str) -> Result<String, PromptError> {
        let answer = self.ask(question)?;
        if answer.eq_ignore_ascii_case(QUIT) {
            return Err(PromptError::Aborted);
        }
        Ok(answer)
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

fn parse_positive(answer: &str) -> Option<usize> {
    answer.parse::<usize>().ok().filter(|count| *count > 0)
}
