//! Answer collection
//!
//! Questions are asked one at a time, in order. Each question sees the answers
//! collected before it, so a confirm can gate a later question.

use super::questions::{Answer, Answers, Question};
use crate::error::Result;
use std::io;
use tracing::debug;

/// Presents a single question and blocks until it is answered
///
/// An `io::ErrorKind::Interrupted` error means the operator aborted the session.
pub trait Prompter {
    /// Open the session. Called once, after quickstart gating and before the
    /// catalog is fetched.
    fn start(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn ask(&mut self, question: &Question) -> io::Result<Answer>;
}

/// Ask every applicable question and return the answers
pub fn collect<P: Prompter + ?Sized>(
    questions: &[Question],
    prompter: &mut P,
) -> Result<Answers> {
    let mut answers = Answers::new();

    for question in questions {
        if answers.contains_key(&question.id) {
            continue;
        }
        if !question.applies(&answers) {
            debug!(question = ?question.id, "skipped by earlier answer");
            continue;
        }

        let answer = prompter.ask(question)?;
        debug!(question = ?question.id, "answered");
        answers.insert(question.id, answer);
    }

    Ok(answers)
}
