//! Interactive advice loop
//!
//! Recommends a guess, reads the feedback as constraint pairs and repeats until
//! the secret is pinned down, the constraints contradict each other or input
//! runs out.

use crate::core::WORD_LEN;
use crate::output::{print_candidates, print_exhausted, print_recommendation, print_solved};
use crate::solver::{Outcome, Phase, Session, SessionError};
use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use log::warn;
use std::io::{self, BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// Drive `session` from `input` until it settles
///
/// Each line of input is one round of constraints such as `t1e2a2r3s3`
/// (1 = right spot, 2 = elsewhere in the word, 3 = absent). A blank line
/// re-scores without new constraints; `quit` or end of input stops early.
/// Malformed lines are reported and asked for again.
///
/// Returns the phase the session ended in.
///
/// # Errors
///
/// Returns an error if reading input fails or the session has nothing to score.
pub fn run_advise<R: BufRead>(
    session: &mut Session,
    mut input: R,
    progress: &ProgressBar,
) -> Result<Phase> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Advisor - Entropy                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("After each guess, enter the feedback as letter/digit pairs:\n");
    println!("  - 1: letter is in the right position");
    println!("  - 2: letter is in the word, elsewhere");
    println!("  - 3: letter is not in the word");
    println!("  e.g. {} for TEARS\n", "t1e2a2r3s3".bright_cyan());

    let opening = session.first_guess(progress)?;
    print_recommendation(&opening);

    let mut turn = 1;
    loop {
        let Some(line) = read_line(&mut input, &format!("Turn {turn} feedback"))? else {
            return Ok(session.phase());
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(session.phase());
        }

        match session.submit(&line) {
            Ok(Outcome::NextGuess(recommendation)) => {
                turn += 1;
                print_recommendation(&recommendation);
                if session.candidates().len() <= SHOW_CANDIDATES {
                    print_candidates(session.candidates());
                }
            }
            Ok(Outcome::Solved(word)) => {
                print_solved(&word, session.predicates());
                return Ok(session.phase());
            }
            Ok(Outcome::Exhausted) => {
                print_exhausted(session.predicates());
                return Ok(session.phase());
            }
            Err(SessionError::Constraint(e)) => {
                warn!("rejected constraints {line:?}: {e}");
                println!(
                    "{} {e}; enter up to {WORD_LEN} pairs like t1e2a2r3s3\n",
                    "Invalid feedback:".red()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::{Corpus, words_from_slice};
    use std::io::Cursor;

    fn small_session() -> Session {
        let corpus = Corpus::new(words_from_slice(&[
            "apple", "baker", "candy", "dolly", "event", "facet", "gates", "hairy", "igloo",
            "allow",
        ]))
        .unwrap();
        Session::new(corpus, SessionConfig::default())
    }

    #[test]
    fn runs_until_solved() {
        let mut session = small_session();
        let phase = run_advise(
            &mut session,
            Cursor::new("a2\nx3e3\nc1\n"),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(phase, Phase::Solved);
        assert_eq!(session.candidates()[0].text(), "candy");
    }

    #[test]
    fn malformed_line_is_asked_again() {
        let mut session = small_session();
        let phase = run_advise(
            &mut session,
            Cursor::new("a2e\n1a\ni1g1\n"),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(phase, Phase::Solved);
        assert_eq!(session.predicates().len(), 2);
    }

    #[test]
    fn contradiction_exhausts() {
        let mut session = small_session();
        let phase =
            run_advise(&mut session, Cursor::new("z1z1\n"), &ProgressBar::hidden()).unwrap();
        assert_eq!(phase, Phase::Exhausted);
    }

    #[test]
    fn end_of_input_stops_waiting() {
        let mut session = small_session();
        let phase = run_advise(&mut session, Cursor::new("a2\n"), &ProgressBar::hidden()).unwrap();
        assert_eq!(phase, Phase::AwaitingConstraints);
        assert_eq!(session.candidates().len(), 5);

        let mut session = small_session();
        let phase = run_advise(&mut session, Cursor::new("quit\ni1\n"), &ProgressBar::hidden())
            .unwrap();
        assert_eq!(phase, Phase::AwaitingConstraints);
        assert!(session.predicates().is_empty());
    }
}
