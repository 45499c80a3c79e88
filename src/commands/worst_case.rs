//! Worst-case depth command

use crate::solver::{Recommendation, Session, SessionConfig, WorstCase, worst_case};
use crate::wordlists::Corpus;
use anyhow::Result;
use indicatif::ProgressBar;

/// Pick the opening guess as a session would, then search every branch from it
///
/// # Errors
///
/// Returns an error if no opening guess can be computed.
pub fn analyze_worst_case(
    guesses: Corpus,
    answers: Corpus,
    config: SessionConfig,
    progress: &ProgressBar,
) -> Result<(Recommendation, WorstCase)> {
    let pool = config.pool;
    let mut session = Session::with_answers(guesses, answers, config);
    let opening = session.first_guess(progress)?;
    let result = worst_case(session.guesses(), session.answers(), &opening.guess, pool);
    Ok((opening, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PoolMode;
    use crate::wordlists::words_from_slice;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn worst_case_starts_from_the_session_opening() {
        let answers = corpus(&["aaaaa", "bbbbb", "ccccc"]);
        let (opening, result) = analyze_worst_case(
            answers.clone(),
            answers,
            SessionConfig::default(),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(opening.guess.text(), "aaaaa");
        // aaaaa at 1, bbbbb at 2, ccccc at 3
        assert_eq!(result.depth, 3);
        assert_eq!(result.word.map(|w| w.text().to_string()).as_deref(), Some("ccccc"));
    }

    #[test]
    fn opening_from_the_guess_list_covers_every_answer() {
        let config = SessionConfig {
            pool: PoolMode::Corpus,
            ..SessionConfig::default()
        };
        let (opening, result) = analyze_worst_case(
            corpus(&["aaaaa", "bbbbb", "ccccc", "abcde"]),
            corpus(&["aaaaa", "bbbbb", "ccccc"]),
            config,
            &ProgressBar::hidden(),
        )
        .unwrap();

        // abcde separates all three answers, each is then guessed directly
        assert_eq!(opening.guess.text(), "abcde");
        assert_eq!(result.depth, 2);
        assert_eq!(result.distribution.values().sum::<usize>(), 3);
    }
}
