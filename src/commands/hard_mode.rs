//! Hard-mode comparison command

use crate::solver::{
    HardModeReport, JsonCheckpoint, Recommendation, Session, SessionConfig, compare_hard_mode,
};
use crate::wordlists::Corpus;
use anyhow::Result;
use indicatif::ProgressBar;

/// Pick the opening guess as a session would, then compare hard-mode and free
/// follow-ups for every bucket it leaves
///
/// `progress` is called once per pass, for the opening pass and then the
/// bucket comparison.
///
/// # Errors
///
/// Returns an error if no opening guess can be computed.
pub fn analyze_hard_mode(
    guesses: Corpus,
    answers: Corpus,
    config: SessionConfig,
    store: Option<&JsonCheckpoint>,
    progress: impl Fn() -> ProgressBar,
) -> Result<(Recommendation, HardModeReport)> {
    let policy = config.checkpoint;
    let mut session = Session::with_answers(guesses, answers, config);
    let opening = session.first_guess(&progress())?;
    let report = compare_hard_mode(
        session.guesses(),
        session.answers(),
        &opening.guess,
        store,
        policy,
        &progress(),
    );
    Ok((opening, report))
}
