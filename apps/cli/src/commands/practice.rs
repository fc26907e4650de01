//! Interactive dictation session.

use anyhow::Result;
use chrono::Utc;
use dictation_core::{compare_answer, KeyValueStore, Outcome, PromptTracker, Session, Speaker};
use std::io::{BufRead, Write};

/// Options that only affect presentation.
#[derive(Debug, Clone)]
pub struct PracticeOptions {
    pub lang: String,
    /// Always print the prompt, even when it can be spoken.
    pub show_prompt: bool,
}

/// Tally of one practice run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PracticeReport {
    pub correct: usize,
    pub skipped: usize,
    pub quit_early: bool,
}

enum Line {
    Quit,
    Replay,
    Skip,
    /// Whitespace only; asked again rather than counted as a skip.
    Blank,
    Answer(String),
}

fn classify(raw: &str) -> Line {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Line::Skip;
    }
    match line.trim() {
        "" => Line::Blank,
        ":q" | ":quit" => Line::Quit,
        ":r" | ":replay" => Line::Replay,
        ":s" | ":skip" => Line::Skip,
        _ => Line::Answer(line.to_string()),
    }
}

/// Run one session, reading answers line by line from `input`.
pub fn run_practice<S, R, W>(
    session: &mut Session<S>,
    speaker: &mut dyn Speaker,
    options: &PracticeOptions,
    input: &mut R,
    out: &mut W,
) -> Result<PracticeReport>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let total = session.start()?;
    let mut report = PracticeReport::default();

    if total == 0 {
        writeln!(
            out,
            "No questions available: every word in range is mastered or the word list is empty."
        )?;
        return Ok(report);
    }

    writeln!(out, "Type what you hear. Commands: :replay, :skip (or empty line), :quit")?;
    let mut tracker = PromptTracker::new();

    'questions: while let Some(entry) = session.current() {
        let prompt = entry.prompt().to_string();
        tracker.present(prompt.clone());

        writeln!(out)?;
        if options.show_prompt || !speaker.is_ready() {
            writeln!(out, "[{}/{}] {}", session.position() + 1, total, prompt)?;
        } else {
            writeln!(out, "[{}/{}]", session.position() + 1, total)?;
        }
        speaker.speak(&prompt, &options.lang);

        let outcome = loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                report.quit_early = true;
                break 'questions;
            }

            match classify(&line) {
                Line::Quit => {
                    report.quit_early = true;
                    break 'questions;
                }
                Line::Replay => speaker.speak(&prompt, &options.lang),
                Line::Blank => {}
                Line::Skip => {
                    if let Some(outcome) = tracker.skip() {
                        break outcome;
                    }
                }
                Line::Answer(typed) => {
                    if let Some(outcome) = tracker.input(&typed) {
                        break outcome;
                    }
                    let result = compare_answer(&typed, &prompt);
                    writeln!(
                        out,
                        "Not quite ({:.0}% match). Try again or :skip.",
                        result.similarity * 100.0
                    )?;
                }
            }
        };

        speaker.cancel();
        session.answer(outcome.was_correct(), Utc::now())?;
        match outcome {
            Outcome::Correct => {
                report.correct += 1;
                writeln!(out, "Correct!")?;
            }
            Outcome::Skipped => {
                report.skipped += 1;
                writeln!(out, "Skipped. Answer: {prompt}")?;
            }
        }
    }

    speaker.cancel();
    writeln!(out)?;
    writeln!(
        out,
        "Session finished: {} correct, {} skipped.",
        report.correct, report.skipped
    )?;
    tracing::info!(
        correct = report.correct,
        skipped = report.skipped,
        quit_early = report.quit_early,
        "practice finished"
    );
    Ok(report)
}
