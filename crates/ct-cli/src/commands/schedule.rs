//! Schedule command: parse talk lines, pack tracks, print the agenda.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use ct_core::{PackError, format_agenda, pack_tracks, parse_lines};

use crate::Config;

/// Schedules talks read from `input`, or from stdin when `None`.
pub fn run(input: Option<&Path>, config: &Config) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    schedule_lines(text.lines(), config)
}

/// The shared pipeline: parse, pack, print.
///
/// A stalled pool still prints the agenda of the tracks that were built,
/// then fails with the leftover talks reported on stderr.
pub(crate) fn schedule_lines<'a, I>(lines: I, config: &Config) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let report = parse_lines(lines);
    if !report.skipped.is_empty() {
        tracing::warn!(
            skipped = report.skipped.len(),
            scheduled = report.talks.len(),
            "some input lines could not be parsed"
        );
    }

    match pack_tracks(report.talks, &config.limits()) {
        Ok(tracks) => {
            print!("{}", format_agenda(&tracks, &config.agenda_times()));
            Ok(())
        }
        Err(PackError::PoolStalled { tracks, unscheduled }) => {
            print!("{}", format_agenda(&tracks, &config.agenda_times()));
            for talk in &unscheduled {
                tracing::error!(%talk, "talk fits no session");
            }
            bail!(
                "{} talk(s) fit no session and remain unscheduled",
                unscheduled.len()
            )
        }
    }
}
