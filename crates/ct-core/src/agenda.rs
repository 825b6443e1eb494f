//! Agenda rendering.
//!
//! Turns packed tracks into the line-oriented agenda text: one `Track N:`
//! header per track, `HH:MM` stamps advancing by talk duration, and a
//! closing label after each session (lunch for the morning, the
//! networking event for the afternoon).

use std::fmt::Write;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::track::{Session, Track};

const MORNING_CLOSER: &str = "Lunch";
const AFTERNOON_CLOSER: &str = "Networking Event";

/// Wall-clock anchors for the two half-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaTimes {
    /// Morning session start. Default: 09:00.
    pub morning_start: NaiveTime,
    /// Afternoon session start. Default: 13:00.
    pub afternoon_start: NaiveTime,
}

impl Default for AgendaTimes {
    fn default() -> Self {
        Self {
            morning_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            afternoon_start: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }
    }
}

/// Formats the packed tracks as plain agenda text.
///
/// Tracks are numbered from 1. An empty session prints only its closing
/// label at the anchor time.
#[must_use]
pub fn format_agenda(tracks: &[Track], times: &AgendaTimes) -> String {
    let mut output = String::new();

    for (index, track) in tracks.iter().enumerate() {
        let _ = writeln!(output, "Track {}:", index + 1);
        write_session(&mut output, &track.morning, times.morning_start, MORNING_CLOSER);
        write_session(
            &mut output,
            &track.afternoon,
            times.afternoon_start,
            AFTERNOON_CLOSER,
        );
    }

    output
}

fn write_session(output: &mut String, session: &Session, start: NaiveTime, closer: &str) {
    let mut clock = start;

    for talk in &session.talks {
        let _ = writeln!(output, "{} {talk}", clock.format("%H:%M"));
        clock += Duration::minutes(i64::from(talk.minutes));
    }

    let _ = writeln!(output, "{} {closer}", clock.format("%H:%M"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::talk::Talk;

    fn session(capacity: u32, talks: &[(&str, u32)]) -> Session {
        let mut session = Session::empty(capacity);
        session
            .talks
            .extend(talks.iter().map(|&(title, minutes)| Talk::new(title, minutes)));
        session
    }

    #[test]
    fn test_single_track_agenda() {
        let tracks = vec![Track {
            morning: session(
                180,
                &[
                    ("Communicating Over Distance", 60),
                    ("Accounting-Driven Development", 45),
                ],
            ),
            afternoon: session(240, &[("Common .Net Errors", 45)]),
        }];

        insta::assert_snapshot!(format_agenda(&tracks, &AgendaTimes::default()), @r"
        Track 1:
        09:00 Communicating Over Distance 60min
        10:00 Accounting-Driven Development 45min
        10:45 Lunch
        13:00 Common .Net Errors 45min
        13:45 Networking Event
        ");
    }

    #[test]
    fn test_empty_session_prints_only_its_closer() {
        let tracks = vec![Track {
            morning: session(180, &[("Woah", 30)]),
            afternoon: session(240, &[]),
        }];

        let agenda = format_agenda(&tracks, &AgendaTimes::default());
        assert!(agenda.contains("13:00 Networking Event\n"));
    }

    #[test]
    fn test_tracks_are_numbered_without_separating_blank_lines() {
        let tracks = vec![
            Track {
                morning: session(180, &[]),
                afternoon: session(240, &[("A", 240)]),
            },
            Track {
                morning: session(180, &[("B", 30)]),
                afternoon: session(240, &[]),
            },
        ];

        insta::assert_snapshot!(format_agenda(&tracks, &AgendaTimes::default()), @r"
        Track 1:
        09:00 Lunch
        13:00 A 240min
        17:00 Networking Event
        Track 2:
        09:00 B 30min
        09:30 Lunch
        13:00 Networking Event
        ");
    }

    #[test]
    fn test_custom_anchor_times() {
        let times = AgendaTimes {
            morning_start: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            afternoon_start: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        };
        let tracks = vec![Track {
            morning: session(180, &[("Early Start", 45)]),
            afternoon: session(240, &[]),
        }];

        let agenda = format_agenda(&tracks, &times);
        assert!(agenda.contains("08:30 Early Start 45min\n"));
        assert!(agenda.contains("09:15 Lunch\n"));
        assert!(agenda.contains("14:00 Networking Event\n"));
    }

    #[test]
    fn test_no_tracks_renders_nothing() {
        assert_eq!(format_agenda(&[], &AgendaTimes::default()), "");
    }
}
