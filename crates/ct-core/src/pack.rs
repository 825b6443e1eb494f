//! Track packing.
//!
//! The heuristic is "last-in-first-fit with a single forward top-up":
//! both sessions are filled by scanning the remaining pool from its last
//! element to its first, moving any talk that still fits; if the
//! afternoon fill lands under its minimum target, one forward scan moves
//! the first talk that fits and then stops. The scan asymmetry is a
//! deliberate tie-break — changing it changes which agenda comes out —
//! so it is preserved exactly.
//!
//! The packer owns the pool for the duration of a run. A talk longer
//! than the afternoon maximum fits no session; once only such talks
//! remain, an iteration removes nothing and the run aborts with
//! [`PackError::PoolStalled`] instead of looping forever.

use thiserror::Error;

use crate::talk::Talk;
use crate::track::{Session, SessionLimits, Track};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The pool stopped shrinking: every remaining talk is longer than
    /// the largest session capacity. Carries the tracks completed so far
    /// and the leftover talks so nothing is silently lost.
    #[error("{} talk(s) fit no session and remain unscheduled", .unscheduled.len())]
    PoolStalled {
        tracks: Vec<Track>,
        unscheduled: Vec<Talk>,
    },
}

/// Partitions the talk pool into tracks.
///
/// Consumes the pool. Talks are assigned to exactly one session of
/// exactly one track, in as few tracks as the greedy heuristic manages.
/// Input order is significant: it decides which talks the reverse scan
/// tries first.
pub fn pack_tracks(talks: Vec<Talk>, limits: &SessionLimits) -> Result<Vec<Track>, PackError> {
    let mut pool = talks;
    let mut tracks = Vec::new();

    while !pool.is_empty() {
        let before = pool.len();

        let morning = fill_reverse(&mut pool, limits.morning_minutes);
        let mut afternoon = fill_reverse(&mut pool, limits.afternoon_max_minutes);
        if afternoon.scheduled_minutes() < limits.afternoon_min_minutes {
            top_up_forward(&mut pool, &mut afternoon);
        }

        if pool.len() == before {
            return Err(PackError::PoolStalled {
                tracks,
                unscheduled: pool,
            });
        }

        tracks.push(Track { morning, afternoon });
    }

    Ok(tracks)
}

/// Greedy fill scanning the pool from its last element to its first.
fn fill_reverse(pool: &mut Vec<Talk>, capacity_minutes: u32) -> Session {
    let mut session = Session::empty(capacity_minutes);
    let mut remaining = capacity_minutes;

    let mut index = pool.len();
    while index > 0 {
        index -= 1;
        if pool[index].minutes <= remaining {
            let talk = pool.remove(index);
            remaining -= talk.minutes;
            session.talks.push(talk);
        }
    }

    session
}

/// One-shot repair: moves the first pool talk that still fits, front to
/// back, then stops whether or not the minimum target was reached.
fn top_up_forward(pool: &mut Vec<Talk>, session: &mut Session) {
    let remaining = session.remaining_minutes();
    if let Some(position) = pool.iter().position(|t| t.minutes <= remaining) {
        session.talks.push(pool.remove(position));
    }
}
