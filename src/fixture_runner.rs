//! Concurrent execution of one fixture with a hard end-of-fixture barrier.
//!
//! Each match of the fixture runs on its own thread, owning its [`Match`], two
//! `Arc<Team>` handles and an independently seeded RNG. Results come back over
//! an mpsc channel; the runner receives exactly one result per spawned task
//! before returning, so nothing after the call can observe a half-resolved
//! fixture. A failed task (error result or panic, which disconnects the channel)
//! aborts the fixture immediately instead of deadlocking the barrier: dropping
//! the receiver makes the surviving siblings' sends fail harmlessly, and their
//! results are discarded along with the error.

use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use crate::match_resolver::resolve_match;
use crate::schedule::Match;
use crate::team::TeamRegistry;

/// Resolves every match of a fixture concurrently and waits for all of them.
///
/// `fixture` must already be the selected, id-sorted match set. Each task's RNG
/// is seeded with `base_seed + match id`, so fixture results depend only on the
/// base seed and the schedule, not on thread interleaving.
///
/// Returns the resolved matches in id order.
pub(crate) fn run_fixture(
    registry: &TeamRegistry,
    fixture: Vec<Match>,
    base_seed: u64,
) -> anyhow::Result<Vec<Match>> {
    let expected = fixture.len();
    let (tx_result, rx_result) = mpsc::channel();

    for m in fixture {
        let home = registry
            .get(m.home)
            .with_context(|| format!("match {} references unknown home team {}", m.id, m.home))?
            .clone();
        let away = registry
            .get(m.away)
            .with_context(|| format!("match {} references unknown away team {}", m.id, m.away))?
            .clone();
        let seed = base_seed.wrapping_add(u64::from(m.id.0));
        let tx_result = tx_result.clone();

        thread::spawn(move || {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut m = m;
            let result = resolve_match(&mut m, &home, &away, &mut rng).map(|()| m);
            // The receiver is gone if a sibling already failed; nothing to do then.
            let _ = tx_result.send(result);
        });
    }
    drop(tx_result);

    let mut resolved = Vec::with_capacity(expected);
    for _ in 0..expected {
        match rx_result.recv() {
            Ok(Ok(m)) => {
                trace!(match_id = %m.id, "match resolved");
                resolved.push(m);
            }
            Ok(Err(err)) => {
                warn!("aborting fixture: {err:#}");
                return Err(err.context("match resolution failed"));
            }
            Err(mpsc::RecvError) => {
                bail!("a match task terminated without reporting a result");
            }
        }
    }

    resolved.sort_by_key(|m| m.id);
    Ok(resolved)
}
