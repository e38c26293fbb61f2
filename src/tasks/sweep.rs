//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::Shared;

/// Deadline used when a period cannot be added to the clock, roughly 30 years.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Returns `from + period`, or a far-future deadline if that overflows.
fn deadline_after(from: Instant, period: Duration) -> Instant {
    from.checked_add(period)
        .or_else(|| from.checked_add(FAR_FUTURE))
        .unwrap_or(from)
}

/// Spawns the sweeper for one cache on the given runtime.
///
/// The first pass runs one `period` after this call, then once every
/// `period`. Each pass takes the cache lock once and drops every entry older
/// than the cache TTL.
///
/// The task only holds a weak reference to the cache state. It exits on its
/// own after the cache is dropped, although the owning cache normally aborts
/// it first through the returned handle.
pub(crate) fn spawn_sweep_task(
    shared: Weak<Shared>,
    period: Duration,
    handle: &Handle,
) -> JoinHandle<()> {
    let mut next_sweep = deadline_after(Instant::now(), period);

    handle.spawn(async move {
        debug!("Starting TTL sweep task with period of {:?}", period);

        loop {
            tokio::time::sleep_until(next_sweep).await;

            // Late passes push the schedule back instead of bursting.
            next_sweep = deadline_after(next_sweep, period);
            let now = Instant::now();
            if next_sweep <= now {
                next_sweep = deadline_after(now, period);
            }

            let Some(shared) = shared.upgrade() else {
                debug!("Cache dropped, stopping TTL sweep task");
                break;
            };
            let removed = shared.sweep_expired();
            drop(shared);

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
