//! Countdown driver for quiz sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::services::sessions::SessionStore;

/// Tick a session's countdown every `period` until it ends.
///
/// The task stops on its own once the session is removed or restarted (its
/// generation no longer matches `generation`). A session that finishes is kept
/// for `retention` so its summary can still be read, then evicted unless it was
/// restarted in the meantime.
pub fn spawn_countdown(
    store: Arc<SessionStore>,
    id: Uuid,
    generation: u64,
    period: Duration,
    retention: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;

            let status = store
                .with_mut(id, |session| {
                    (session.generation() == generation).then(|| session.tick())
                })
                .await
                .flatten();

            match status {
                None => {
                    tracing::debug!(%id, generation, "countdown stopped: session gone or restarted");
                    break;
                }
                Some(status) if status.is_finished() => {
                    tracing::info!(%id, ?status, "countdown ended");
                    evict_after(&store, id, generation, retention).await;
                    break;
                }
                Some(_) => {}
            }
        }
    })
}

async fn evict_after(store: &SessionStore, id: Uuid, generation: u64, retention: Duration) {
    tokio::time::sleep(retention).await;

    let evicted = store
        .remove_if(id, |session| {
            session.generation() == generation && session.status().is_finished()
        })
        .await;
    if evicted {
        tracing::info!(%id, "finished quiz session evicted");
    }
}
