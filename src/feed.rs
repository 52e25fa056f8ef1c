use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::config::AppConfig;
use crate::fetch::{build_fetch_pool, fetch_snapshot_in};
use crate::state::{Delta, ProviderCommand};
use crate::store::DataStore;

/// Run snapshot loads off the caller's thread.
///
/// Each `LoadSnapshot` command produces one `SnapshotLoaded` delta carrying the
/// command's ticket; deciding whether the result is still wanted is up to the
/// receiver. The worker exits on `Shutdown` or when either channel closes.
pub fn spawn_provider(
    store: Arc<dyn DataStore>,
    config: &AppConfig,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    let threads = config.fetch_parallelism;
    thread::spawn(move || {
        let pool = build_fetch_pool(threads);

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::LoadSnapshot { ticket, scope } => {
                    let snapshot = fetch_snapshot_in(pool.as_ref(), store.as_ref(), &scope);
                    let warnings: Vec<String> = snapshot
                        .fetch_errors()
                        .iter()
                        .map(|err| format!("[WARN] {err}"))
                        .collect();
                    let sent = warnings
                        .into_iter()
                        .try_for_each(|line| tx.send(Delta::Log(line)))
                        .and_then(|()| tx.send(Delta::SnapshotLoaded { ticket, snapshot }));
                    if sent.is_err() {
                        break;
                    }
                }
                ProviderCommand::Shutdown => break,
            }
        }
        tracing::debug!("snapshot provider stopped");
    })
}
