use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::fetch::FetchScope;
use crate::generation::{RequestGeneration, RequestTicket};
use crate::snapshot::Snapshot;

const MAX_LOGS: usize = 200;

/// The console surfaces that show manager numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Roster,
    Detail,
    Seasons,
    Titles,
    Trades,
    Awards,
}

impl View {
    /// Every surface except the roster is scoped to one manager.
    pub fn is_manager_scoped(self) -> bool {
        !matches!(self, View::Roster)
    }
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    LoadSnapshot {
        ticket: RequestTicket,
        scope: FetchScope,
    },
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum Delta {
    SnapshotLoaded {
        ticket: RequestTicket,
        snapshot: Arc<Snapshot>,
    },
    Log(String),
}

/// Consumer-side state for the manager console. Holds at most one snapshot and
/// only ever accepts the result of the latest load it issued.
#[derive(Debug)]
pub struct ConsoleState {
    pub view: View,
    pub config: AppConfig,
    pub selected_manager: Option<String>,
    pub snapshot: Option<Arc<Snapshot>>,
    pub loading: bool,
    pub logs: VecDeque<String>,
    pub stale_dropped: usize,
    generation: RequestGeneration,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ConsoleState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            view: View::Roster,
            config,
            selected_manager: None,
            snapshot: None,
            loading: false,
            logs: VecDeque::new(),
            stale_dropped: 0,
            generation: RequestGeneration::new(),
        }
    }

    /// Start a fresh fetch for the current view. Any load still in flight is
    /// superseded.
    pub fn begin_load(&mut self) -> ProviderCommand {
        let ticket = self.generation.issue();
        self.loading = true;
        let scope = match (&self.selected_manager, self.view.is_manager_scoped()) {
            (Some(id), true) => FetchScope::Manager(id.clone()),
            _ => FetchScope::All,
        };
        ProviderCommand::LoadSnapshot { ticket, scope }
    }

    /// Navigate to a manager surface; each view fetches its own data.
    pub fn open_manager(&mut self, manager_id: &str, view: View) -> ProviderCommand {
        self.selected_manager = Some(manager_id.trim().to_string());
        self.view = view;
        self.snapshot = None;
        self.begin_load()
    }

    pub fn open_roster(&mut self) -> ProviderCommand {
        self.view = View::Roster;
        self.snapshot = None;
        self.begin_load()
    }

    /// The surface went away; whatever is in flight must not land.
    pub fn unmount(&mut self) {
        self.generation.invalidate();
        self.loading = false;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.is_current(ticket)
    }

    pub fn toggle_show_inactive(&mut self) {
        self.config = self.config.with_show_inactive(!self.config.show_inactive);
    }

    pub fn refresh_config(&mut self) {
        self.config = self.config.refresh();
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

pub fn apply_delta(state: &mut ConsoleState, delta: Delta) {
    match delta {
        Delta::SnapshotLoaded { ticket, snapshot } => {
            let Some(snapshot) = state.generation.accept(ticket, snapshot) else {
                state.stale_dropped += 1;
                return;
            };
            if snapshot.is_degraded() {
                state.push_log(format!(
                    "[WARN] Snapshot {} loaded with {} missing collection(s)",
                    snapshot.id(),
                    snapshot.fetch_errors().len()
                ));
            }
            state.snapshot = Some(snapshot);
            state.loading = false;
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_ring_is_bounded() {
        let mut state = ConsoleState::default();
        for idx in 0..(MAX_LOGS + 25) {
            state.push_log(format!("line {idx}"));
        }
        assert_eq!(state.logs.len(), MAX_LOGS);
        assert_eq!(state.logs.front().map(String::as_str), Some("line 25"));
    }

    #[test]
    fn manager_views_fetch_scoped_history() {
        let mut state = ConsoleState::default();
        let ProviderCommand::LoadSnapshot { scope, .. } = state.open_manager(" M1 ", View::Trades)
        else {
            panic!("expected a load command");
        };
        assert_eq!(scope, FetchScope::Manager("M1".to_string()));

        let ProviderCommand::LoadSnapshot { scope, .. } = state.open_roster() else {
            panic!("expected a load command");
        };
        assert_eq!(scope, FetchScope::All);
    }
}
