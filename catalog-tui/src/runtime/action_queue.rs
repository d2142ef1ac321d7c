use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the API client, queued by key handlers and run by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    LoadProjects,
    LoadFilterOptions,
    OpenProject { id: i64 },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
