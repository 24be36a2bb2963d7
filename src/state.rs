use tokio::sync::watch;

/// Observable state of one screen operation at a point in time.
#[derive(Debug, Clone)]
pub struct OperationSnapshot<T> {
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for OperationSnapshot<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            result: None,
        }
    }
}

/// Per-screen operation state container.
///
/// The task driving an async operation calls `start()` when it begins and
/// `succeed`/`fail` when it ends; each call replaces the snapshot
/// atomically. The view layer reads `snapshot()` directly or holds a
/// `subscribe()` receiver and reacts to changes.
pub struct OperationState<T> {
    tx: watch::Sender<OperationSnapshot<T>>,
}

impl<T: Clone> OperationState<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OperationSnapshot::default());
        Self { tx }
    }

    /// Marks the operation in-flight and clears any previous outcome.
    pub fn start(&self) {
        self.tx.send_replace(OperationSnapshot {
            is_loading: true,
            error: None,
            result: None,
        });
    }

    pub fn succeed(&self, result: T) {
        self.tx.send_replace(OperationSnapshot {
            is_loading: false,
            error: None,
            result: Some(result),
        });
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.tx.send_replace(OperationSnapshot {
            is_loading: false,
            error: Some(message.into()),
            result: None,
        });
    }

    pub fn snapshot(&self) -> OperationSnapshot<T> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OperationSnapshot<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Default for OperationState<T> {
    fn default() -> Self {
        Self::new()
    }
}
