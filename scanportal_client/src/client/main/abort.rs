use tokio::sync::watch;

/// Create a linked handle/signal pair for aborting in-flight requests.
///
/// The signal side is cloned into as many concurrent calls as needed;
/// aborting the handle fails every one of them with `ApiError::Aborted`.
pub fn abort_channel() -> (AbortHandle, AbortSignal) {
    let (tx, rx) = watch::channel(false);
    (AbortHandle { tx }, AbortSignal { rx })
}

/// Caller-held side of an abort pair.
#[derive(Debug)]
pub struct AbortHandle {
    tx: watch::Sender<bool>,
}

impl AbortHandle {
    /// Abort every call observing a signal linked to this handle.
    pub fn abort(&self) {
        let _ = self.tx.send(true);
    }

    /// A fresh signal linked to this handle.
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            rx: self.tx.subscribe(),
        }
    }
}

/// Signal observed by in-flight requests.
#[derive(Clone, Debug)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the linked handle aborts. If the handle is dropped
    /// without aborting, this never resolves and the request runs to
    /// completion.
    pub(crate) async fn aborted(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
