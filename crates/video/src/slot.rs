use {crate::*, tokio::sync::watch};

/// Producer half of the latest-frame slot, held by the capture thread.
pub struct FrameSender {
    inner: watch::Sender<Option<CaptureResult>>,
}

/// Consumer half of the latest-frame slot, held by the display.
pub struct FrameReceiver {
    inner: watch::Receiver<Option<CaptureResult>>,
}

/// Create an empty single-slot channel. Every publish replaces whatever the
/// receiver has not yet taken.
pub fn latest_slot() -> (FrameSender, FrameReceiver) {
    let (sender, receiver) = watch::channel(None);
    (
        FrameSender { inner: sender },
        FrameReceiver { inner: receiver },
    )
}

impl FrameSender {
    /// Replace the slot contents. Never blocks, works with no receiver.
    pub fn publish(&self, result: CaptureResult) {
        self.inner.send_replace(Some(result));
    }
}

impl FrameReceiver {
    /// Take the newest result if one arrived since the last call.
    ///
    /// Still yields the final result after the sender is gone.
    pub fn latest(&mut self) -> Option<CaptureResult> {
        let slot = self.inner.borrow_and_update();
        if !slot.has_changed() {
            return None;
        }
        slot.clone()
    }

    /// True once the capture side has dropped its sender.
    pub fn is_closed(&self) -> bool {
        self.inner.has_changed().is_err()
    }
}
