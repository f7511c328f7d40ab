use {
    crate::*,
    std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
        thread::JoinHandle,
        time::Duration,
    },
};

/// Background capture thread feeding the latest-frame slot.
///
/// The thread opens its source, then reads, converts and publishes until
/// stopped. A failed open is published once as `DeviceUnavailable` and ends
/// the thread. Read errors are published and the loop carries on.
pub struct FrameCaptureLoop {
    running: Arc<AtomicBool>,
    join_handle: Mutex<Option<JoinHandle<()>>>,
}

impl FrameCaptureLoop {
    /// Start capturing from `source`, sleeping `interval` between reads.
    pub fn start(source: Box<dyn FrameSource>, interval: Duration, sender: FrameSender) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let join_handle = std::thread::spawn({
            let running = Arc::clone(&running);
            move || run(source, interval, sender, running)
        });
        Self {
            running,
            join_handle: Mutex::new(Some(join_handle)),
        }
    }

    /// Start capturing from the source described by `config`.
    pub fn spawn(config: &CaptureConfig) -> (Self, FrameReceiver) {
        let (sender, receiver) = latest_slot();
        log::info!("frame capture: starting on {}", config.source());
        let capture = Self::start(open_source(config), config.frame_interval(), sender);
        (capture, receiver)
    }

    /// False once stopped, or once the thread gave up on its source.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the thread and wait for it to release the source.
    ///
    /// Safe to call more than once and from any thread. Nothing is published
    /// after this returns.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
        let handle = self
            .join_handle
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            if handle.thread().id() == std::thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                log::error!("frame capture: worker thread panicked");
            }
        }
    }
}

impl Drop for FrameCaptureLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(
    mut source: Box<dyn FrameSource>,
    interval: Duration,
    sender: FrameSender,
    running: Arc<AtomicBool>,
) {
    if let Err(error) = source.open() {
        let error = if error.is_fatal() {
            error
        } else {
            CaptureError::DeviceUnavailable(error.to_string())
        };
        log::error!("frame capture: {}", error);
        if running.swap(false, Ordering::AcqRel) {
            sender.publish(Err(error));
        }
        return;
    }
    log::info!("frame capture: source open");

    while running.load(Ordering::Acquire) {
        let result = source.blocking_read().and_then(Frame::from_image);
        if let Err(error) = &result {
            log::warn!("frame capture: {}", error);
        }

        // stop() may have landed during the read
        if !running.load(Ordering::Acquire) {
            break;
        }
        sender.publish(result);
        std::thread::sleep(interval);
    }

    source.close();
    log::info!("frame capture: source closed");
}
