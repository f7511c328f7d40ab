use {
    crate::*,
    base::Vec2,
    std::sync::{Arc, Mutex},
    video::{CaptureConfig, CaptureError, CaptureResult, Frame, FrameCaptureLoop, FrameReceiver},
};

/// What the video area currently shows. A frame and an error are never
/// current at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    Frame(Frame),
    Error(CaptureError),
}

/// Immutable snapshot of everything the overlay renderer draws from.
///
/// Updates build a new snapshot rather than editing this one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    pub display: DisplayState,
    /// Size of the last frame received. Kept while an error is shown.
    pub last_frame_size: Option<Vec2<usize>>,
    pub bounding_box: Option<BoundingBox>,
    pub mode: DisplayMode,
}

impl PanelState {
    pub fn frame(&self) -> Option<&Frame> {
        match &self.display {
            DisplayState::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CaptureError> {
        match &self.display {
            DisplayState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// A capture result replaces whatever was shown before.
    ///
    /// A frame also re-checks the target box against its size, so a box
    /// accepted earlier is dropped once it no longer fits.
    pub fn with_capture(&self, result: CaptureResult) -> Self {
        match result {
            Ok(frame) => Self {
                last_frame_size: Some(frame.size()),
                bounding_box: self
                    .bounding_box
                    .and_then(|b| b.validate(Some(frame.size()))),
                display: DisplayState::Frame(frame),
                ..self.clone()
            },
            Err(error) => Self {
                display: DisplayState::Error(error),
                ..self.clone()
            },
        }
    }

    /// Set or clear the target box. Invalid boxes clear it.
    pub fn with_bounding_box(&self, bounding_box: Option<BoundingBox>) -> Self {
        Self {
            bounding_box: bounding_box.and_then(|b| b.validate(self.last_frame_size)),
            ..self.clone()
        }
    }

    pub fn with_mode(&self, mode: DisplayMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// The video panel: current state, the capture loop feeding it, and the
/// renderer that draws it.
///
/// All entry points take `&self`; the state is swapped as a whole under a
/// short lock, so a render always sees one consistent snapshot.
pub struct DisplayPanel {
    renderer: OverlayRenderer,
    size: Vec2<usize>,
    state: Mutex<Arc<PanelState>>,
    receiver: Mutex<Option<FrameReceiver>>,
    capture: Option<FrameCaptureLoop>,
}

impl DisplayPanel {
    /// A panel with no capture attached. Frames arrive via `apply_capture`.
    pub fn new(size: Vec2<usize>, config: OverlayConfig) -> Self {
        Self::build(size, config, None, None)
    }

    fn build(
        size: Vec2<usize>,
        config: OverlayConfig,
        capture: Option<FrameCaptureLoop>,
        receiver: Option<FrameReceiver>,
    ) -> Self {
        Self {
            renderer: OverlayRenderer::new(config),
            size,
            state: Mutex::new(Arc::new(PanelState::default())),
            receiver: Mutex::new(receiver),
            capture,
        }
    }

    /// A panel fed by an already running capture loop.
    pub fn with_capture(
        size: Vec2<usize>,
        config: OverlayConfig,
        capture: FrameCaptureLoop,
        receiver: FrameReceiver,
    ) -> Self {
        Self::build(size, config, Some(capture), Some(receiver))
    }

    /// Start capturing from `capture` and show it on a new panel.
    ///
    /// A source that cannot be opened is not an error here; it shows up as
    /// the "Camera unavailable" banner on the first refresh.
    pub fn open(size: Vec2<usize>, config: OverlayConfig, capture: &CaptureConfig) -> Self {
        let (capture, receiver) = FrameCaptureLoop::spawn(capture);
        log::info!("display panel: opened at {}x{}", size.x, size.y);
        Self::with_capture(size, config, capture, receiver)
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    pub fn snapshot(&self) -> Arc<PanelState> {
        Arc::clone(&self.state.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn update<F>(&self, f: F) -> Arc<PanelState>
    where
        F: FnOnce(&PanelState) -> PanelState,
    {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(f(&state));
        *state = Arc::clone(&next);
        next
    }

    /// Show a capture result.
    pub fn apply_capture(&self, result: CaptureResult) {
        let was_error = self.snapshot().error().cloned();
        if let Err(error) = &result {
            if was_error.as_ref() != Some(error) {
                log::warn!("display panel: {}", error);
            }
        } else if was_error.is_some() {
            log::info!("display panel: video restored");
        }
        let before = self.snapshot().bounding_box;
        let next = self.update(|state| state.with_capture(result));
        if let (Some(dropped), None) = (before, next.bounding_box) {
            log::debug!(
                "display panel: dropping bounding box {:?} for frame {:?}",
                dropped,
                next.last_frame_size
            );
        }
    }

    pub fn set_frame(&self, frame: Frame) {
        self.apply_capture(Ok(frame));
    }

    pub fn set_error(&self, error: CaptureError) {
        self.apply_capture(Err(error));
    }

    /// Replace the target box. Returns whether the box was accepted.
    pub fn set_bounding_box(&self, bounding_box: Option<BoundingBox>) -> bool {
        let next = self.update(|state| state.with_bounding_box(bounding_box));
        let accepted = next.bounding_box.is_some();
        if let (Some(rejected), false) = (bounding_box, accepted) {
            log::debug!(
                "display panel: dropping bounding box {:?} for frame {:?}",
                rejected,
                next.last_frame_size
            );
        }
        accepted
    }

    pub fn set_display_mode(&self, mode: DisplayMode) {
        let previous = self.snapshot().mode;
        if previous != mode {
            log::info!("display panel: switching to {} mode", mode);
        }
        self.update(|state| state.with_mode(mode));
    }

    pub fn mode(&self) -> DisplayMode {
        self.snapshot().mode
    }

    /// Take the newest capture result, if any. Returns true if the state changed.
    pub fn poll_capture(&self) -> bool {
        let latest = self
            .receiver
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_mut()
            .and_then(|receiver| receiver.latest());
        match latest {
            Some(result) => {
                self.apply_capture(result);
                true
            }
            None => false,
        }
    }

    /// A canvas matching the panel size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.size)
    }

    /// Pull in the newest capture result and draw the panel into `canvas`.
    pub fn render(&self, canvas: &mut Canvas) -> Crosshair {
        self.poll_capture();
        self.renderer.render(&self.snapshot(), canvas)
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.as_ref().is_some_and(|c| c.is_running())
    }

    /// Stop the capture loop. The last state stays on screen.
    pub fn close(&self) {
        if let Some(capture) = &self.capture {
            capture.stop();
            log::info!("display panel: closed");
        }
    }
}

impl Drop for DisplayPanel {
    fn drop(&mut self) {
        self.close();
    }
}
