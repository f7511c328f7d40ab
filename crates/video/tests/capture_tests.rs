use {
    base::Vec2,
    raster::{Image, PixelFormat},
    std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::{Duration, Instant},
    },
    video::{
        CaptureConfig, CaptureError, CaptureResult, FrameCaptureLoop, FrameReceiver, FrameSource,
        VideoSource, latest_slot,
    },
};

#[derive(Default)]
struct Counters {
    opens: AtomicUsize,
    closes: AtomicUsize,
    reads: AtomicUsize,
}

enum Behavior {
    Frames,
    FailOpen,
    FailReads,
}

struct MockSource {
    counters: Arc<Counters>,
    behavior: Behavior,
}

impl MockSource {
    fn new(behavior: Behavior) -> (Self, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        (
            Self {
                counters: Arc::clone(&counters),
                behavior,
            },
            counters,
        )
    }
}

impl FrameSource for MockSource {
    fn open(&mut self) -> Result<(), CaptureError> {
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::FailOpen => Err(CaptureError::DeviceUnavailable("mock".to_string())),
            _ => Ok(()),
        }
    }

    fn close(&mut self) {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
    }

    fn blocking_read(&mut self) -> Result<Image, CaptureError> {
        self.counters.reads.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::FailReads => Err(CaptureError::ReadFailed),
            _ => Ok(Image::new(Vec2::new(4, 2), vec![0u8; 24], PixelFormat::Bgr8)),
        }
    }
}

fn wait_for_result(receiver: &mut FrameReceiver) -> CaptureResult {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(result) = receiver.latest() {
            return result;
        }
        assert!(Instant::now() < deadline, "no capture result within 5s");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_publishes_frames() {
    let (source, counters) = MockSource::new(Behavior::Frames);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(5), sender);

    let frame = wait_for_result(&mut receiver).unwrap();
    assert_eq!(frame.size(), Vec2::new(4, 2));
    assert!(capture.is_running());

    capture.stop();
    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stop_twice_closes_once() {
    let (source, counters) = MockSource::new(Behavior::Frames);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(5), sender);
    wait_for_result(&mut receiver).unwrap();

    capture.stop();
    capture.stop();
    drop(capture);

    assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_nothing_published_after_stop() {
    let (source, _counters) = MockSource::new(Behavior::Frames);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(2), sender);
    wait_for_result(&mut receiver).unwrap();

    capture.stop();
    let _ = receiver.latest();
    std::thread::sleep(Duration::from_millis(50));
    assert!(receiver.latest().is_none());
    assert!(receiver.is_closed());
}

#[test]
fn test_open_failure_publishes_device_unavailable_and_exits() {
    let (source, counters) = MockSource::new(Behavior::FailOpen);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(5), sender);

    let error = wait_for_result(&mut receiver).unwrap_err();
    assert!(matches!(error, CaptureError::DeviceUnavailable(_)));
    assert_eq!(error.banner(), "Camera unavailable");

    capture.stop();
    assert!(!capture.is_running());
    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.reads.load(Ordering::SeqCst), 0);
    assert!(receiver.latest().is_none());
}

#[test]
fn test_read_failures_keep_looping() {
    let (source, counters) = MockSource::new(Behavior::FailReads);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(2), sender);

    assert_eq!(wait_for_result(&mut receiver), Err(CaptureError::ReadFailed));
    let deadline = Instant::now() + Duration::from_secs(5);
    while counters.reads.load(Ordering::SeqCst) < 3 {
        assert!(Instant::now() < deadline, "loop stopped reading");
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(capture.is_running());

    capture.stop();
    assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drop_stops_capture() {
    let (source, counters) = MockSource::new(Behavior::Frames);
    let (sender, mut receiver) = latest_slot();
    let capture = FrameCaptureLoop::start(Box::new(source), Duration::from_millis(5), sender);
    wait_for_result(&mut receiver).unwrap();

    drop(capture);
    assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
    assert!(receiver.is_closed());
}

#[test]
fn test_unsupported_uri_reports_camera_unavailable() {
    let config = CaptureConfig::default()
        .with_source(VideoSource::Uri("rtsp://example/stream".to_string()));
    let (capture, mut receiver) = FrameCaptureLoop::spawn(&config);

    let error = wait_for_result(&mut receiver).unwrap_err();
    assert!(error.is_fatal());
    capture.stop();
}

#[test]
fn test_pattern_source_produces_frames() {
    let config = CaptureConfig::default()
        .with_source(VideoSource::Pattern)
        .with_size(Vec2::new(64, 48))
        .with_frame_interval(Duration::from_millis(5));
    let (capture, mut receiver) = FrameCaptureLoop::spawn(&config);

    let frame = wait_for_result(&mut receiver).unwrap();
    assert_eq!(frame.size(), Vec2::new(64, 48));
    assert_eq!(frame.data().len(), 64 * 48 * 3);
    capture.stop();
}
