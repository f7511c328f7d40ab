use {
    anyhow::Context,
    clap::Parser,
    minifb::{Key, Window, WindowOptions},
    sighting_console::*,
    std::time::{Duration, Instant},
    video::CaptureConfig,
};

fn run(args: Args) -> anyhow::Result<()> {
    let layout = ScreenLayout::for_screen(args.screen.size());
    let window_size = layout.window;

    let capture = CaptureConfig::default().with_source(args.source.clone());
    let panel = display::DisplayPanel::open(layout.panel_size(), layout.overlay.clone(), &capture);

    let mut schedule = DayNightSchedule::from_clock(args.mode.override_mode());
    let mut telemetry = SimulatedTelemetry::new(args.screen.size());
    let mut console = Console::new(layout, panel);
    console.set_mode(schedule.mode());

    let mut window = Window::new(
        "Sighting Console - ESC to exit",
        window_size.x,
        window_size.y,
        WindowOptions::default(),
    )
    .context("failed to open window")?;
    window.set_target_fps(30);

    let refresh = Duration::from_millis(args.refresh_ms.max(1));
    let mut next_refresh = Instant::now();

    log::info!(
        "console: {}x{} window, source {}, refresh {} ms",
        window_size.x,
        window_size.y,
        args.source,
        refresh.as_millis()
    );

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        if now >= next_refresh {
            console.apply_reading(&telemetry.next_reading());
            next_refresh = now + refresh;
        }
        if let Some(mode) = schedule.poll(now) {
            console.set_mode(mode);
        }

        console.compose();
        window
            .update_with_buffer(&console.buffer(), window_size.x, window_size.y)
            .context("failed to update window")?;
    }

    log::info!("console: exiting");
    console.close();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match &args.log_dir {
        Some(dir) => base::init_file_logger(dir)?,
        None => base::init_stdout_logger(),
    }
    run(args)?;
    Ok(())
}
