use anyhow::Result as AnyResult;
use inkcast::{
    canvas::{CanvasController, PaletteColor},
    device::DeviceProfile,
    predictor::Predictor,
    prefs::Preferences,
    render::SegmentCounter,
    stylus::{PenEvent, PenPhase},
};
use inkcast_core::stroke::Milliseconds;
use strum::IntoEnumIterator;

/// Samples per synthetic stroke, including the down and up events.
const TRACE_SAMPLES: usize = 24;
/// Synthetic inter-sample gap, roughly a 120Hz digitizer.
const TRACE_STEP_MS: i64 = 8;

/// Feed one arc-shaped stroke into the controller, starting at `now`.
/// Returns the time just after the lift-off sample.
fn replay_arc(canvas: &mut CanvasController, index: usize, mut now: Milliseconds) -> Milliseconds {
    let y_offset = index as f32 * 40.0;
    for step in 0..TRACE_SAMPLES {
        let phase = match step {
            0 => PenPhase::Down,
            s if s == TRACE_SAMPLES - 1 => PenPhase::Up,
            _ => PenPhase::Move,
        };
        let t = step as f32 / (TRACE_SAMPLES - 1) as f32;
        canvas.handle_event(PenEvent {
            phase,
            pos: [t * 200.0, y_offset + (t * std::f32::consts::PI).sin() * 30.0],
            // Press in, ease out.
            pressure: 0.2 + 0.7 * (t * std::f32::consts::PI).sin(),
            tilt: 0.0,
            time: now,
        });
        now = now + Milliseconds(TRACE_STEP_MS);
    }
    now
}

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let prefs = Preferences::load();
    let profile = DeviceProfile::host();
    let predictor = Predictor::new(&profile, &prefs);
    log::info!(
        "input mode: {}",
        if predictor.is_enabled() {
            "forecast prediction"
        } else {
            "standard touch"
        }
    );

    let mut canvas = CanvasController::new(predictor, &prefs);

    // No GUI shell here - replay a synthetic trace, one arc per built-in color.
    let mut now = Milliseconds(0);
    for (index, palette) in PaletteColor::iter().enumerate() {
        canvas.set_color(palette.color());
        now = replay_arc(&mut canvas, index, now);
    }
    // And exercise the edit operations once.
    canvas.undo();

    let mut counter = SegmentCounter::default();
    if canvas.take_redraw() {
        canvas.render_to(&mut counter);
    }
    log::info!(
        "replayed trace: {} strokes committed, {} segments drawn",
        canvas.strokes().len(),
        counter.segments
    );
    Ok(())
}
