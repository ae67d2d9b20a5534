//! Asteroids Clone entry point
//!
//! Headless driver: loads settings, seeds the session and steps the
//! simulation at the fixed rate, flown by the demo pilot. The final frame is
//! printed as JSON on stdout.

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use asteroids_clone::Settings;
    use asteroids_clone::autopilot::autopilot_input;
    use asteroids_clone::renderer::{RenderSnapshot, shapes};
    use asteroids_clone::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Asteroids Clone (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::error!("Ignoring settings file {}: {}", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::with_screen(seed, settings.screen_width, settings.screen_height);
    let mut line_vertices = 0usize;

    for t in 1..=settings.ticks {
        let input = if settings.autopilot {
            autopilot_input(&state)
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);

        let snapshot = RenderSnapshot::capture(&state);
        line_vertices = line_vertices.max(shapes::frame(&snapshot).len());

        if settings.hud_log_interval > 0 && t % settings.hud_log_interval == 0 {
            log::info!("[tick {}] {}", t, snapshot.overlay_text().replace('\n', " / "));
        }
    }

    log::info!(
        "Finished {} ticks, peak frame size {} line vertices",
        settings.ticks,
        line_vertices
    );

    match serde_json::to_string_pretty(&RenderSnapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library is driven by the host page
}
