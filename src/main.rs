use keystroke_hud::app::HudApp;
use keystroke_hud::geometry::Viewport;
use keystroke_hud::host::{Host, KeyNameCatalog, SharedViewport};
use keystroke_hud::hud::OverlayRegistry;
use keystroke_hud::input_system::{HudAction, InputSystem};
use keystroke_hud::logging;
use keystroke_hud::render::HudRenderer;
use keystroke_hud::save::DirectoryStore;
use keystroke_hud::settings::HudSettings;
use keystroke_hud::text::BitmapTextMeasure;
use sdl2::pixels::Color;
use std::time::Duration;

const WINDOW_WIDTH: u32 = 854;
const WINDOW_HEIGHT: u32 = 480;
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

fn main() -> Result<(), String> {
    let settings_path = HudSettings::default_path();
    let (settings, settings_error) = match HudSettings::load(&settings_path) {
        Ok(settings) => (settings, None),
        Err(err) => (HudSettings::default(), Some(err)),
    };

    logging::init(settings.debug_logging);
    if let Some(err) = settings_error {
        tracing::warn!("Ignoring unreadable settings file {}: {}", settings_path.display(), err);
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Keystroke HUD", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let viewport = SharedViewport::new(Viewport::new(WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32));
    let store = DirectoryStore::new(DirectoryStore::default_directory())
        .map_err(|e| format!("Failed to open overlay directory: {}", e))?;
    tracing::info!("Overlays stored in {}", store.directory().display());

    let host = Host::new(viewport.clone(), BitmapTextMeasure, KeyNameCatalog);
    let mut registry = OverlayRegistry::new(store, host);
    registry.initialize();

    let mut app = HudApp::new(registry, settings);
    let mut input_system = InputSystem::new();
    let renderer = HudRenderer::new();

    while app.is_running() {
        // Route this frame's events by the context left by the last one
        input_system.context = app.context();

        for action in input_system.poll_events(&mut event_pump) {
            if let HudAction::ViewportResized(width, height) = action {
                viewport.set(Viewport::new(width, height));
            }
            app.apply(action);
        }

        app.update();

        canvas.set_draw_color(Color::RGB(20, 20, 30));
        canvas.clear();
        renderer.render(&mut canvas, &app)?;
        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    if let Err(err) = app.settings().save(&settings_path) {
        tracing::error!("Failed to save settings: {}", err);
    }

    Ok(())
}
