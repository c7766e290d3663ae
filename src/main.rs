use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;

mod frontend;

use blue_squirrel::camera::Camera;
use blue_squirrel::clock::SystemClock;
use blue_squirrel::game::{GameConfig, GameMode, GameSession};
use blue_squirrel::level::LevelLibrary;
use frontend::CanvasRenderer;
use frontend::hud::{self, Hud};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Oh No My Blue Flying Squirrel";
const BACKGROUND: Color = Color::RGB(20, 24, 40);
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Usage: `blue-squirrel [config.json]`
fn main() -> Result<(), String> {
    init_logging();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref()).map_err(|e| e.to_string())?;

    let library = LevelLibrary::new(&config.levels_dir);
    match library.list_levels() {
        Ok(available) => info!(dir = %library.directory().display(), ?available, "level library"),
        Err(e) => warn!(error = %e, "could not list level directory"),
    }

    let mut game = GameSession::new(config.levels.clone(), library, SystemClock);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut camera = Camera::new(
        config.window_width as f32,
        config.window_height as f32,
        config.camera_y_fraction,
    );
    let hud = Hud::new();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    repeat: false,
                    ..
                } if game.current_mode() == GameMode::MainMenu => {
                    if let Err(e) = game.play() {
                        error!(error = %e, "could not start game");
                    }
                }
                _ => {}
            }
        }

        let input = frontend::keys::read_input(&event_pump.keyboard_state());
        // A level that can't be loaded mid-run is fatal
        game.update(&input).map_err(|e| e.to_string())?;

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        match game.current_mode() {
            GameMode::MainMenu => hud::draw_main_menu(&mut canvas)?,
            GameMode::InGame => {
                if let Some(level) = game.level() {
                    camera.follow(level.player().body.position);
                    let mut renderer = CanvasRenderer::new(&mut canvas, &camera, config.show_hitboxes);
                    level.render(&mut renderer)?;
                    hud.render(&mut canvas, level.player())?;
                }
            }
            GameMode::GameOver => hud::draw_game_over(&mut canvas)?,
            GameMode::Win => hud::draw_win(&mut canvas)?,
        }

        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    info!("quitting");
    Ok(())
}
