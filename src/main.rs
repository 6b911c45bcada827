use sdl2::event::{Event, WindowEvent};
use sdl2::pixels::Color;
use sdl2::video::Window;

mod config;
mod constants;
mod error;
mod game;
mod hud;
mod logging;
mod screen;
mod screens;
mod texture_manager;
mod viewport;

use config::ClientConfig;
use error::{format_error_stack, HudError};
use log::{debug, error, info, warn};
use screen::ScreenManager;
use screens::SpaceMapScreen;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use viewport::{fit_viewport, Fit, FitRect};

/// Frame pacing when vsync is disabled
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Color of the letterbox bars
const BAR_COLOR: Color = Color::RGB(0, 0, 0);

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", format_error_stack(&e));
            ExitCode::FAILURE
        }
    }
}

/// Refits the viewport after the window changed size
///
/// Windows below the logical size are grown back to it first. Returns `None`
/// for a zero-sized (minimized) window, keeping the previous viewport.
fn handle_resize(window: &mut Window, logical: (u32, u32), physical: (u32, u32)) -> Option<FitRect> {
    match fit_viewport(logical, physical) {
        Ok(Fit::Letterbox(rect)) => {
            debug!(
                "Resized to {}x{}, viewport ({:.3}, {:.3}, {:.3}, {:.3})",
                physical.0, physical.1, rect.left, rect.top, rect.width, rect.height
            );
            Some(rect)
        }
        Ok(fit @ Fit::Clamp { width, height }) => {
            debug!("Window {}x{} below minimum, growing to {}x{}", physical.0, physical.1, width, height);
            if let Err(e) = window.set_size(width, height) {
                warn!("Failed to resize window: {}", e);
                return Some(fit.rect());
            }
            handle_resize(window, logical, (width, height))
        }
        Err(e) => {
            debug!("Ignoring resize: {}", e);
            None
        }
    }
}

/// Hands `event` to the active screen and applies its transition
///
/// Returns `false` when the client should stop.
fn route_event(screens: &mut ScreenManager, event: &Event) -> bool {
    let transition = match screens.top_mut() {
        Some(screen) => screen.on_event(event),
        None => return false,
    };

    screens.apply(transition)
}

fn run() -> Result<(), HudError> {
    let config = ClientConfig::load().unwrap_or_else(|e| {
        warn!("{}", format_error_stack(&e));
        warn!("Falling back to default config");
        ClientConfig::default()
    });
    let logical = config.logical_size();

    let sdl_context = sdl2::init().map_err(|e| HudError::Sdl(e).during("failed to initialize SDL"))?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let mut window = video_subsystem
        .window(&config.window_title, logical.0, logical.1)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| HudError::Sdl(e.to_string()).during("failed to create window"))?;

    window
        .set_minimum_size(logical.0, logical.1)
        .map_err(|e| HudError::Sdl(e.to_string()))?;

    let mut canvas_builder = window.into_canvas().target_texture();
    if config.vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let mut canvas = canvas_builder
        .build()
        .map_err(|e| HudError::Sdl(e.to_string()).during("failed to create renderer"))?;

    let texture_creator = canvas.texture_creator();

    // Screens draw into this at logical size; it is then fitted into the window
    let mut game_target = texture_creator
        .create_texture_target(None, logical.0, logical.1)
        .map_err(|e| HudError::Sdl(e.to_string()).during("failed to create game render target"))?;

    let mut event_pump = sdl_context.event_pump()?;

    let mut screens = ScreenManager::new();
    screens.push(
        SpaceMapScreen::new(&texture_creator, &config.asset_root, logical, config.font_scale)
            .with_bounds(config.debug_overlay),
    );

    info!("{} started ({}x{})", config.window_title, logical.0, logical.1);

    let mut viewport = FitRect::FULL;
    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(width, height) | WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    let physical = (width.max(0) as u32, height.max(0) as u32);
                    if let Some(rect) = handle_resize(canvas.window_mut(), logical, physical) {
                        viewport = rect;
                    }
                }
                mut event => {
                    // Screens see pointer positions in logical pixels
                    if let Event::MouseMotion { x, y, .. } = &mut event {
                        match viewport.window_to_logical((*x, *y), canvas.window().size(), logical) {
                            Some((logical_x, logical_y)) => {
                                *x = logical_x;
                                *y = logical_y;
                            }
                            None => continue,
                        }
                    }

                    if !route_event(&mut screens, &event) {
                        break 'running;
                    }
                }
            }
        }

        let now = Instant::now();
        let delta = now - last_frame;
        last_frame = now;

        let Some(screen) = screens.top_mut() else {
            break 'running;
        };
        screen.update(delta);

        let mut frame = Ok(());
        canvas
            .with_texture_canvas(&mut game_target, |target| {
                if let Some(screen) = screens.top() {
                    frame = screen.draw(target);
                }
            })
            .map_err(|e| HudError::Sdl(e.to_string()))?;

        if let Err(e) = frame {
            let name = screens.top().map(|screen| screen.name()).unwrap_or("?");
            error!("[{}] Failed to draw frame: {}", name, e);
        }

        canvas.set_draw_color(BAR_COLOR);
        canvas.clear();
        let (output_width, output_height) = canvas.output_size()?;
        canvas.copy(&game_target, None, Some(viewport.to_pixels(output_width, output_height)))?;
        canvas.present();

        if !config.vsync {
            std::thread::sleep(FRAME_TIME.saturating_sub(last_frame.elapsed()));
        }
    }

    info!("Shutting down");
    screens.clear();
    Ok(())
}
