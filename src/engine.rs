//=========================================================================
// Pong Engine
//
// Frame driver: owns the window, the renderer and the game, and runs
// them one frame at a time on the calling thread.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Frame Loop]
//         │                          │
//         ├─ with_fps()              ├─ opens window + renderer
//         ├─ with_title()            ├─ pump → collect → frame → present
//         ├─ with_config()           └─ sleeps to the frame rate
//         └─ with_channel_capacity()
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod pacer;

pub use pacer::FramePacer;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowAttributes;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent};
use crate::core::render::Renderer;
use crate::core::{Config, GameState, Params};
use crate::platform::{GpuRenderer, Platform};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **FPS**: 60.0
/// - **Title**: "Pong"
/// - **Channel capacity**: 128 events
/// - **Config**: [`Config::default()`]
///
/// # Examples
///
/// ```no_run
/// use pong::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_fps(120.0)
///     .with_title("Pong (fast)")
///     .build()
///     .run()
///     .expect("pong failed");
/// ```
pub struct EngineBuilder {
    fps: f64,
    title: String,
    channel_capacity: usize,
    config: Config,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: Params::FPS,
            title: Params::TITLE.to_string(),
            channel_capacity: 128,
            config: Config::default(),
        }
    }

    /// Sets the frame rate cap.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the channel capacity for platform → driver events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the game tuning (arena, speeds, win score).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine (FPS: {}, channel: {})",
            self.fps,
            self.channel_capacity
        );

        Engine {
            fps: self.fps,
            title: self.title,
            channel_capacity: self.channel_capacity,
            config: self.config,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Pong runtime. Create via [`EngineBuilder`].
pub struct Engine {
    fps: f64,
    title: String,
    channel_capacity: usize,
    config: Config,
}

impl Engine {
    /// Opens the window and runs frames until the player closes it.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event loop and the platform → driver channel
    /// 2. Pumps until the window exists, then opens the GPU renderer
    /// 3. Per frame: pump OS events, collect input, run the game frame,
    ///    present, sleep to the frame rate
    /// 4. Returns once a quit event has been handled
    ///
    /// # Errors
    ///
    /// Any [`PlatformError`]; all of them end the game.
    pub fn run(self) -> Result<(), PlatformError> {
        info!(target: "engine", "Starting engine runtime (FPS: {})", self.fps);

        //--- 1. Event loop and channel ------------------------------------
        let mut event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let attributes = WindowAttributes::default()
            .with_title(self.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.config.arena.x as u32,
                self.config.arena.y as u32,
            ))
            .with_resizable(false);

        let mut platform = Platform::new(tx, attributes);
        let mut collector = EventCollector::new(rx);

        //--- 2. Window and renderer ---------------------------------------
        let window = platform.wait_for_window(&mut event_loop)?;
        let mut renderer = GpuRenderer::new(window, self.config.arena)
            .map_err(|e| PlatformError::Renderer(e.to_string()))?;

        //--- 3. Frame loop ------------------------------------------------
        let mut game = GameState::new(self.config);
        let mut pacer = FramePacer::new(self.fps);

        info!(target: "engine", "Entering frame loop");

        while !game.close_requested() {
            platform.pump(&mut event_loop);

            let events = collector.collect_frame();
            drive_frame(&mut game, events.iter().copied(), &mut renderer)
                .map_err(|e| PlatformError::Renderer(e.to_string()))?;

            if let Some((width, height)) = collector.take_resize() {
                renderer.resize(width, height);
            }

            pacer.tick();
        }

        //--- 4. Shutdown --------------------------------------------------
        debug!(target: "engine", "Ran {} simulation frames", game.frame_counter());
        info!(
            target: "engine",
            "Engine shutdown complete (final score {}:{})",
            game.score_left(),
            game.score_right()
        );
        Ok(())
    }
}

//=== Frame ===============================================================

/// Runs one game frame and presents it.
///
/// This is the whole per-frame contract between the driver and the game;
/// [`Engine::run`] only adds OS event pumping and pacing around it.
pub fn drive_frame<I, R>(game: &mut GameState, events: I, renderer: &mut R) -> Result<(), R::Error>
where
    I: IntoIterator<Item = InputEvent>,
    R: Renderer,
{
    game.frame(events, renderer);
    renderer.present()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::render::{DrawCommand, DrawList};

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.fps, 60.0);
        assert_eq!(builder.title, "Pong");
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, Config::default());
    }

    #[test]
    fn builder_with_fps() {
        let builder = EngineBuilder::new().with_fps(120.0);
        assert_eq!(builder.fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_zero() {
        EngineBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_negative() {
        EngineBuilder::new().with_fps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let config = Config {
            win_score: 3,
            ..Config::default()
        };
        let engine = EngineBuilder::new()
            .with_fps(30.0)
            .with_title("Practice")
            .with_channel_capacity(256)
            .with_config(config.clone())
            .build();

        assert_eq!(engine.fps, 30.0);
        assert_eq!(engine.title, "Practice");
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.config, config);
    }

    //=====================================================================
    // drive_frame Tests
    //=====================================================================

    #[test]
    fn drive_frame_presents_once() {
        let mut game = GameState::default();
        let mut list = DrawList::new();

        drive_frame(&mut game, std::iter::empty(), &mut list).unwrap();

        assert_eq!(list.presented(), 1);
        assert!(list.pending().is_empty());
        assert_eq!(list.last_frame()[0], DrawCommand::Clear(Params::BACKGROUND));
    }

    #[test]
    fn drive_frame_forwards_events() {
        let mut game = GameState::default();
        let mut list = DrawList::new();

        drive_frame(&mut game, [InputEvent::KeyDown(KeyCode::KeyA)], &mut list).unwrap();
        assert!(game.input().left_down);

        drive_frame(&mut game, [InputEvent::Quit], &mut list).unwrap();
        assert!(game.close_requested());
        assert_eq!(list.presented(), 2);
    }
}
