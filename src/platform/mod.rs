//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the frame driver.
//
// Architecture:
// ```text
//  Game Thread (one thread, one frame at a time):
//  ┌──────────────────────────────┐
//  │  Engine frame loop           │
//  │   ↓ pump(ZERO timeout)       │
//  │  Winit handler (Platform)    │
//  │   ├─ KeyboardInput → map     │
//  │   ├─ Resized / CloseRequested│
//  │   ↓ flush                    │
//  │  Channel ──► EventCollector  │
//  │   ↓                          │
//  │  GameState::frame            │
//  │   ↓                          │
//  │  GpuRenderer::present        │
//  └──────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pumped event loop**: the driver owns the loop and asks winit for
//   pending events once per frame instead of living inside callbacks
// - **Lazy window**: winit only allows window creation from an active
//   event loop, so the window is created in `resumed()` on the first pump
// - **Non-blocking send**: the channel is drained by the same thread, so
//   a full channel drops events with a warning instead of blocking
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
pub(crate) mod renderer;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};

pub(crate) use renderer::GpuRenderer;

//=== Platform ============================================================

/// Window owner and input event aggregator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, attributes)`
/// 2. **Startup**: `wait_for_window()` pumps until the window exists
/// 3. **Frames**: `pump()` once per frame, flushing input to the channel
/// 4. **Shutdown**: close button → `WindowClosed` → game quits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Attributes the window is created with.
    attributes: WindowAttributes,

    /// Window creation failure, reported by `wait_for_window()`.
    window_error: Option<String>,

    /// Key events gathered during the current pump.
    buffer: Vec<InputEvent>,

    /// Channel to the frame driver.
    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. The window is created lazily.
    pub fn new(event_sender: Sender<PlatformEvent>, attributes: WindowAttributes) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            attributes,
            window_error: None,
            buffer: Vec::with_capacity(16),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Pumps the event loop until the window exists.
    ///
    /// # Errors
    ///
    /// [`PlatformError::WindowCreation`] if winit refuses the window or the
    /// event loop never becomes active.
    pub fn wait_for_window(
        &mut self,
        event_loop: &mut EventLoop<()>,
    ) -> Result<Arc<Window>, PlatformError> {
        const MAX_STARTUP_PUMPS: usize = 100;
        const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

        for _ in 0..MAX_STARTUP_PUMPS {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), self);

            if let Some(error) = self.window_error.take() {
                return Err(PlatformError::WindowCreation(error));
            }
            if let Some(window) = &self.window {
                return Ok(Arc::clone(window));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(PlatformError::WindowCreation(format!(
                    "event loop exited during startup (code {})",
                    code
                )));
            }
        }

        Err(PlatformError::WindowCreation(
            "event loop did not resume within the startup window".to_string(),
        ))
    }

    /// Handles all pending OS events without blocking, then flushes input.
    pub fn pump(&mut self, event_loop: &mut EventLoop<()>) -> PumpStatus {
        let status = event_loop.pump_app_events(Some(Duration::ZERO), self);

        self.flush_input_buffer();

        if let PumpStatus::Exit(code) = status {
            info!(target: "platform", "Event loop exited (code {})", code);
            self.send(PlatformEvent::WindowClosed);
        }

        status
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered key events as one batch. Empty buffers are not sent.
    fn flush_input_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.buffer);
        trace!(target: "platform::input", "Flushing {} input events", batch.len());
        self.send(PlatformEvent::Inputs(batch));
    }

    fn send(&self, event: PlatformEvent) {
        match self.event_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform", "Event channel full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform", "Event channel disconnected, dropping {:?}", event);
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active; creates the window once.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.window_error = Some(e.to_string());
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.flush_input_buffer();
                self.send(PlatformEvent::WindowClosed);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = event_mapper::map_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                self.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            _ => {
                // Ignore: Focused, CursorMoved, RedrawRequested, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
