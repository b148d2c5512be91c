//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-game interface types (events and errors).
//
// Defines the contract between the winit handler and the frame driver.
// Both run on the game thread; the channel between them only decouples
// the handler callbacks from the frame loop.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform handler to the frame driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Input events gathered during one pump, in arrival order.
    Inputs(Vec<InputEvent>),

    /// The drawable area changed size (physical pixels).
    Resized { width: u32, height: u32 },

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal startup and runtime errors of the platform layer.
///
/// None of these are recoverable: the game cannot run without an event
/// loop, a window and a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// The window could not be created.
    WindowCreation(String),

    /// Renderer initialization or presentation failed.
    Renderer(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Renderer(e) => write!(f, "Renderer error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::WindowCreation("no display".into());
        assert_eq!(err.to_string(), "Window creation failed: no display");

        let err = PlatformError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "Renderer error: no adapter");
    }

    #[test]
    fn platform_event_is_debug() {
        let debug_str = format!("{:?}", PlatformEvent::WindowClosed);
        assert!(debug_str.contains("WindowClosed"));
    }
}
