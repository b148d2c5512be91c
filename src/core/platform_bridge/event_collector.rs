//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events into one frame's worth of `InputEvent`s.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → &[InputEvent]
//
// A window close, or a platform side that has gone away, becomes
// `InputEvent::Quit`, so the game sees quitting the same way it sees keys.
// Draining is bounded to prevent a flooded queue from stalling a frame;
// anything left over is picked up next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== EventCollector ======================================================

/// Collects platform events with bounded polling.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
    resize: Option<(u32, u32)>,
    disconnected: bool,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
            resize: None,
            disconnected: false,
        }
    }

    /// Collects pending platform events and returns this frame's input.
    pub fn collect_frame(&mut self) -> &[InputEvent] {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        warn!(target: "platform", "Platform channel disconnected");
                        self.disconnected = true;
                    }
                    self.events.push(InputEvent::Quit);
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "platform", "Event queue backlog: drained {} events this frame", drained);
        }

        &self.events
    }

    /// Takes the most recent resize seen since the last call.
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.resize.take()
    }

    fn handle_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::Inputs(batch) => self.events.extend(batch),
            PlatformEvent::Resized { width, height } => self.resize = Some((width, height)),
            PlatformEvent::WindowClosed => self.events.push(InputEvent::Quit),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
