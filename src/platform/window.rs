//! Native window driven by a pumped winit event loop
//!
//! winit normally owns the main loop. Here it is pumped once per frame
//! instead, so the game keeps its own fixed-step schedule.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::input::{self, InputSource};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::InputEvent;

/// Pumps allowed while waiting for the window to appear (~1s)
const OPEN_ATTEMPTS: u32 = 100;

struct WindowApp {
    title: String,
    window: Option<Arc<Window>>,
    create_error: Option<String>,
    events: Vec<InputEvent>,
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.create_error.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                log::info!("Window created: {}x{}", size.width, size.height);
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                self.create_error = Some(err.to_string());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(ev) = input::translate(event.physical_key, event.state) {
                    self.events.push(ev);
                }
            }
            _ => {}
        }
    }
}

/// The game window plus the event loop feeding it
pub struct GameWindow {
    event_loop: EventLoop<()>,
    app: WindowApp,
    window: Arc<Window>,
}

impl GameWindow {
    /// Start the windowing system and open a fixed-size window
    pub fn open(title: &str) -> Result<Self> {
        let mut event_loop =
            EventLoop::new().map_err(|err| anyhow!("Couldn't initialize windowing: {err}"))?;

        let mut app = WindowApp {
            title: title.to_string(),
            window: None,
            create_error: None,
            events: Vec::new(),
        };

        for _ in 0..OPEN_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut app);
            if app.window.is_some() || app.create_error.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                return Err(anyhow!("Event loop exited ({code}) before the window opened"));
            }
        }

        if let Some(err) = app.create_error.take() {
            return Err(anyhow!("Couldn't create window: {err}"));
        }
        let Some(window) = app.window.clone() else {
            return Err(anyhow!("Window did not open"));
        };

        Ok(Self {
            event_loop,
            app,
            window,
        })
    }

    /// Shared handle for surface creation
    pub fn handle(&self) -> Arc<Window> {
        self.window.clone()
    }
}

impl InputSource for GameWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app);
        if let PumpStatus::Exit(_) = status {
            self.app.events.push(InputEvent::Quit);
        }
        std::mem::take(&mut self.app.events)
    }
}
