use anyhow::Result;
use std::sync::Arc;
use vello::util::RenderSurface;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use super::renderer::{AppRenderer, BaseAppRenderer};

pub trait AppHandler {
    /// Returns true if the event changed something worth redrawing.
    fn handle_events(&mut self, event: AppEvent) -> bool;
    fn render(&mut self, renderer: &mut AppRenderer, screen_size: PhysicalSize<u32>);
    fn title(&self) -> String;
}

#[derive(Debug)]
pub enum AppEvent {
    KeyPressed { event: KeyEvent, is_synthetic: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
}

struct ActiveAppState {
    // our window is backed by an Arc, so we actually can use static lifetime for RenderSurface
    surface: RenderSurface<'static>,
    window: Arc<Window>,
}

struct SuspendedAppState {
    cached_window: Option<Arc<Window>>,
}

enum AppState {
    Active(ActiveAppState),
    Suspended(SuspendedAppState),
}

struct BaseApp<T: AppHandler> {
    state: AppState,
    renderer: BaseAppRenderer,
    options: WindowOptions,
    handler: T,
}

fn create_winit_window(
    event_loop: &ActiveEventLoop,
    options: WindowOptions,
    title: String,
) -> Arc<Window> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(options.width, options.height))
        .with_resizable(false)
        .with_title(title);
    Arc::new(
        event_loop
            .create_window(attr)
            .expect("cannot create window"),
    )
}

impl<T: AppHandler> ApplicationHandler for BaseApp<T> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let AppState::Suspended(SuspendedAppState { cached_window }) = &mut self.state else {
            return;
        };

        let window = cached_window.take().unwrap_or_else(|| {
            create_winit_window(event_loop, self.options, self.handler.title())
        });

        let surface = self.renderer.create_vello_surface(&window);
        tracing::debug!(size = ?window.inner_size(), "window active");

        // nothing is on screen until the first frame, so ask for one
        window.request_redraw();
        self.state = AppState::Active(ActiveAppState { window, surface });
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let AppState::Active(ActiveAppState { window, .. }) = &self.state {
            tracing::debug!("window suspended");
            self.state = AppState::Suspended(SuspendedAppState {
                cached_window: Some(window.clone()),
            });
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // only handle event if it is our window, and we are in active state
        let active_state = match &mut self.state {
            AppState::Active(state) if state.window.id() == window_id => state,
            _ => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer
                    .resize_surface(&mut active_state.surface, &size);
            }
            WindowEvent::RedrawRequested => {
                let screen_size = active_state.window.inner_size();
                self.renderer.start_new_frame();
                self.handler
                    .render(&mut ((&mut self.renderer).into()), screen_size);
                self.renderer.present_frame(&active_state.surface);
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } if event.state == ElementState::Pressed => {
                let handled = self.handler.handle_events(AppEvent::KeyPressed {
                    event,
                    is_synthetic,
                });
                if handled {
                    active_state.window.set_title(&self.handler.title());
                    active_state.window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

pub struct AppContext {
    state: AppState,
    renderer: BaseAppRenderer,
    options: WindowOptions,
}

impl AppContext {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            state: AppState::Suspended(SuspendedAppState {
                cached_window: None,
            }),
            renderer: BaseAppRenderer::new(),
            options,
        }
    }

    pub fn run(self, handler: impl AppHandler) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut BaseApp {
            state: self.state,
            renderer: self.renderer,
            options: self.options,
            handler,
        })?;

        Ok(())
    }
}
