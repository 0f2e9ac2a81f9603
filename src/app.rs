use anyhow::Result;
use vello::{kurbo::Rect, peniko::Color};
use winit::dpi::PhysicalSize;

use crate::{
    base::{AppContext, AppEvent, AppHandler, AppRenderer, DrawFillRectangleOptions, WindowOptions},
    config::DemoConfig,
    controller::{Command, Controller},
    model::BoundedEntity,
};

pub struct App {
    entity: BoundedEntity,
    controller: Controller,
    title: String,
}

impl App {
    pub fn new(config: &DemoConfig) -> Result<Self> {
        Ok(Self {
            entity: BoundedEntity::new(&config.entity)?,
            controller: Controller::new(config.controller.move_step),
            title: config.window.title.clone(),
        })
    }

    pub fn run(config: DemoConfig) -> Result<()> {
        let app = Self::new(&config)?;
        tracing::info!(state = %app.entity, "starting");

        AppContext::new(WindowOptions {
            width: config.window.width,
            height: config.window.height,
        })
        .run(app)
    }

    fn apply(&mut self, command: Command) -> bool {
        let applied = self.controller.dispatch(&mut self.entity, command);
        if applied {
            tracing::debug!(?command, state = %self.entity, "command applied");
        } else {
            tracing::trace!(?command, state = %self.entity, "command refused");
        }
        applied
    }
}

impl AppHandler for App {
    fn handle_events(&mut self, event: AppEvent) -> bool {
        let AppEvent::KeyPressed {
            event,
            is_synthetic,
        } = event;

        // winit replays held keys as synthetic presses when focus returns
        if is_synthetic {
            return false;
        }

        match Command::from_key(&event.logical_key) {
            Some(command) => self.apply(command),
            None => false,
        }
    }

    fn render(&mut self, renderer: &mut AppRenderer, screen_size: PhysicalSize<u32>) {
        renderer.draw_fill_rectangle(DrawFillRectangleOptions {
            rect: Rect::new(
                0.0,
                0.0,
                screen_size.width as f64,
                screen_size.height as f64,
            ),
            fill_color: Color::rgb8(0, 128, 0),
        });

        let position = self.entity.position();
        let x = position.x() as f64;
        let y = position.y() as f64;
        let side = self.entity.size() as f64;
        renderer.draw_fill_rectangle(DrawFillRectangleOptions {
            rect: Rect::new(x, y, x + side, y + side),
            fill_color: Color::BLACK,
        });
    }

    // vello has no bundled font, so the status line goes in the title bar
    fn title(&self) -> String {
        format!("{} - {}", self.title, self.entity.describe())
    }
}
