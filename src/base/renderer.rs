use std::{num::NonZeroUsize, sync::Arc};
use vello::{
    kurbo::{Affine, Rect},
    peniko::{Color, Fill},
    util::{RenderContext, RenderSurface},
    wgpu::{Maintain, PresentMode},
    AaConfig, AaSupport, RenderParams, Renderer, RendererOptions, Scene,
};
use winit::{dpi::PhysicalSize, window::Window};

fn create_vello_renderer(context: &RenderContext, surface: &RenderSurface) -> Renderer {
    Renderer::new(
        &context.devices[surface.dev_id].device,
        RendererOptions {
            surface_format: Some(surface.format),
            use_cpu: false,
            antialiasing_support: AaSupport::all(),
            num_init_threads: NonZeroUsize::new(1),
        },
    )
    .expect("couldn't create renderer")
}

pub struct BaseAppRenderer {
    context: RenderContext,
    renderers: Vec<Option<Renderer>>,
    // reuse scene every frame, so that we don't spend resources
    // recreating it every frame
    scene: Scene,
}

impl BaseAppRenderer {
    pub fn new() -> Self {
        Self {
            context: RenderContext::new(),
            renderers: vec![],
            scene: Scene::new(),
        }
    }

    // our window is backed by an Arc, so we actually can use static lifetime for RenderSurface
    pub fn create_vello_surface(&mut self, window: &Arc<Window>) -> RenderSurface<'static> {
        let size = window.inner_size();

        // wgpu may crash if width or height is 0, don't allow that
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface_future =
            self.context
                .create_surface(window.clone(), width, height, PresentMode::AutoVsync);
        let surface = pollster::block_on(surface_future).expect("error creating surface");

        self.renderers
            .resize_with(self.context.devices.len(), || None);
        self.renderers[surface.dev_id]
            .get_or_insert_with(|| create_vello_renderer(&self.context, &surface));

        surface
    }

    pub fn resize_surface(&self, surface: &mut RenderSurface, size: &PhysicalSize<u32>) {
        // wgpu may crash if width or height is 0, don't allow that
        let width = size.width.max(1);
        let height = size.height.max(1);

        self.context.resize_surface(surface, width, height);
    }

    pub fn start_new_frame(&mut self) {
        self.scene.reset();
    }

    pub fn present_frame(&mut self, surface: &RenderSurface) {
        let Some(renderer) = self
            .renderers
            .get_mut(surface.dev_id)
            .and_then(Option::as_mut)
        else {
            tracing::warn!(dev_id = surface.dev_id, "no renderer for surface device");
            return;
        };

        let device_handle = &self.context.devices[surface.dev_id];
        let surface_texture = match surface.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                tracing::warn!(%err, "cannot get surface texture, skipping frame");
                return;
            }
        };

        renderer
            .render_to_surface(
                &device_handle.device,
                &device_handle.queue,
                &self.scene,
                &surface_texture,
                &RenderParams {
                    base_color: Color::BLACK,
                    width: surface.config.width,
                    height: surface.config.height,
                    antialiasing_method: AaConfig::Msaa16,
                },
            )
            .expect("failed to render to surface");

        surface_texture.present();

        device_handle.device.poll(Maintain::Poll);
    }
}

pub struct DrawFillRectangleOptions {
    pub rect: Rect,
    pub fill_color: Color,
}

pub struct AppRenderer<'a>(&'a mut BaseAppRenderer);

impl<'a> From<&'a mut BaseAppRenderer> for AppRenderer<'a> {
    fn from(value: &'a mut BaseAppRenderer) -> Self {
        AppRenderer(value)
    }
}

impl AppRenderer<'_> {
    pub fn draw_fill_rectangle(&mut self, options: DrawFillRectangleOptions) {
        self.0.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            options.fill_color,
            None,
            &options.rect,
        );
    }
}
