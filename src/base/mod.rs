mod base_app;
mod renderer;

pub use base_app::AppContext;
pub use base_app::AppEvent;
pub use base_app::AppHandler;
pub use base_app::WindowOptions;
pub use renderer::AppRenderer;
pub use renderer::DrawFillRectangleOptions;
