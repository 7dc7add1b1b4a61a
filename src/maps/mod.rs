pub mod ffi;
pub mod gl;
pub mod traits;

pub use gl::GlSurface;
pub use traits::{MapError, PointerHit, RenderSurface, SurfaceHandlers};
