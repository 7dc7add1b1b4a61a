pub mod app;
pub mod map_view;

pub use app::App;
pub use map_view::{MapView, MapViewProps};
