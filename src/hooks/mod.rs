pub mod use_container_rect;
pub mod use_debounce;
pub mod use_map_handle;

pub use use_container_rect::use_container_rect;
pub use use_debounce::{use_debounce, use_debounce_callback, UseDebounceHandle};
pub use use_map_handle::{use_map_view_handle, MapViewHandle};
