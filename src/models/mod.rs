pub mod load_phase;
pub mod style;
pub mod viewport;

pub use load_phase::{LoadEvent, LoadPhase};
pub use style::{symbol_layer_ids, StyleDocument, StyleLayer, SYMBOL_LAYER_TYPE};
pub use viewport::{Rect, Viewport};
