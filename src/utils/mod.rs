pub mod constants;
pub mod debounce;
