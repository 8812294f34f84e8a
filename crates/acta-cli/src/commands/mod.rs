pub mod classify;
pub mod interact;
pub mod render;
pub mod utils;
pub mod validate;
