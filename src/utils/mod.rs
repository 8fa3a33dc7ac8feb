pub(crate) mod debug;
pub mod duration;

pub use debug::{debug_enabled, set_debug};
pub use duration::{hours, parse_duration};
