mod exposure;
mod network;
mod platform;
mod probe;

pub use exposure::*;
pub use network::*;
pub use platform::*;
pub use probe::*;
