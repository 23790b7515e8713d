pub mod logging;
pub mod quat;
pub mod vec3;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use quat::Quat;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use gazemark_base::log::*
pub use log;
