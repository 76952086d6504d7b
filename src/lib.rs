pub mod backend;
mod gl;
pub mod loader;

pub use backend::{ShaderBackend, ShaderStage};
pub use loader::{link_program_from_source, load_program, LoadError};
