pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod renderer;
pub mod sizing;
pub mod swirl;
pub mod threaded;

pub use config::*;
pub use error::*;
pub use host::*;
pub use renderer::*;
pub use sizing::*;
pub use swirl::*;
pub use threaded::*;
