pub mod config;
pub mod constants;
pub mod curve;
pub mod debounce;
pub mod driver;
pub mod error;
pub mod motion;
pub mod sampler;
pub mod scale;
pub mod style;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use curve::*;
pub use debounce::*;
pub use driver::*;
pub use error::*;
pub use motion::*;
pub use sampler::*;
pub use scale::*;
pub use style::*;
pub use viewport::*;
