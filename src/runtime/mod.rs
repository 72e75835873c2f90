//! Provides the [Context] that acts as the main point of interaction with the graphics driver.
//!
//! A [Context] wraps a [Driver] implementation. On `wasm32` targets a [Driver] implementation is
//! provided for WebGL 2.0 rendering contexts, see the [web_gl] module.

mod context;
pub use self::context::{Context, CreateContextError};

mod context_options;
pub use self::context_options::{ContextOptions, ContextOptionsBuilder, DISABLE_EXTENSIONS_VAR};

mod driver;
pub use self::driver::Driver;

#[cfg(target_arch = "wasm32")]
pub mod web_gl;

#[cfg(test)]
pub(crate) mod test_driver;

#[cfg(test)]
pub(crate) mod test_logger;
