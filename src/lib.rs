//! Shader compilation units, shader capability limits and a couple of small value utilities on top
//! of an OpenGL-style graphics driver.
//!
//! All interaction with the driver goes through a [runtime::Context], which wraps a
//! [runtime::Driver] implementation together with the API version it exposes, the extensions that
//! are available and a per-context cache of the shader limits that have been queried so far:
//!
//! ```rust
//! # use shader_glitz::runtime::{Context, Driver};
//! # fn wrapper<D>(context: &Context<D>) where D: Driver {
//! use shader_glitz::shader::{Shader, ShaderType};
//! use shader_glitz::version::Version;
//!
//! let mut vertex = Shader::new(context, Version::GL330, ShaderType::Vertex).unwrap();
//! let mut fragment = Shader::new(context, Version::GL330, ShaderType::Fragment).unwrap();
//!
//! vertex.add_source("void main() { gl_Position = vec4(0.0); }");
//! fragment.add_source("out vec4 color; void main() { color = vec4(1.0); }");
//!
//! Shader::compile_all(&[&vertex, &fragment]).unwrap();
//!
//! let max_units = context
//!     .shader_limits()
//!     .max_texture_image_units(ShaderType::Fragment);
//! # }
//! ```

pub mod extensions;
pub mod math;
pub mod mesh_tools;
pub mod runtime;
pub mod shader;
pub mod version;

pub(crate) mod gl;
