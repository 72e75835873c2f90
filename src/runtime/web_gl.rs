//! [Driver] implementation for WebGL 2.0 rendering contexts.
//!
//! WebGL 2.0 corresponds to OpenGL ES 3.0, contexts created for a [WebGl2RenderingContext] report
//! [Version::GLES300]. Only vertex and fragment shaders are available and debug labels are not
//! supported.
//!
//! ```rust,no_run
//! # fn wrapper(gl: web_sys::WebGl2RenderingContext) {
//! use shader_glitz::runtime::{Context, ContextOptions};
//!
//! let context = Context::new(gl, &ContextOptions::default()).unwrap();
//! # }
//! ```

use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext, WebGlShader};

use crate::runtime::Driver;
use crate::version::Version;

impl Driver for WebGl2RenderingContext {
    type Shader = WebGlShader;

    fn context_version(&self) -> Version {
        Version::GLES300
    }

    fn supported_extensions(&self) -> Vec<String> {
        self.get_supported_extensions()
            .map(|names| names.iter().filter_map(|name| name.as_string()).collect())
            .unwrap_or_default()
    }

    fn get_integer(&self, pname: u32) -> i32 {
        self.get_parameter(pname)
            .ok()
            .as_ref()
            .and_then(JsValue::as_f64)
            .map(|value| value as i32)
            .unwrap_or(0)
    }

    fn create_shader(&self, kind: u32) -> Option<WebGlShader> {
        WebGl2RenderingContext::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, sources: &[&str]) {
        // WebGL only accepts a single source string.
        WebGl2RenderingContext::shader_source(self, shader, &sources.concat());
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        WebGl2RenderingContext::compile_shader(self, shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        WebGl2RenderingContext::delete_shader(self, Some(shader));
    }
}
