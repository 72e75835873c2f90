use crate::version::Version;

/// The seam between this crate and a native graphics driver.
///
/// Every driver entry point this crate uses is a method on this trait; the methods map one-to-one
/// onto the corresponding OpenGL functions (`glGetIntegerv`, `glCreateShader`,
/// `glShaderSource`, ...). Enum arguments are the raw OpenGL enum values.
pub trait Driver {
    /// Handle to a shader object owned by the driver.
    type Shader;

    /// The API version the driver exposes.
    fn context_version(&self) -> Version;

    /// The extension strings the driver advertises.
    fn supported_extensions(&self) -> Vec<String>;

    /// Queries an integer state value (`glGetIntegerv`).
    fn get_integer(&self, pname: u32) -> i32;

    /// Creates a new shader object of the given `kind` (`glCreateShader`), returns `None` if the
    /// driver failed to create one.
    fn create_shader(&self, kind: u32) -> Option<Self::Shader>;

    /// Replaces the source code of the `shader` with the concatenation of the `sources`
    /// (`glShaderSource`).
    fn shader_source(&self, shader: &Self::Shader, sources: &[&str]);

    /// Compiles the `shader` (`glCompileShader`).
    ///
    /// Drivers may compile asynchronously, the result is only guaranteed to be available once
    /// [Driver::compile_status] is queried.
    fn compile_shader(&self, shader: &Self::Shader);

    /// Whether or not the last compilation of the `shader` succeeded
    /// (`glGetShaderiv(GL_COMPILE_STATUS)`).
    fn compile_status(&self, shader: &Self::Shader) -> bool;

    /// The info log of the `shader` (`glGetShaderInfoLog`).
    ///
    /// The log may still carry the terminating NUL character, callers should not rely on either.
    fn shader_info_log(&self, shader: &Self::Shader) -> String;

    /// Deletes the `shader` object (`glDeleteShader`).
    fn delete_shader(&self, shader: &Self::Shader);

    /// Attaches a debug `label` to the `shader` (`glObjectLabel`).
    ///
    /// Only called when `GL_KHR_debug` is available. Does nothing by default.
    fn object_label(&self, identifier: u32, shader: &Self::Shader, label: &str) {
        let _ = (identifier, shader, label);
    }

    /// Retrieves the debug label attached to the `shader` (`glGetObjectLabel`).
    ///
    /// Only called when `GL_KHR_debug` is available. Returns an empty string by default.
    fn get_object_label(&self, identifier: u32, shader: &Self::Shader) -> String {
        let _ = (identifier, shader);

        String::new()
    }
}
