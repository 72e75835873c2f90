//! Shader compilation units.
//!
//! A [Shader] collects source strings for a single programmable stage and compiles them with the
//! driver. Shaders that are going to be linked together are best compiled together with
//! [Shader::compile_all]: all sources are uploaded and all compilations are issued before the
//! first compile status is queried, which allows drivers to compile in parallel.
//!
//! The limits of the programmable stages (e.g. the maximum number of uniform components) are
//! available through [Context::shader_limits], see the [limits] module.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::extensions::Extension;
use crate::gl;
use crate::runtime::{Context, Driver};
use crate::version::Version;

pub mod limits;

/// Enumerates the programmable shader stages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShaderType {
    Vertex,
    Fragment,
    Geometry,
    TessellationControl,
    TessellationEvaluation,
    Compute,
}

impl ShaderType {
    pub(crate) const COUNT: usize = 6;

    pub(crate) fn gl_enum(&self) -> u32 {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
            ShaderType::Geometry => gl::GEOMETRY_SHADER,
            ShaderType::TessellationControl => gl::TESS_CONTROL_SHADER,
            ShaderType::TessellationEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderType::Compute => gl::COMPUTE_SHADER,
        }
    }

    /// Human readable name of the stage, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
            ShaderType::Geometry => "geometry",
            ShaderType::TessellationControl => "tessellation control",
            ShaderType::TessellationEvaluation => "tessellation evaluation",
            ShaderType::Compute => "compute",
        }
    }

    /// Index of the stage in per-stage tables.
    pub(crate) fn index(&self) -> usize {
        match self {
            ShaderType::Vertex => 0,
            ShaderType::Fragment => 1,
            ShaderType::Geometry => 2,
            ShaderType::TessellationControl => 3,
            ShaderType::TessellationEvaluation => 4,
            ShaderType::Compute => 5,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum CreateShaderError {
    #[error("{0} shaders are not supported by the context")]
    UnsupportedType(ShaderType),
    #[error("the driver failed to create a {0} shader object")]
    ObjectCreationFailed(ShaderType),
}

/// Error returned by [Shader::compile] and [Shader::compile_all].
#[derive(Debug, Error)]
pub enum ShaderCompilationError {
    /// The shader with the given (1-based) number in the batch has no sources besides the version
    /// directive. Nothing was uploaded to the driver.
    #[error("shader {number} has no sources to compile")]
    NoSources { number: usize },
    /// One or more shaders in the batch failed to compile.
    #[error("{}", format_failures(.failures))]
    Failed {
        failures: Vec<CompileMessage>,
        warnings: Vec<CompileMessage>,
    },
}

/// Info log output for one shader in a compilation batch.
#[derive(Clone, PartialEq, Debug)]
pub struct CompileMessage {
    /// 1-based position of the shader in the batch.
    pub number: usize,
    pub shader_type: ShaderType,
    pub message: String,
}

/// The result of a successful compilation.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CompileReport {
    /// Info logs of shaders that compiled successfully but had something to say.
    pub warnings: Vec<CompileMessage>,
}

fn format_failures(failures: &[CompileMessage]) -> String {
    let described: Vec<String> = failures
        .iter()
        .map(|failure| {
            format!(
                "{} shader {}: {}",
                failure.shader_type,
                failure.number,
                failure.message.trim_end()
            )
        })
        .collect();

    format!("shader compilation failed ({})", described.join("; "))
}

/// A shader compilation unit for a single programmable stage.
///
/// The driver's shader object is created when the [Shader] is created and deleted when it is
/// dropped.
///
/// # Example
///
/// ```rust
/// # use shader_glitz::runtime::{Context, Driver};
/// # fn wrapper<D>(context: &Context<D>) where D: Driver {
/// use shader_glitz::shader::{Shader, ShaderType};
/// use shader_glitz::version::Version;
///
/// let mut shader = Shader::new(context, Version::GL330, ShaderType::Fragment).unwrap();
///
/// shader
///     .add_source("#define LIGHT_COUNT 4\n")
///     .add_source("out vec4 color;\nvoid main() { color = vec4(1.0); }\n");
///
/// shader.compile().unwrap();
/// # }
/// ```
pub struct Shader<D>
where
    D: Driver,
{
    context: Context<D>,
    shader_type: ShaderType,
    object: D::Shader,
    sources: Vec<String>,
    // Number of leading sources that were not added by the user.
    preamble_len: usize,
}

impl<D> Shader<D>
where
    D: Driver,
{
    /// Creates a new shader of the given `shader_type` for the `context`.
    ///
    /// If the `version` has a GLSL `#version` directive (see [Version::glsl_version_directive]),
    /// it becomes the first source of the shader. For [Version::None] no directive is added and
    /// the sources are responsible for declaring one.
    pub fn new(
        context: &Context<D>,
        version: Version,
        shader_type: ShaderType,
    ) -> Result<Self, CreateShaderError> {
        if !context.is_shader_type_supported(shader_type) {
            return Err(CreateShaderError::UnsupportedType(shader_type));
        }

        let object = context
            .driver()
            .create_shader(shader_type.gl_enum())
            .ok_or(CreateShaderError::ObjectCreationFailed(shader_type))?;

        let mut sources = Vec::new();

        if let Some(directive) = version.glsl_version_directive() {
            sources.push(directive.to_string());
        }

        let preamble_len = sources.len();

        Ok(Shader {
            context: context.clone(),
            shader_type,
            object,
            sources,
            preamble_len,
        })
    }

    pub fn shader_type(&self) -> ShaderType {
        self.shader_type
    }

    pub fn context(&self) -> &Context<D> {
        &self.context
    }

    /// The driver's shader object.
    pub fn object(&self) -> &D::Shader {
        &self.object
    }

    /// All sources of this shader in upload order, including the version directive and the
    /// `#line` directives.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Adds a source string.
    ///
    /// Empty sources are ignored. Each source is preceded by a `#line 1 N` directive, where `N`
    /// numbers the added sources from 1, so that the driver reports e.g. line 41 of the third
    /// source as `3(41)`.
    pub fn add_source<S>(&mut self, source: S) -> &mut Self
    where
        S: Into<String>,
    {
        let source = source.into();

        if !source.is_empty() {
            let number = (self.sources.len() + 1) / 2;

            self.sources.push(format!("#line 1 {}\n", number));
            self.sources.push(source);
        }

        self
    }

    /// Reads the file at `path` and adds its contents as a source.
    ///
    /// Returns an error and leaves the sources untouched if the file cannot be read.
    pub fn add_file<P>(&mut self, path: P) -> io::Result<&mut Self>
    where
        P: AsRef<Path>,
    {
        let source = fs::read_to_string(path.as_ref()).map_err(|err| {
            log::error!("Shader file `{}` cannot be read", path.as_ref().display());

            err
        })?;

        Ok(self.add_source(source))
    }

    /// The debug label of this shader.
    ///
    /// Always empty if `GL_KHR_debug` is not available.
    pub fn label(&self) -> String {
        if self.context.is_extension_supported(Extension::KhrDebug) {
            self.context
                .driver()
                .get_object_label(gl::SHADER, &self.object)
        } else {
            String::new()
        }
    }

    /// Sets the debug label of this shader.
    ///
    /// Does nothing if `GL_KHR_debug` is not available.
    pub fn set_label(&mut self, label: &str) -> &mut Self {
        if self.context.is_extension_supported(Extension::KhrDebug) {
            self.context
                .driver()
                .object_label(gl::SHADER, &self.object, label);
        }

        self
    }

    /// Compiles this shader.
    ///
    /// Equivalent to calling [Shader::compile_all] with just this shader.
    pub fn compile(&self) -> Result<CompileReport, ShaderCompilationError> {
        Shader::compile_all(&[self])
    }

    /// Compiles all `shaders` as one batch.
    ///
    /// Sources of all shaders are uploaded first, then compilation is issued for every shader and
    /// only after that the compile status and info log of each shader is inspected. Failures are
    /// logged as errors, non-empty info logs of successful compilations are logged as warnings.
    /// The batch succeeds only if every shader compiled successfully.
    ///
    /// Returns [ShaderCompilationError::NoSources] without touching the driver if any of the
    /// shaders has no sources.
    pub fn compile_all(shaders: &[&Shader<D>]) -> Result<CompileReport, ShaderCompilationError> {
        for (i, shader) in shaders.iter().enumerate() {
            if shader.sources.len() <= shader.preamble_len {
                log::error!("Shader::compile(): no files added");

                return Err(ShaderCompilationError::NoSources { number: i + 1 });
            }
        }

        for shader in shaders {
            let sources: Vec<&str> = shader.sources.iter().map(|s| s.as_str()).collect();

            shader
                .context
                .driver()
                .shader_source(&shader.object, &sources);
        }

        for shader in shaders {
            shader.context.driver().compile_shader(&shader.object);
        }

        let mut failures = Vec::new();
        let mut warnings = Vec::new();

        for (i, shader) in shaders.iter().enumerate() {
            let number = i + 1;
            let driver = shader.context.driver();
            let success = driver.compile_status(&shader.object);
            let message = trim_info_log(driver.shader_info_log(&shader.object));

            let suffix = if shaders.len() != 1 {
                format!(" {}", number)
            } else {
                String::new()
            };

            if !success {
                log::error!(
                    "Shader::compile(): compilation of {} shader{} failed with the following message:\n{}",
                    shader.shader_type,
                    suffix,
                    message
                );

                failures.push(CompileMessage {
                    number,
                    shader_type: shader.shader_type,
                    message,
                });
            } else if !message.is_empty() {
                log::warn!(
                    "Shader::compile(): compilation of {} shader{} succeeded with the following message:\n{}",
                    shader.shader_type,
                    suffix,
                    message
                );

                warnings.push(CompileMessage {
                    number,
                    shader_type: shader.shader_type,
                    message,
                });
            }
        }

        if failures.is_empty() {
            Ok(CompileReport { warnings })
        } else {
            Err(ShaderCompilationError::Failed { failures, warnings })
        }
    }
}

impl<D> Drop for Shader<D>
where
    D: Driver,
{
    fn drop(&mut self) {
        self.context.driver().delete_shader(&self.object);
    }
}

impl<D> fmt::Debug for Shader<D>
where
    D: Driver,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Shader")
            .field("context_id", &self.context.id())
            .field("shader_type", &self.shader_type)
            .field("sources", &self.sources)
            .finish()
    }
}

// Drivers report the log including its terminating NUL character.
fn trim_info_log(mut log: String) -> String {
    while log.ends_with('\0') {
        log.pop();
    }

    log
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    use log::Level;

    use crate::runtime::test_driver::{Call, TestDriver};
    use crate::runtime::test_logger::capture_logs;
    use crate::runtime::ContextOptions;

    fn context(driver: TestDriver) -> Context<TestDriver> {
        Context::new(driver, &ContextOptions::default()).unwrap()
    }

    #[test]
    fn test_new_adds_version_directive() {
        let context = context(TestDriver::new(Version::GL330));
        let shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        assert_eq!(shader.sources(), &["#version 330\n".to_string()]);
        assert_eq!(
            context.driver().calls(),
            vec![Call::CreateShader(gl::VERTEX_SHADER)]
        );
    }

    #[test]
    fn test_new_without_version() {
        let context = context(TestDriver::new(Version::GL330));
        let shader = Shader::new(&context, Version::None, ShaderType::Fragment).unwrap();

        assert!(shader.sources().is_empty());
    }

    #[test]
    fn test_new_unsupported_type() {
        let context = context(TestDriver::new(Version::GL330));

        assert!(matches!(
            Shader::new(&context, Version::GL330, ShaderType::Compute),
            Err(CreateShaderError::UnsupportedType(ShaderType::Compute))
        ));
        assert!(context.driver().calls().is_empty());
    }

    #[test]
    fn test_new_object_creation_failed() {
        let context = context(TestDriver::new(Version::GL330).fail_create());

        assert!(matches!(
            context.create_shader(Version::GL330, ShaderType::Vertex),
            Err(CreateShaderError::ObjectCreationFailed(ShaderType::Vertex))
        ));
    }

    #[test]
    fn test_add_source_line_directives() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        shader.add_source("a").add_source("").add_source("b");

        assert_eq!(
            shader.sources(),
            &[
                "#version 330\n".to_string(),
                "#line 1 1\n".to_string(),
                "a".to_string(),
                "#line 1 2\n".to_string(),
                "b".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_file() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let path = env::temp_dir().join(format!("shader-glitz-add-file-{}.glsl", context.id()));

        fs::write(&path, "void main() {}\n").unwrap();

        shader.add_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(shader.sources().len(), 3);
        assert_eq!(shader.sources()[2], "void main() {}\n");
    }

    #[test]
    fn test_add_file_missing() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        assert!(shader
            .add_file("/this/file/does/not/exist.glsl")
            .is_err());
        assert_eq!(shader.sources().len(), 1);
    }

    #[test]
    fn test_compile_single() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        shader.add_source("void main() {}\n");

        let report = shader.compile().unwrap();

        assert!(report.warnings.is_empty());

        let id = *shader.object();

        assert_eq!(context.driver().shader(id).compiled, Some(true));
        assert_eq!(
            context.driver().shader(id).sources,
            vec!["#version 330\n", "#line 1 1\n", "void main() {}\n"]
        );
    }

    #[test]
    fn test_compile_without_sources() {
        let context = context(TestDriver::new(Version::GL330));
        let mut a = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let b = Shader::new(&context, Version::GL330, ShaderType::Fragment).unwrap();

        a.add_source("void main() {}\n");

        assert!(matches!(
            Shader::compile_all(&[&a, &b]),
            Err(ShaderCompilationError::NoSources { number: 2 })
        ));

        let calls = context.driver().calls();

        assert!(!calls
            .iter()
            .any(|call| matches!(call, Call::ShaderSource(_) | Call::CompileShader(_))));
    }

    #[test]
    fn test_compile_all_issues_compilation_before_status_queries() {
        let context = context(TestDriver::new(Version::GL330));
        let mut a = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let mut b = Shader::new(&context, Version::GL330, ShaderType::Fragment).unwrap();

        a.add_source("void main() {}\n");
        b.add_source("void main() {}\n");

        Shader::compile_all(&[&a, &b]).unwrap();

        let a_id = *a.object();
        let b_id = *b.object();
        let calls: Vec<Call> = context
            .driver()
            .calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::CreateShader(_)))
            .collect();

        assert_eq!(
            calls,
            vec![
                Call::ShaderSource(a_id),
                Call::ShaderSource(b_id),
                Call::CompileShader(a_id),
                Call::CompileShader(b_id),
                Call::CompileStatus(a_id),
                Call::CompileStatus(b_id),
            ]
        );
    }

    #[test]
    fn test_compile_all_reports_failures_and_warnings() {
        let context = context(TestDriver::new(Version::GL330));
        let mut a = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let mut b = Shader::new(&context, Version::GL330, ShaderType::Fragment).unwrap();
        let mut c = Shader::new(&context, Version::GL330, ShaderType::Geometry).unwrap();

        a.add_source("#warning unused variable\nvoid main() {}\n");
        b.add_source("#error missing semicolon\n");
        c.add_source("void main() {}\n");

        match Shader::compile_all(&[&a, &b, &c]) {
            Err(ShaderCompilationError::Failed { failures, warnings }) => {
                assert_eq!(
                    failures,
                    vec![CompileMessage {
                        number: 2,
                        shader_type: ShaderType::Fragment,
                        message: "ERROR: missing semicolon\n".to_string(),
                    }]
                );
                assert_eq!(
                    warnings,
                    vec![CompileMessage {
                        number: 1,
                        shader_type: ShaderType::Vertex,
                        message: "WARNING: unused variable\n".to_string(),
                    }]
                );
            }
            _ => panic!("expected compilation to fail"),
        }
    }

    #[test]
    fn test_compile_all_logs_diagnostics() {
        let context = context(TestDriver::new(Version::GL330));
        let mut a = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let mut b = Shader::new(&context, Version::GL330, ShaderType::Fragment).unwrap();

        a.add_source("#warning w\nvoid main() {}\n");
        b.add_source("#error e\n");

        let records = capture_logs(|| {
            let _ = Shader::compile_all(&[&a, &b]);
        });

        assert_eq!(
            records,
            vec![
                (
                    Level::Warn,
                    "Shader::compile(): compilation of vertex shader 1 succeeded with the following message:\nWARNING: w\n".to_string()
                ),
                (
                    Level::Error,
                    "Shader::compile(): compilation of fragment shader 2 failed with the following message:\nERROR: e\n".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_compile_single_logs_without_number() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Fragment).unwrap();

        shader.add_source("#error e\n");

        let records = capture_logs(|| {
            let _ = shader.compile();
        });

        assert_eq!(
            records,
            vec![(
                Level::Error,
                "Shader::compile(): compilation of fragment shader failed with the following message:\nERROR: e\n".to_string()
            )]
        );
    }

    #[test]
    fn test_compile_without_sources_logs_error() {
        let context = context(TestDriver::new(Version::GL330));
        let shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        let records = capture_logs(|| {
            let _ = shader.compile();
        });

        assert_eq!(
            records,
            vec![(
                Level::Error,
                "Shader::compile(): no files added".to_string()
            )]
        );
    }

    #[test]
    fn test_compile_success_with_warnings() {
        let context = context(TestDriver::new(Version::GL330).nul_terminated_logs());
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        shader.add_source("#warning precision\nvoid main() {}\n");

        let report = shader.compile().unwrap();

        assert_eq!(
            report.warnings,
            vec![CompileMessage {
                number: 1,
                shader_type: ShaderType::Vertex,
                message: "WARNING: precision\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_compilation_error_display() {
        let error = ShaderCompilationError::Failed {
            failures: vec![CompileMessage {
                number: 1,
                shader_type: ShaderType::Fragment,
                message: "0(3) : error C0000: syntax error\n".to_string(),
            }],
            warnings: Vec::new(),
        };

        assert_eq!(
            error.to_string(),
            "shader compilation failed (fragment shader 1: 0(3) : error C0000: syntax error)"
        );
    }

    #[test]
    fn test_drop_deletes_object() {
        let context = context(TestDriver::new(Version::GL330));
        let shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();
        let id = *shader.object();

        assert!(!context.driver().shader(id).deleted);

        drop(shader);

        assert!(context.driver().shader(id).deleted);
    }

    #[test]
    fn test_label_requires_khr_debug() {
        let context = context(TestDriver::new(Version::GL330));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        shader.set_label("lighting");

        assert_eq!(shader.label(), "");
        assert_eq!(context.driver().shader(*shader.object()).label, "");
    }

    #[test]
    fn test_label() {
        let context = context(TestDriver::new(Version::GL330).advertise("GL_KHR_debug"));
        let mut shader = Shader::new(&context, Version::GL330, ShaderType::Vertex).unwrap();

        shader.set_label("lighting");

        assert_eq!(shader.label(), "lighting");
    }

    #[test]
    fn test_shader_type_names() {
        assert_eq!(ShaderType::TessellationControl.to_string(), "tessellation control");
        assert_eq!(ShaderType::Compute.name(), "compute");
        assert_eq!(ShaderType::Fragment.index(), 1);
    }
}
