use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::extensions::{Extension, ExtensionSet};
use crate::runtime::{ContextOptions, Driver};
use crate::shader::limits::{ShaderLimits, ShaderState};
use crate::shader::{CreateShaderError, Shader, ShaderType};
use crate::version::Version;

thread_local!(static ID_GEN: IdGen = IdGen::new());

struct IdGen {
    next: Cell<usize>,
}

impl IdGen {
    const fn new() -> Self {
        IdGen { next: Cell::new(0) }
    }

    fn next(&self) -> usize {
        let next = self.next.get();

        self.next.set(next + 1);

        next
    }
}

#[derive(Debug, Error)]
pub enum CreateContextError {
    #[error("the driver did not report a usable API version")]
    UnknownVersion,
}

/// Handle to a graphics driver together with the state this crate tracks for it.
///
/// Cloning a [Context] is cheap; all clones refer to the same driver and share the same state.
/// Objects created for a context (such as [Shader]s) keep a clone of the context alive.
pub struct Context<D>
where
    D: Driver,
{
    inner: Rc<ContextInner<D>>,
}

struct ContextInner<D> {
    id: usize,
    driver: D,
    version: Version,
    extensions: ExtensionSet,
    shader_state: ShaderState,
}

impl<D> Context<D>
where
    D: Driver,
{
    /// Wraps the `driver` in a new context, resolving the API version and the available extensions
    /// with the given `options`.
    pub fn new(driver: D, options: &ContextOptions) -> Result<Self, CreateContextError> {
        let version = options
            .version_override()
            .unwrap_or_else(|| driver.context_version());

        if version == Version::None {
            return Err(CreateContextError::UnknownVersion);
        }

        let extensions = ExtensionSet::resolve(
            version,
            driver.supported_extensions(),
            options.disabled_extensions(),
        );

        let id = ID_GEN.with(|id_gen| id_gen.next());

        log::info!("Created context {} for {}", id, version);

        for extension in extensions.iter() {
            log::debug!("Context {}: using {}", id, extension);
        }

        Ok(Context {
            inner: Rc::new(ContextInner {
                id,
                driver,
                version,
                extensions,
                shader_state: ShaderState::default(),
            }),
        })
    }

    /// Identifier that is unique for each context created on the current thread.
    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn driver(&self) -> &D {
        &self.inner.driver
    }

    /// The API version this context exposes.
    pub fn version(&self) -> Version {
        self.inner.version
    }

    /// Whether or not the functionality of `version` is available on this context.
    ///
    /// See [Version::supports].
    pub fn is_version_supported(&self, version: Version) -> bool {
        self.inner.version.supports(version)
    }

    pub fn extensions(&self) -> ExtensionSet {
        self.inner.extensions
    }

    pub fn is_extension_supported(&self, extension: Extension) -> bool {
        self.inner.extensions.supports(extension)
    }

    /// Whether or not shaders of the given `shader_type` can be created on this context.
    ///
    /// Vertex and fragment shaders are always supported. Geometry shaders require
    /// `GL_ARB_geometry_shader4`, tessellation shaders require `GL_ARB_tessellation_shader` and
    /// compute shaders require `GL_ARB_compute_shader`.
    pub fn is_shader_type_supported(&self, shader_type: ShaderType) -> bool {
        match shader_type {
            ShaderType::Vertex | ShaderType::Fragment => true,
            ShaderType::Geometry => self.is_extension_supported(Extension::ArbGeometryShader4),
            ShaderType::TessellationControl | ShaderType::TessellationEvaluation => {
                self.is_extension_supported(Extension::ArbTessellationShader)
            }
            ShaderType::Compute => self.is_extension_supported(Extension::ArbComputeShader),
        }
    }

    /// Returns a view on the shader limits of this context.
    ///
    /// Limits are queried from the driver the first time they are requested and cached for the
    /// lifetime of the context.
    pub fn shader_limits(&self) -> ShaderLimits<D> {
        ShaderLimits::new(self)
    }

    pub(crate) fn shader_state(&self) -> &ShaderState {
        &self.inner.shader_state
    }

    /// Creates a new [Shader] of the given `shader_type` that targets the given `version`.
    ///
    /// See [Shader::new].
    pub fn create_shader(
        &self,
        version: Version,
        shader_type: ShaderType,
    ) -> Result<Shader<D>, CreateShaderError> {
        Shader::new(self, version, shader_type)
    }
}

impl<D> Clone for Context<D>
where
    D: Driver,
{
    fn clone(&self) -> Self {
        Context {
            inner: self.inner.clone(),
        }
    }
}
