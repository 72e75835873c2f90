//! Limits of the programmable shader stages.
//!
//! Limits are exposed through [ShaderLimits], obtained from
//! [Context::shader_limits](crate::runtime::Context::shader_limits). Every value is queried from
//! the driver the first time it is requested on a context and cached in the context afterwards.
//! Limits that depend on an extension or on a shader stage that the context does not support are
//! reported as `0`; in that case the driver is not queried at all.

use std::cell::Cell;

use crate::extensions::Extension;
use crate::gl;
use crate::runtime::{Context, Driver};
use crate::shader::ShaderType;
use crate::version::Version;

type Slot = Cell<Option<i32>>;

type StageSlots = [Slot; ShaderType::COUNT];

/// Per-context cache of shader limits.
#[derive(Default)]
pub(crate) struct ShaderState {
    max_vertex_output_components: Slot,
    max_tessellation_control_input_components: Slot,
    max_tessellation_control_output_components: Slot,
    max_tessellation_control_total_output_components: Slot,
    max_tessellation_evaluation_input_components: Slot,
    max_tessellation_evaluation_output_components: Slot,
    max_geometry_input_components: Slot,
    max_geometry_output_components: Slot,
    max_geometry_total_output_components: Slot,
    max_fragment_input_components: Slot,
    max_atomic_counter_buffers: StageSlots,
    max_combined_atomic_counter_buffers: Slot,
    max_atomic_counters: StageSlots,
    max_combined_atomic_counters: Slot,
    max_image_uniforms: StageSlots,
    max_combined_image_uniforms: Slot,
    max_shader_storage_blocks: StageSlots,
    max_combined_shader_storage_blocks: Slot,
    max_texture_image_units: StageSlots,
    max_combined_texture_image_units: Slot,
    max_uniform_blocks: StageSlots,
    max_combined_uniform_blocks: Slot,
    max_uniform_components: StageSlots,
    max_combined_uniform_components: StageSlots,
}

// Per-stage query tables, indexed by `ShaderType::index`.

const ATOMIC_COUNTER_BUFFERS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_ATOMIC_COUNTER_BUFFERS,
    gl::MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS,
    gl::MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS,
    gl::MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS,
    gl::MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS,
    gl::MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS,
];

const ATOMIC_COUNTERS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_ATOMIC_COUNTERS,
    gl::MAX_FRAGMENT_ATOMIC_COUNTERS,
    gl::MAX_GEOMETRY_ATOMIC_COUNTERS,
    gl::MAX_TESS_CONTROL_ATOMIC_COUNTERS,
    gl::MAX_TESS_EVALUATION_ATOMIC_COUNTERS,
    gl::MAX_COMPUTE_ATOMIC_COUNTERS,
];

const IMAGE_UNIFORMS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_IMAGE_UNIFORMS,
    gl::MAX_FRAGMENT_IMAGE_UNIFORMS,
    gl::MAX_GEOMETRY_IMAGE_UNIFORMS,
    gl::MAX_TESS_CONTROL_IMAGE_UNIFORMS,
    gl::MAX_TESS_EVALUATION_IMAGE_UNIFORMS,
    gl::MAX_COMPUTE_IMAGE_UNIFORMS,
];

const SHADER_STORAGE_BLOCKS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_SHADER_STORAGE_BLOCKS,
    gl::MAX_FRAGMENT_SHADER_STORAGE_BLOCKS,
    gl::MAX_GEOMETRY_SHADER_STORAGE_BLOCKS,
    gl::MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS,
    gl::MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS,
    gl::MAX_COMPUTE_SHADER_STORAGE_BLOCKS,
];

const TEXTURE_IMAGE_UNITS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS,
    gl::MAX_TEXTURE_IMAGE_UNITS,
    gl::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS,
    gl::MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS,
    gl::MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS,
    gl::MAX_COMPUTE_TEXTURE_IMAGE_UNITS,
];

const UNIFORM_BLOCKS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_UNIFORM_BLOCKS,
    gl::MAX_FRAGMENT_UNIFORM_BLOCKS,
    gl::MAX_GEOMETRY_UNIFORM_BLOCKS,
    gl::MAX_TESS_CONTROL_UNIFORM_BLOCKS,
    gl::MAX_TESS_EVALUATION_UNIFORM_BLOCKS,
    gl::MAX_COMPUTE_UNIFORM_BLOCKS,
];

const UNIFORM_COMPONENTS: [u32; ShaderType::COUNT] = [
    gl::MAX_VERTEX_UNIFORM_COMPONENTS,
    gl::MAX_FRAGMENT_UNIFORM_COMPONENTS,
    gl::MAX_GEOMETRY_UNIFORM_COMPONENTS,
    gl::MAX_TESS_CONTROL_UNIFORM_COMPONENTS,
    gl::MAX_TESS_EVALUATION_UNIFORM_COMPONENTS,
    gl::MAX_COMPUTE_UNIFORM_COMPONENTS,
];

const COMBINED_UNIFORM_COMPONENTS: [u32; ShaderType::COUNT] = [
    gl::MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS,
    gl::MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS,
    gl::MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS,
    gl::MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS,
    gl::MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS,
    gl::MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS,
];

/// View on the shader limits of a [Context].
///
/// # Example
///
/// ```rust
/// # use shader_glitz::runtime::{Context, Driver};
/// # fn wrapper<D>(context: &Context<D>) where D: Driver {
/// use shader_glitz::shader::ShaderType;
///
/// let limits = context.shader_limits();
///
/// // Only the first call queries the driver.
/// let units = limits.max_texture_image_units(ShaderType::Fragment);
/// assert_eq!(limits.max_texture_image_units(ShaderType::Fragment), units);
/// # }
/// ```
pub struct ShaderLimits<'a, D>
where
    D: Driver,
{
    context: &'a Context<D>,
}

impl<'a, D> ShaderLimits<'a, D>
where
    D: Driver,
{
    pub(crate) fn new(context: &'a Context<D>) -> Self {
        ShaderLimits { context }
    }

    fn state(&self) -> &'a ShaderState {
        self.context.shader_state()
    }

    fn query(&self, pname: u32) -> i32 {
        let value = self.context.driver().get_integer(pname);

        log::trace!(
            "Context {}: queried {:#06X} = {}",
            self.context.id(),
            pname,
            value
        );

        value
    }

    fn cached<F>(&self, slot: &Slot, query: F) -> i32
    where
        F: FnOnce() -> i32,
    {
        if let Some(value) = slot.get() {
            return value;
        }

        let value = query();

        slot.set(Some(value));

        value
    }

    fn stage(
        &self,
        slots: &StageSlots,
        pnames: &[u32; ShaderType::COUNT],
        shader_type: ShaderType,
    ) -> i32 {
        let index = shader_type.index();

        self.cached(&slots[index], || self.query(pnames[index]))
    }

    fn has(&self, extension: Extension) -> bool {
        self.context.is_extension_supported(extension)
    }

    fn is_es2(&self) -> bool {
        self.context.version() == Version::GLES200
    }

    // Desktop contexts need the extension, ES 3.0 contexts always have uniform blocks and ES 2.0
    // contexts never do.
    fn has_uniform_blocks(&self) -> bool {
        let version = self.context.version();

        if version.is_es() {
            version == Version::GLES300
        } else {
            self.has(Extension::ArbUniformBufferObject)
        }
    }

    /// Maximum number of components of the output variables of the vertex stage.
    ///
    /// On desktop contexts older than OpenGL 3.2 this is the maximum number of varying
    /// components. On OpenGL ES 2.0 contexts this is the maximum number of varying vectors times 4.
    pub fn max_vertex_output_components(&self) -> i32 {
        self.cached(&self.state().max_vertex_output_components, || {
            self.varying_components(gl::MAX_VERTEX_OUTPUT_COMPONENTS)
        })
    }

    /// Maximum number of components of the input variables of the fragment stage.
    ///
    /// Falls back in the same way as [max_vertex_output_components](Self::max_vertex_output_components).
    pub fn max_fragment_input_components(&self) -> i32 {
        self.cached(&self.state().max_fragment_input_components, || {
            self.varying_components(gl::MAX_FRAGMENT_INPUT_COMPONENTS)
        })
    }

    fn varying_components(&self, pname: u32) -> i32 {
        let version = self.context.version();

        if version == Version::GLES200 {
            self.query(gl::MAX_VARYING_VECTORS) * 4
        } else if version.is_es() || version.supports(Version::GL320) {
            self.query(pname)
        } else {
            self.query(gl::MAX_VARYING_COMPONENTS)
        }
    }

    /// Returns `0` if `GL_ARB_tessellation_shader` is not available.
    pub fn max_tessellation_control_input_components(&self) -> i32 {
        self.gated(
            Extension::ArbTessellationShader,
            &self.state().max_tessellation_control_input_components,
            gl::MAX_TESS_CONTROL_INPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_tessellation_shader` is not available.
    pub fn max_tessellation_control_output_components(&self) -> i32 {
        self.gated(
            Extension::ArbTessellationShader,
            &self.state().max_tessellation_control_output_components,
            gl::MAX_TESS_CONTROL_OUTPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_tessellation_shader` is not available.
    pub fn max_tessellation_control_total_output_components(&self) -> i32 {
        self.gated(
            Extension::ArbTessellationShader,
            &self.state().max_tessellation_control_total_output_components,
            gl::MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_tessellation_shader` is not available.
    pub fn max_tessellation_evaluation_input_components(&self) -> i32 {
        self.gated(
            Extension::ArbTessellationShader,
            &self.state().max_tessellation_evaluation_input_components,
            gl::MAX_TESS_EVALUATION_INPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_tessellation_shader` is not available.
    pub fn max_tessellation_evaluation_output_components(&self) -> i32 {
        self.gated(
            Extension::ArbTessellationShader,
            &self.state().max_tessellation_evaluation_output_components,
            gl::MAX_TESS_EVALUATION_OUTPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_geometry_shader4` is not available.
    pub fn max_geometry_input_components(&self) -> i32 {
        self.gated(
            Extension::ArbGeometryShader4,
            &self.state().max_geometry_input_components,
            gl::MAX_GEOMETRY_INPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_geometry_shader4` is not available.
    pub fn max_geometry_output_components(&self) -> i32 {
        self.gated(
            Extension::ArbGeometryShader4,
            &self.state().max_geometry_output_components,
            gl::MAX_GEOMETRY_OUTPUT_COMPONENTS,
        )
    }

    /// Returns `0` if `GL_ARB_geometry_shader4` is not available.
    pub fn max_geometry_total_output_components(&self) -> i32 {
        self.gated(
            Extension::ArbGeometryShader4,
            &self.state().max_geometry_total_output_components,
            gl::MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS,
        )
    }

    fn gated(&self, extension: Extension, slot: &Slot, pname: u32) -> i32 {
        if !self.has(extension) {
            return 0;
        }

        self.cached(slot, || self.query(pname))
    }

    fn gated_stage(
        &self,
        available: bool,
        slots: &StageSlots,
        pnames: &[u32; ShaderType::COUNT],
        shader_type: ShaderType,
    ) -> i32 {
        if !available || !self.context.is_shader_type_supported(shader_type) {
            return 0;
        }

        self.stage(slots, pnames, shader_type)
    }

    /// Maximum number of atomic counter buffers accessible from the `shader_type` stage.
    ///
    /// Returns `0` if `GL_ARB_shader_atomic_counters` is not available or the stage is not
    /// supported.
    pub fn max_atomic_counter_buffers(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has(Extension::ArbShaderAtomicCounters),
            &self.state().max_atomic_counter_buffers,
            &ATOMIC_COUNTER_BUFFERS,
            shader_type,
        )
    }

    /// Returns `0` if `GL_ARB_shader_atomic_counters` is not available.
    pub fn max_combined_atomic_counter_buffers(&self) -> i32 {
        self.gated(
            Extension::ArbShaderAtomicCounters,
            &self.state().max_combined_atomic_counter_buffers,
            gl::MAX_COMBINED_ATOMIC_COUNTER_BUFFERS,
        )
    }

    /// Maximum number of atomic counters in the `shader_type` stage.
    ///
    /// Returns `0` if `GL_ARB_shader_atomic_counters` is not available or the stage is not
    /// supported.
    pub fn max_atomic_counters(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has(Extension::ArbShaderAtomicCounters),
            &self.state().max_atomic_counters,
            &ATOMIC_COUNTERS,
            shader_type,
        )
    }

    /// Returns `0` if `GL_ARB_shader_atomic_counters` is not available.
    pub fn max_combined_atomic_counters(&self) -> i32 {
        self.gated(
            Extension::ArbShaderAtomicCounters,
            &self.state().max_combined_atomic_counters,
            gl::MAX_COMBINED_ATOMIC_COUNTERS,
        )
    }

    /// Maximum number of image uniforms in the `shader_type` stage.
    ///
    /// Returns `0` if `GL_ARB_shader_image_load_store` is not available or the stage is not
    /// supported.
    pub fn max_image_uniforms(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has(Extension::ArbShaderImageLoadStore),
            &self.state().max_image_uniforms,
            &IMAGE_UNIFORMS,
            shader_type,
        )
    }

    /// Returns `0` if `GL_ARB_shader_image_load_store` is not available.
    pub fn max_combined_image_uniforms(&self) -> i32 {
        self.gated(
            Extension::ArbShaderImageLoadStore,
            &self.state().max_combined_image_uniforms,
            gl::MAX_COMBINED_IMAGE_UNIFORMS,
        )
    }

    /// Maximum number of shader storage blocks in the `shader_type` stage.
    ///
    /// Returns `0` if `GL_ARB_shader_storage_buffer_object` is not available or the stage is not
    /// supported.
    pub fn max_shader_storage_blocks(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has(Extension::ArbShaderStorageBufferObject),
            &self.state().max_shader_storage_blocks,
            &SHADER_STORAGE_BLOCKS,
            shader_type,
        )
    }

    /// Returns `0` if `GL_ARB_shader_storage_buffer_object` is not available.
    pub fn max_combined_shader_storage_blocks(&self) -> i32 {
        self.gated(
            Extension::ArbShaderStorageBufferObject,
            &self.state().max_combined_shader_storage_blocks,
            gl::MAX_COMBINED_SHADER_STORAGE_BLOCKS,
        )
    }

    /// Maximum number of texture image units accessible from the `shader_type` stage.
    ///
    /// Returns `0` if the stage is not supported.
    pub fn max_texture_image_units(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            true,
            &self.state().max_texture_image_units,
            &TEXTURE_IMAGE_UNITS,
            shader_type,
        )
    }

    pub fn max_combined_texture_image_units(&self) -> i32 {
        self.cached(&self.state().max_combined_texture_image_units, || {
            self.query(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS)
        })
    }

    /// Maximum number of uniform blocks in the `shader_type` stage.
    ///
    /// Returns `0` on OpenGL ES 2.0, on desktop contexts without `GL_ARB_uniform_buffer_object`
    /// and for unsupported stages.
    pub fn max_uniform_blocks(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has_uniform_blocks(),
            &self.state().max_uniform_blocks,
            &UNIFORM_BLOCKS,
            shader_type,
        )
    }

    /// Returns `0` on OpenGL ES 2.0 and on desktop contexts without
    /// `GL_ARB_uniform_buffer_object`.
    pub fn max_combined_uniform_blocks(&self) -> i32 {
        if !self.has_uniform_blocks() {
            return 0;
        }

        self.cached(&self.state().max_combined_uniform_blocks, || {
            self.query(gl::MAX_COMBINED_UNIFORM_BLOCKS)
        })
    }

    /// Maximum number of uniform components in the default uniform block of the `shader_type`
    /// stage.
    ///
    /// On OpenGL ES 2.0 this is the maximum number of uniform vectors times 4. Returns `0` if the
    /// stage is not supported.
    pub fn max_uniform_components(&self, shader_type: ShaderType) -> i32 {
        if !self.context.is_shader_type_supported(shader_type) {
            return 0;
        }

        if self.is_es2() {
            let pname = match shader_type {
                ShaderType::Vertex => gl::MAX_VERTEX_UNIFORM_VECTORS,
                ShaderType::Fragment => gl::MAX_FRAGMENT_UNIFORM_VECTORS,
                _ => return 0,
            };

            return self.cached(
                &self.state().max_uniform_components[shader_type.index()],
                || self.query(pname) * 4,
            );
        }

        self.stage(
            &self.state().max_uniform_components,
            &UNIFORM_COMPONENTS,
            shader_type,
        )
    }

    /// Maximum number of uniform components of the `shader_type` stage, summed over the default
    /// uniform block and all uniform blocks.
    ///
    /// Returns `0` where [max_uniform_blocks](Self::max_uniform_blocks) would.
    pub fn max_combined_uniform_components(&self, shader_type: ShaderType) -> i32 {
        self.gated_stage(
            self.has_uniform_blocks(),
            &self.state().max_combined_uniform_components,
            &COMBINED_UNIFORM_COMPONENTS,
            shader_type,
        )
    }
}
