// Enum values from the OpenGL registry. Only the ones this crate passes to a driver are listed.

pub(crate) const UNSIGNED_BYTE: u32 = 0x1401;
pub(crate) const UNSIGNED_SHORT: u32 = 0x1403;
pub(crate) const UNSIGNED_INT: u32 = 0x1405;

pub(crate) const FRAGMENT_SHADER: u32 = 0x8B30;
pub(crate) const VERTEX_SHADER: u32 = 0x8B31;
pub(crate) const GEOMETRY_SHADER: u32 = 0x8DD9;
pub(crate) const TESS_EVALUATION_SHADER: u32 = 0x8E87;
pub(crate) const TESS_CONTROL_SHADER: u32 = 0x8E88;
pub(crate) const COMPUTE_SHADER: u32 = 0x91B9;

// KHR_debug object identifier, `GL_SHADER_KHR` on ES has the same value.
pub(crate) const SHADER: u32 = 0x82E1;

pub(crate) const MAX_VARYING_COMPONENTS: u32 = 0x8B4B;
pub(crate) const MAX_VARYING_VECTORS: u32 = 0x8DFC;
pub(crate) const MAX_VERTEX_OUTPUT_COMPONENTS: u32 = 0x9122;
pub(crate) const MAX_FRAGMENT_INPUT_COMPONENTS: u32 = 0x9125;

pub(crate) const MAX_TESS_CONTROL_INPUT_COMPONENTS: u32 = 0x886C;
pub(crate) const MAX_TESS_EVALUATION_INPUT_COMPONENTS: u32 = 0x886D;
pub(crate) const MAX_TESS_CONTROL_OUTPUT_COMPONENTS: u32 = 0x8E83;
pub(crate) const MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS: u32 = 0x8E85;
pub(crate) const MAX_TESS_EVALUATION_OUTPUT_COMPONENTS: u32 = 0x8E86;

pub(crate) const MAX_GEOMETRY_INPUT_COMPONENTS: u32 = 0x9123;
pub(crate) const MAX_GEOMETRY_OUTPUT_COMPONENTS: u32 = 0x9124;
pub(crate) const MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS: u32 = 0x8DE1;

pub(crate) const MAX_VERTEX_ATOMIC_COUNTER_BUFFERS: u32 = 0x92CC;
pub(crate) const MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS: u32 = 0x92CD;
pub(crate) const MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS: u32 = 0x92CE;
pub(crate) const MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS: u32 = 0x92CF;
pub(crate) const MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS: u32 = 0x92D0;
pub(crate) const MAX_COMBINED_ATOMIC_COUNTER_BUFFERS: u32 = 0x92D1;
pub(crate) const MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS: u32 = 0x8264;

pub(crate) const MAX_VERTEX_ATOMIC_COUNTERS: u32 = 0x92D2;
pub(crate) const MAX_TESS_CONTROL_ATOMIC_COUNTERS: u32 = 0x92D3;
pub(crate) const MAX_TESS_EVALUATION_ATOMIC_COUNTERS: u32 = 0x92D4;
pub(crate) const MAX_GEOMETRY_ATOMIC_COUNTERS: u32 = 0x92D5;
pub(crate) const MAX_FRAGMENT_ATOMIC_COUNTERS: u32 = 0x92D6;
pub(crate) const MAX_COMBINED_ATOMIC_COUNTERS: u32 = 0x92D7;
pub(crate) const MAX_COMPUTE_ATOMIC_COUNTERS: u32 = 0x8265;

pub(crate) const MAX_VERTEX_IMAGE_UNIFORMS: u32 = 0x90CA;
pub(crate) const MAX_TESS_CONTROL_IMAGE_UNIFORMS: u32 = 0x90CB;
pub(crate) const MAX_TESS_EVALUATION_IMAGE_UNIFORMS: u32 = 0x90CC;
pub(crate) const MAX_GEOMETRY_IMAGE_UNIFORMS: u32 = 0x90CD;
pub(crate) const MAX_FRAGMENT_IMAGE_UNIFORMS: u32 = 0x90CE;
pub(crate) const MAX_COMBINED_IMAGE_UNIFORMS: u32 = 0x90CF;
pub(crate) const MAX_COMPUTE_IMAGE_UNIFORMS: u32 = 0x91BD;

pub(crate) const MAX_VERTEX_SHADER_STORAGE_BLOCKS: u32 = 0x90D6;
pub(crate) const MAX_GEOMETRY_SHADER_STORAGE_BLOCKS: u32 = 0x90D7;
pub(crate) const MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS: u32 = 0x90D8;
pub(crate) const MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS: u32 = 0x90D9;
pub(crate) const MAX_FRAGMENT_SHADER_STORAGE_BLOCKS: u32 = 0x90DA;
pub(crate) const MAX_COMPUTE_SHADER_STORAGE_BLOCKS: u32 = 0x90DB;
pub(crate) const MAX_COMBINED_SHADER_STORAGE_BLOCKS: u32 = 0x90DC;

pub(crate) const MAX_TEXTURE_IMAGE_UNITS: u32 = 0x8872;
pub(crate) const MAX_VERTEX_TEXTURE_IMAGE_UNITS: u32 = 0x8B4C;
pub(crate) const MAX_COMBINED_TEXTURE_IMAGE_UNITS: u32 = 0x8B4D;
pub(crate) const MAX_GEOMETRY_TEXTURE_IMAGE_UNITS: u32 = 0x8C29;
pub(crate) const MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS: u32 = 0x8E81;
pub(crate) const MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS: u32 = 0x8E82;
pub(crate) const MAX_COMPUTE_TEXTURE_IMAGE_UNITS: u32 = 0x91BC;

pub(crate) const MAX_VERTEX_UNIFORM_BLOCKS: u32 = 0x8A2B;
pub(crate) const MAX_GEOMETRY_UNIFORM_BLOCKS: u32 = 0x8A2C;
pub(crate) const MAX_FRAGMENT_UNIFORM_BLOCKS: u32 = 0x8A2D;
pub(crate) const MAX_COMBINED_UNIFORM_BLOCKS: u32 = 0x8A2E;
pub(crate) const MAX_TESS_CONTROL_UNIFORM_BLOCKS: u32 = 0x8E89;
pub(crate) const MAX_TESS_EVALUATION_UNIFORM_BLOCKS: u32 = 0x8E8A;
pub(crate) const MAX_COMPUTE_UNIFORM_BLOCKS: u32 = 0x91BB;

pub(crate) const MAX_FRAGMENT_UNIFORM_COMPONENTS: u32 = 0x8B49;
pub(crate) const MAX_VERTEX_UNIFORM_COMPONENTS: u32 = 0x8B4A;
pub(crate) const MAX_GEOMETRY_UNIFORM_COMPONENTS: u32 = 0x8DDF;
pub(crate) const MAX_TESS_CONTROL_UNIFORM_COMPONENTS: u32 = 0x8E7F;
pub(crate) const MAX_TESS_EVALUATION_UNIFORM_COMPONENTS: u32 = 0x8E80;
pub(crate) const MAX_COMPUTE_UNIFORM_COMPONENTS: u32 = 0x8263;

pub(crate) const MAX_VERTEX_UNIFORM_VECTORS: u32 = 0x8DFB;
pub(crate) const MAX_FRAGMENT_UNIFORM_VECTORS: u32 = 0x8DFD;

pub(crate) const MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS: u32 = 0x8A31;
pub(crate) const MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS: u32 = 0x8A32;
pub(crate) const MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS: u32 = 0x8A33;
pub(crate) const MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS: u32 = 0x8E1E;
pub(crate) const MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS: u32 = 0x8E1F;
pub(crate) const MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS: u32 = 0x8266;
