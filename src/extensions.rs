//! Registry of the driver extensions the shader subsystem depends on.

use std::fmt;

use bitflags::bitflags;

use crate::version::Version;

/// Enumerates the extensions that gate shader stages and shader limits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Extension {
    ArbGeometryShader4,
    ArbTessellationShader,
    ArbComputeShader,
    ArbShaderAtomicCounters,
    ArbShaderImageLoadStore,
    ArbShaderStorageBufferObject,
    ArbUniformBufferObject,
    KhrDebug,
}

impl Extension {
    /// All known extensions.
    pub const ALL: [Extension; 8] = [
        Extension::ArbGeometryShader4,
        Extension::ArbTessellationShader,
        Extension::ArbComputeShader,
        Extension::ArbShaderAtomicCounters,
        Extension::ArbShaderImageLoadStore,
        Extension::ArbShaderStorageBufferObject,
        Extension::ArbUniformBufferObject,
        Extension::KhrDebug,
    ];

    /// The extension string as advertised by drivers.
    pub fn name(&self) -> &'static str {
        match self {
            Extension::ArbGeometryShader4 => "GL_ARB_geometry_shader4",
            Extension::ArbTessellationShader => "GL_ARB_tessellation_shader",
            Extension::ArbComputeShader => "GL_ARB_compute_shader",
            Extension::ArbShaderAtomicCounters => "GL_ARB_shader_atomic_counters",
            Extension::ArbShaderImageLoadStore => "GL_ARB_shader_image_load_store",
            Extension::ArbShaderStorageBufferObject => "GL_ARB_shader_storage_buffer_object",
            Extension::ArbUniformBufferObject => "GL_ARB_uniform_buffer_object",
            Extension::KhrDebug => "GL_KHR_debug",
        }
    }

    /// The desktop version in which the extension's functionality became core.
    pub fn core_version(&self) -> Version {
        match self {
            Extension::ArbGeometryShader4 => Version::GL320,
            Extension::ArbTessellationShader => Version::GL400,
            Extension::ArbComputeShader => Version::GL430,
            Extension::ArbShaderAtomicCounters => Version::GL420,
            Extension::ArbShaderImageLoadStore => Version::GL420,
            Extension::ArbShaderStorageBufferObject => Version::GL430,
            Extension::ArbUniformBufferObject => Version::GL310,
            Extension::KhrDebug => Version::GL430,
        }
    }

    /// Looks up an extension by its advertised name.
    ///
    /// Drivers sometimes advertise names without the `GL_` prefix (WebGL does), both forms are
    /// accepted.
    pub fn from_name(name: &str) -> Option<Extension> {
        let name = name.trim();

        Extension::ALL.iter().copied().find(|extension| {
            let full = extension.name();

            full == name || &full[3..] == name
        })
    }

    /// The flag representing this extension in an [ExtensionSet].
    pub fn flag(&self) -> ExtensionSet {
        match self {
            Extension::ArbGeometryShader4 => ExtensionSet::ARB_GEOMETRY_SHADER4,
            Extension::ArbTessellationShader => ExtensionSet::ARB_TESSELLATION_SHADER,
            Extension::ArbComputeShader => ExtensionSet::ARB_COMPUTE_SHADER,
            Extension::ArbShaderAtomicCounters => ExtensionSet::ARB_SHADER_ATOMIC_COUNTERS,
            Extension::ArbShaderImageLoadStore => ExtensionSet::ARB_SHADER_IMAGE_LOAD_STORE,
            Extension::ArbShaderStorageBufferObject => {
                ExtensionSet::ARB_SHADER_STORAGE_BUFFER_OBJECT
            }
            Extension::ArbUniformBufferObject => ExtensionSet::ARB_UNIFORM_BUFFER_OBJECT,
            Extension::KhrDebug => ExtensionSet::KHR_DEBUG,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of [Extension]s that is available on a [Context](crate::runtime::Context).
    ///
    /// Resolved once when the context is created, see [ExtensionSet::resolve].
    pub struct ExtensionSet: u16 {
        const ARB_GEOMETRY_SHADER4 = 0b0000_0001;
        const ARB_TESSELLATION_SHADER = 0b0000_0010;
        const ARB_COMPUTE_SHADER = 0b0000_0100;
        const ARB_SHADER_ATOMIC_COUNTERS = 0b0000_1000;
        const ARB_SHADER_IMAGE_LOAD_STORE = 0b0001_0000;
        const ARB_SHADER_STORAGE_BUFFER_OBJECT = 0b0010_0000;
        const ARB_UNIFORM_BUFFER_OBJECT = 0b0100_0000;
        const KHR_DEBUG = 0b1000_0000;
    }
}

impl ExtensionSet {
    /// Resolves the available extensions for a context that exposes `version`, given the names the
    /// driver `advertised` and the names that were explicitly `disabled`.
    ///
    /// An extension is available if it was advertised or, on desktop versions, if `version` is at
    /// least the extension's [Extension::core_version]. Disabled extensions are never available.
    pub fn resolve<A, D>(version: Version, advertised: A, disabled: D) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let mut set = ExtensionSet::empty();

        for extension in Extension::ALL.iter() {
            if !version.is_es() && version.supports(extension.core_version()) {
                set |= extension.flag();
            }
        }

        for name in advertised {
            if let Some(extension) = Extension::from_name(name.as_ref()) {
                set |= extension.flag();
            }
        }

        for name in disabled {
            match Extension::from_name(name.as_ref()) {
                Some(extension) => set.remove(extension.flag()),
                None => log::warn!("Cannot disable unknown extension `{}`", name.as_ref()),
            }
        }

        set
    }

    /// Whether or not the `extension` is part of this set.
    pub fn supports(&self, extension: Extension) -> bool {
        self.contains(extension.flag())
    }

    /// Iterates over the extensions in this set.
    pub fn iter(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL
            .iter()
            .copied()
            .filter(move |extension| self.supports(*extension))
    }
}
