//! OpenGL and OpenGL ES API versions.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Enumerates the API versions a [Context](crate::runtime::Context) may expose and a
/// [Shader](crate::shader::Shader) may target.
///
/// The desktop versions and the embedded (ES) versions form two separate families; a version from
/// one family never supports a version from the other family, see [Version::supports].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Version {
    /// No specific version.
    ///
    /// Shaders created for this version get no `#version` directive; the sources are expected to
    /// provide one themselves.
    None,
    GL210,
    GL300,
    GL310,
    GL320,
    GL330,
    GL400,
    GL410,
    GL420,
    GL430,
    GL440,
    GLES200,
    GLES300,
}

impl Version {
    /// Whether or not this is an OpenGL ES version.
    pub fn is_es(&self) -> bool {
        match self {
            Version::GLES200 | Version::GLES300 => true,
            _ => false,
        }
    }

    /// Returns the `(major, minor)` version numbers, or `None` for [Version::None].
    pub fn major_minor(&self) -> Option<(u32, u32)> {
        let numbers = match self {
            Version::None => return None,
            Version::GL210 => (2, 1),
            Version::GL300 => (3, 0),
            Version::GL310 => (3, 1),
            Version::GL320 => (3, 2),
            Version::GL330 => (3, 3),
            Version::GL400 => (4, 0),
            Version::GL410 => (4, 1),
            Version::GL420 => (4, 2),
            Version::GL430 => (4, 3),
            Version::GL440 => (4, 4),
            Version::GLES200 => (2, 0),
            Version::GLES300 => (3, 0),
        };

        Some(numbers)
    }

    /// Returns the GLSL `#version` directive (including the trailing newline) that shaders
    /// targeting this version start with.
    ///
    /// Returns `None` for [Version::None].
    pub fn glsl_version_directive(&self) -> Option<&'static str> {
        match self {
            Version::None => None,
            Version::GL210 => Some("#version 120\n"),
            Version::GL300 => Some("#version 130\n"),
            Version::GL310 => Some("#version 140\n"),
            Version::GL320 => Some("#version 150\n"),
            Version::GL330 => Some("#version 330\n"),
            Version::GL400 => Some("#version 400\n"),
            Version::GL410 => Some("#version 410\n"),
            Version::GL420 => Some("#version 420\n"),
            Version::GL430 => Some("#version 430\n"),
            Version::GL440 => Some("#version 440\n"),
            Version::GLES200 => Some("#version 100\n"),
            Version::GLES300 => Some("#version 300 es\n"),
        }
    }

    /// Whether or not a context that exposes this version also provides the functionality of
    /// `other`.
    ///
    /// This is only ever true when both versions belong to the same family (desktop or ES) and
    /// this version is at least `other`. [Version::None] supports nothing and is supported by
    /// nothing.
    pub fn supports(&self, other: Version) -> bool {
        if self.is_es() != other.is_es() {
            return false;
        }

        match (self.major_minor(), other.major_minor()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::None
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.major_minor() {
            Some((major, minor)) if self.is_es() => write!(f, "OpenGL ES {}.{}", major, minor),
            Some((major, minor)) => write!(f, "OpenGL {}.{}", major, minor),
            None => f.write_str("None"),
        }
    }
}
