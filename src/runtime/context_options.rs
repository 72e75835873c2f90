use std::env;

use serde_derive::{Deserialize, Serialize};

use crate::version::Version;

/// Name of the environment variable read by [ContextOptions::from_env].
///
/// Holds a list of extension names separated by whitespace or commas.
pub const DISABLE_EXTENSIONS_VAR: &str = "GLITZ_DISABLE_EXTENSIONS";

/// Options that influence how a [Context](crate::runtime::Context) resolves its version and
/// extensions.
///
/// May be constructed with a builder:
///
/// ```rust
/// use shader_glitz::runtime::ContextOptions;
/// use shader_glitz::version::Version;
///
/// let options = ContextOptions::begin()
///     .disable_extension("GL_ARB_compute_shader")
///     .version_override(Version::GL330)
///     .finish();
/// ```
///
/// Options are also (de)serializable, so they can be part of an application's configuration file.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContextOptions {
    disabled_extensions: Vec<String>,
    version_override: Option<Version>,
}

impl ContextOptions {
    pub fn begin() -> ContextOptionsBuilder {
        ContextOptionsBuilder {
            disabled_extensions: Vec::new(),
            version_override: None,
        }
    }

    /// Default options extended with the extensions listed in the [DISABLE_EXTENSIONS_VAR]
    /// environment variable.
    pub fn from_env() -> Self {
        let mut builder = ContextOptions::begin();

        if let Ok(value) = env::var(DISABLE_EXTENSIONS_VAR) {
            for name in parse_extension_list(&value) {
                builder = builder.disable_extension(name);
            }
        }

        builder.finish()
    }

    /// Extension names that are treated as unsupported, even if the driver advertises them.
    pub fn disabled_extensions(&self) -> &[String] {
        &self.disabled_extensions
    }

    /// A version that replaces the version reported by the driver.
    pub fn version_override(&self) -> Option<Version> {
        self.version_override
    }
}

pub struct ContextOptionsBuilder {
    disabled_extensions: Vec<String>,
    version_override: Option<Version>,
}

impl ContextOptionsBuilder {
    pub fn disable_extension<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.disabled_extensions.push(name.into());

        self
    }

    pub fn version_override(mut self, version: Version) -> Self {
        self.version_override = Some(version);

        self
    }

    pub fn finish(self) -> ContextOptions {
        ContextOptions {
            disabled_extensions: self.disabled_extensions,
            version_override: self.version_override,
        }
    }
}

fn parse_extension_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::extensions::Extension;
    use crate::runtime::test_driver::TestDriver;
    use crate::runtime::Context;

    #[test]
    fn test_builder() {
        let options = ContextOptions::begin()
            .disable_extension("GL_KHR_debug")
            .version_override(Version::GLES200)
            .finish();

        assert_eq!(options.disabled_extensions(), &["GL_KHR_debug".to_string()]);
        assert_eq!(options.version_override(), Some(Version::GLES200));
    }

    #[test]
    fn test_from_env() {
        env::set_var(
            DISABLE_EXTENSIONS_VAR,
            "GL_ARB_compute_shader, GL_KHR_debug",
        );

        let options = ContextOptions::from_env();

        env::remove_var(DISABLE_EXTENSIONS_VAR);

        assert_eq!(
            options.disabled_extensions(),
            &["GL_ARB_compute_shader".to_string(), "GL_KHR_debug".to_string()]
        );
        assert_eq!(options.version_override(), None);

        let context = Context::new(TestDriver::new(Version::GL430), &options).unwrap();

        assert!(!context.is_extension_supported(Extension::ArbComputeShader));
        assert!(!context.is_extension_supported(Extension::KhrDebug));
        assert!(context.is_extension_supported(Extension::ArbTessellationShader));
    }

    #[test]
    fn test_parse_extension_list() {
        let names: Vec<_> =
            parse_extension_list(" GL_ARB_compute_shader,GL_KHR_debug\n\tGL_ARB_geometry_shader4 ")
                .collect();

        assert_eq!(
            names,
            vec![
                "GL_ARB_compute_shader",
                "GL_KHR_debug",
                "GL_ARB_geometry_shader4"
            ]
        );
    }

    #[test]
    fn test_deserialize() {
        let options: ContextOptions = serde_json::from_str(
            r#"{ "disabled-extensions": ["GL_ARB_tessellation_shader"], "version-override": "GL410" }"#,
        )
        .unwrap();

        assert_eq!(
            options,
            ContextOptions::begin()
                .disable_extension("GL_ARB_tessellation_shader")
                .version_override(Version::GL410)
                .finish()
        );

        let options: ContextOptions = serde_json::from_str("{}").unwrap();

        assert_eq!(options, ContextOptions::default());
    }
}
