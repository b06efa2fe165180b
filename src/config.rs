use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PasswordConfig {
    pub(crate) length: Option<usize>,
    pub(crate) uppercase: Option<bool>,
    pub(crate) lowercase: Option<bool>,
    pub(crate) numbers: Option<bool>,
    pub(crate) symbols: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct QrConfig {
    pub(crate) size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ImageConfig {
    pub(crate) max_width: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ShortenerConfig {
    pub(crate) base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_store: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) password: PasswordConfig,
    #[serde(default)]
    pub(crate) qr: QrConfig,
    #[serde(default)]
    pub(crate) image: ImageConfig,
    #[serde(default)]
    pub(crate) shortener: ShortenerConfig,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(mut config) => {
                    config.source = Some(path);
                    return config;
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // An explicit file replaces the search entirely
        if let Some(explicit) = std::env::var_os("AIOTOOLS_CONFIG").filter(|v| !v.is_empty()) {
            return vec![PathBuf::from(explicit)];
        }

        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aiotools/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("aiotools").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/aiotools/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("aiotools").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aiotools.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".aiotools.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::parse("").unwrap();
        assert!(!config.quiet);
        assert!(config.color.is_none());
        assert!(config.password.length.is_none());
    }

    #[test]
    fn parses_tool_sections() {
        let config = Config::parse(
            r#"
            color = "never"
            timezone = "UTC"
            data_dir = "/tmp/aiotools"

            [password]
            length = 24
            symbols = false

            [qr]
            size = 512

            [image]
            max_width = 1024

            [shortener]
            base_url = "https://sho.rt/"
            "#,
        )
        .unwrap();
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/aiotools")));
        assert_eq!(config.password.length, Some(24));
        assert_eq!(config.password.symbols, Some(false));
        assert_eq!(config.password.uppercase, None);
        assert_eq!(config.qr.size, Some(512));
        assert_eq!(config.image.max_width, Some(1024));
        assert_eq!(config.shortener.base_url.as_deref(), Some("https://sho.rt/"));
    }

    #[test]
    fn unknown_section_key_is_an_error() {
        assert!(Config::parse("[qr]\ncolour = 1\n").is_err());
        assert!(Config::parse("color = \"sometimes\"\n").is_err());
    }

    #[test]
    fn config_paths_are_not_empty() {
        assert!(!Config::get_config_paths().is_empty());
    }
}
