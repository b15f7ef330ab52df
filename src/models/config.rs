use crate::error::ConfigError;
use pixel_recolor::TargetColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file picked up from the project root when no
/// `--config` is given.
pub const CONFIG_FILE_NAME: &str = "asset-tools.yaml";

/// The default configuration, as written by `asset-tools init`.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../assets/default-config.yaml");

/// Pipeline configuration loaded from asset-tools.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Asset folder, relative to the project root
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default)]
    pub logo: LogoConfig,

    #[serde(default)]
    pub svg: SvgConfig,

    #[serde(default)]
    pub heic: HeicConfig,

    #[serde(default)]
    pub dimensions: DimensionsConfig,

    #[serde(default)]
    pub resize: ResizeConfig,
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Raster logo recoloring: one source, several colored variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Source logo, relative to the public dir
    pub input: PathBuf,

    /// Variants produced in order
    pub variants: Vec<LogoVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoVariant {
    /// Human-readable kind, used in "Created <kind> logo at: ..."
    pub kind: String,

    /// Color that opaque white maps to
    #[serde(with = "color_format")]
    pub color: TargetColor,

    /// Output file, relative to the public dir
    pub output: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("WhiteLogoNoBackground.png"),
            variants: vec![
                LogoVariant {
                    kind: "light blue".to_string(),
                    color: TargetColor::new(160, 200, 240),
                    output: PathBuf::from("LightBlueLogoNoBackground.png"),
                },
                LogoVariant {
                    kind: "very light blue".to_string(),
                    color: TargetColor::new(220, 235, 255),
                    output: PathBuf::from("VeryLightBlueLogoNoBackground.png"),
                },
            ],
        }
    }
}

/// Vector logo recoloring by text substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Paths are relative to the project root
    pub input: PathBuf,
    pub output: PathBuf,
    pub padded_output: PathBuf,

    /// Replacement for white color literals
    #[serde(with = "color_format")]
    pub accent: TargetColor,

    /// Side length of the square padded canvas
    pub pad_size: u32,

    /// Translation of the original artwork inside the padded canvas
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("WhiteLogoNoBackground.svg"),
            output: PathBuf::from("PatchLogoBlue.svg"),
            padded_output: PathBuf::from("PatchLogoBlue_Padded.svg"),
            accent: TargetColor::new(0x07, 0x51, 0xcf),
            pad_size: 800,
            offset_x: 8.0,
            offset_y: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeicConfig {
    /// Directory scanned for *.heic, relative to the project root
    pub input_dir: PathBuf,

    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for HeicConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            quality: 95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionsConfig {
    /// Extensions to report on (case-insensitive, without the dot)
    pub extensions: Vec<String>,

    /// Aspect ratio above which an image counts as landscape
    pub landscape_ratio: f64,

    /// Aspect ratio below which an image counts as portrait
    pub portrait_ratio: f64,
}

impl Default for DimensionsConfig {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "gif", "webp"]
                .map(String::from)
                .to_vec(),
            landscape_ratio: 1.3,
            portrait_ratio: 0.77,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Maximum width in pixels
    pub max_width: u32,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Files smaller than this are left alone
    pub min_size_mb: f64,

    /// Extensions to process (case-insensitive, without the dot)
    pub extensions: Vec<String>,

    /// Any path containing one of these substrings is skipped
    pub skip_patterns: Vec<String>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_width: 1920,
            quality: 85,
            min_size_mb: 1.0,
            extensions: ["jpg", "jpeg", "png", "webp"].map(String::from).to_vec(),
            skip_patterns: ["node_modules", ".git", "favicon", "noise.png"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            logo: LogoConfig::default(),
            svg: SvgConfig::default(),
            heic: HeicConfig::default(),
            dimensions: DimensionsConfig::default(),
            resize: ResizeConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from an explicit file. Errors are fatal.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;
        tracing::info!(
            path = %path.display(),
            variants = config.logo.variants.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must load. Otherwise `<project_root>/asset-tools.yaml`
    /// is used if present, falling back to defaults when it cannot be read
    /// or parsed.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let implicit = project_root.join(CONFIG_FILE_NAME);
        if !implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        match Self::from_file(&implicit) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Absolute-or-relative path of the asset folder for `project_root`
    pub fn public_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.public_dir)
    }
}

/// Colors are written as `#rrggbb` and read from a hex string, an
/// `r,g,b` string or a `[r, g, b]` sequence.
mod color_format {
    use pixel_recolor::TargetColor;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Triple([u8; 3]),
    }

    pub fn serialize<S: Serializer>(color: &TargetColor, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TargetColor, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Repr::Triple(bytes) => Ok(TargetColor::from_bytes(bytes)),
        }
    }
}
