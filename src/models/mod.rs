pub mod config;
pub mod report;

pub use config::{
    DimensionsConfig, HeicConfig, LogoConfig, LogoVariant, PipelineConfig, ResizeConfig,
    SvgConfig, CONFIG_FILE_NAME, DEFAULT_CONFIG_YAML,
};
pub use report::{DimensionEntry, ImageInfo, Orientation, ResizeAction, ResizeOutcome};
