pub mod dimensions;
pub mod downscale;
pub mod heic;
pub mod image_io;
pub mod logo_variants;
pub mod recolor;
pub mod scan;
pub mod svg_logo;

pub use heic::ConvertSummary;
pub use logo_variants::LogoReport;
pub use recolor::{LogoRecolorer, RecolorOutput};
pub use svg_logo::SvgReport;
