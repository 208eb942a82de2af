use serde::{Deserialize, Serialize};

use strip_bnb::io::svg::SvgDrawOptions;
use strip_bnb::util::BnbConfig;

/// Configuration for the sbnb application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct SbnbConfig {
    /// Configuration of the branch-and-bound search
    #[serde(default)]
    pub bnb_config: BnbConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
