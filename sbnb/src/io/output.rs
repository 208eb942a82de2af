use serde::{Deserialize, Serialize};

use crate::config::SbnbConfig;
use strip_bnb::io::ext_repr::{ExtSPInstance, ExtSPSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct SPOutput {
    #[serde(flatten)]
    pub instance: ExtSPInstance,
    pub solution: ExtSPSolution,
    pub config: SbnbConfig,
}
