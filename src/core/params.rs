use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Connectivity;

/// Dilation parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DilateParams {
    /// Number of dilation passes; must be >= 1
    pub iterations: u32,
    pub connectivity: Connectivity,
}

impl Default for DilateParams {
    fn default() -> Self {
        Self {
            iterations: 1,
            connectivity: Connectivity::Full26,
        }
    }
}

impl DilateParams {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidParameter {
                param: "iterations",
                value: self.iterations.to_string(),
            });
        }
        Ok(())
    }
}
