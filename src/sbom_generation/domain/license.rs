use serde::{Deserialize, Serialize};

/// License value object
///
/// Produced by [`crate::sbom_generation::policies::LicenseNormalizer`] and
/// never mutated afterwards. The SPDX identifier is stored raw (`MIT`, not
/// `SPDX-License-Identifier: MIT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    spdx_id: Option<String>,
    name: Option<String>,
    text: Option<String>,
    url: Option<String>,
}

impl License {
    pub fn new(spdx_id: Option<String>, name: Option<String>) -> Self {
        Self {
            spdx_id,
            name,
            text: None,
            url: None,
        }
    }

    /// Attaches the full license text and a reference URL
    pub fn with_details(mut self, text: Option<String>, url: Option<String>) -> Self {
        self.text = text;
        self.url = url;
        self
    }

    pub fn spdx_id(&self) -> Option<&str> {
        self.spdx_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
