use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    choreo::section::SectionSpec,
    foundation::{
        core::Viewport,
        error::{ScrollfxError, ScrollfxResult},
    },
    overlay::lifecycle::{OverlayTimings, WheelPolicy},
    runtime::page::{SectionLayout, stack_sections},
    scroll::tracker::ScrollWindow,
};

/// Current document format version.
pub const CHOREOGRAPHY_VERSION: u32 = 1;

fn default_version() -> u32 {
    CHOREOGRAPHY_VERSION
}

/// One full-screen overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlaySpec {
    /// Stable identifier.
    pub id: String,
    /// Lifecycle delays.
    #[serde(default)]
    pub timings: OverlayTimings,
    /// Wheel handling while mounted.
    pub wheel: WheelPolicy,
    /// Panel labels cycled by a dial overlay.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub panels: Vec<String>,
}

impl OverlaySpec {
    /// Check the timings, the wheel policy and that dial panels match the dial's step count.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollfxError::validation("overlay id must be non-empty"));
        }
        self.timings.validate()?;
        match self.wheel {
            WheelPolicy::Block if !self.panels.is_empty() => Err(ScrollfxError::validation(
                format!("overlay '{}': panels require a dial", self.id),
            )),
            WheelPolicy::Dial(dial) => {
                dial.validate()?;
                if !self.panels.is_empty() && self.panels.len() != dial.steps {
                    return Err(ScrollfxError::validation(format!(
                        "overlay '{}': {} panels for {} dial steps",
                        self.id,
                        self.panels.len(),
                        dial.steps
                    )));
                }
                Ok(())
            }
            WheelPolicy::Block => Ok(()),
        }
    }
}

/// JSON choreography document: sections in page order plus overlays.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Choreography {
    /// Format version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Design viewport used by tooling when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    /// Header visibility window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ScrollWindow>,
    /// Sections, top to bottom.
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    /// Overlays.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<OverlaySpec>,
}

impl Choreography {
    /// Document holding `sections`.
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self {
            version: CHOREOGRAPHY_VERSION,
            viewport: None,
            header: None,
            sections,
            overlays: Vec::new(),
        }
    }

    /// Parse from a JSON reader (not validated).
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollfxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollfxError::serde(format!("parse choreography JSON: {e}")))
    }

    /// Parse from a JSON string (not validated).
    pub fn from_json_str(s: &str) -> ScrollfxResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ScrollfxError::serde(format!("parse choreography JSON: {e}")))
    }

    /// Parse and validate a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollfxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollfxError::config(format!("open choreography JSON '{}': {e}", path.display()))
        })?;
        let doc = Self::from_reader(BufReader::new(f))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Pretty JSON.
    pub fn to_json_pretty(&self) -> ScrollfxResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollfxError::serde(format!("serialize choreography JSON: {e}")))
    }

    /// Validate every component and the id namespace.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.version != CHOREOGRAPHY_VERSION {
            return Err(ScrollfxError::config(format!(
                "unsupported choreography version {} (expected {CHOREOGRAPHY_VERSION})",
                self.version
            )));
        }
        if let Some(vp) = self.viewport {
            Viewport::new(vp.width, vp.height)?;
        }
        if let Some(h) = self.header
            && !(h.from_vh.is_finite() && h.to_vh.is_finite() && h.from_vh < h.to_vh)
        {
            return Err(ScrollfxError::validation(
                "header window must satisfy from_vh < to_vh",
            ));
        }

        let mut ids = BTreeSet::new();
        for section in &self.sections {
            section.validate()?;
            if !ids.insert(section.id.as_str()) {
                return Err(ScrollfxError::config(format!(
                    "duplicate id '{}'",
                    section.id
                )));
            }
        }
        for overlay in &self.overlays {
            overlay.validate()?;
            if !ids.insert(overlay.id.as_str()) {
                return Err(ScrollfxError::config(format!(
                    "duplicate id '{}'",
                    overlay.id
                )));
            }
        }
        Ok(())
    }

    /// Section by id.
    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section by id, as a config error when missing.
    pub fn require_section(&self, id: &str) -> ScrollfxResult<&SectionSpec> {
        self.section(id).ok_or_else(|| {
            let known: Vec<&str> = self.sections.iter().map(|s| s.id.as_str()).collect();
            ScrollfxError::config(format!(
                "unknown section '{id}' (known: {})",
                known.join(", ")
            ))
        })
    }

    /// Overlay by id.
    pub fn overlay(&self, id: &str) -> Option<&OverlaySpec> {
        self.overlays.iter().find(|o| o.id == id)
    }

    /// Sections stacked in document order.
    pub fn layouts(&self, viewport: Viewport) -> Vec<SectionLayout> {
        stack_sections(&self.sections, viewport)
    }

    /// Total document height for `viewport`.
    pub fn document_height(&self, viewport: Viewport) -> f64 {
        self.layouts(viewport)
            .last()
            .map_or(viewport.height, |l| l.top + l.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
