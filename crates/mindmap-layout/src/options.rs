//! Tree configuration.

use mindmap_core::{ConfigError, ProbeBox};
use mindmap_measure::MeasureSettings;
use serde::{Deserialize, Serialize};

/// Options read once when a [`NodeTree`](crate::NodeTree) is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Name of the layout algorithm selected at construction
    pub layout: String,
    /// Title used for nodes whose title is blank
    pub placeholder_title: String,
    /// Font family sent with every measurement request
    pub font_family: String,
    /// Probe box for title width measurement
    pub title_probe: ProbeBox,
    /// Probe height for line splitting
    pub split_probe_height: f64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        let measure = MeasureSettings::default();
        Self {
            layout: "mindmap".to_string(),
            placeholder_title: measure.placeholder_title,
            font_family: measure.font_family,
            title_probe: measure.title_probe,
            split_probe_height: measure.split_probe_height,
        }
    }
}

impl TreeOptions {
    /// Load options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the layout selected at construction.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// The measurement settings these options describe.
    pub fn measure_settings(&self) -> MeasureSettings {
        MeasureSettings {
            font_family: self.font_family.clone(),
            placeholder_title: self.placeholder_title.clone(),
            title_probe: self.title_probe,
            split_probe_height: self.split_probe_height,
        }
    }
}
