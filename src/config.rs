use crate::foundation::error::{BrickworkError, BrickworkResult};

/// Engine configuration.
///
/// All fields have defaults, keys are camelCase in JSON, and unrecognized
/// keys are ignored rather than rejected, so host-side option objects can be
/// passed through verbatim.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Registered strategy name. Unknown names fail engine construction.
    pub mode: String,
    /// Explicit column width. When absent the engine falls back to the first
    /// item's outer width, then to the container width.
    pub column_width: Option<f64>,
    /// Explicit row height (the cell size on the horizontal axis). Same
    /// fallback chain as `column_width`, against outer heights.
    pub row_height: Option<f64>,
    /// Space between placed items, in layout units.
    pub gutter: f64,
    /// Lay out along the horizontal axis (rows grow rightward) instead of the
    /// vertical one.
    pub is_horizontal: bool,
    /// Place items from the left edge. `false` mirrors x positions against
    /// the container box.
    pub is_origin_left: bool,
    /// Place items from the top edge. `false` mirrors y positions.
    pub is_origin_top: bool,
    /// Shrink the reported container width to the used columns (masonry
    /// only).
    pub is_fit_width: bool,
    /// Also report positions as fractions of the container box.
    pub percent_position: bool,
    /// Animated move duration in milliseconds. Zero disables animation.
    pub transition_duration_ms: u64,
    /// Advisory delay between successive animated moves within one pass.
    pub stagger_ms: u64,
    /// React to container resize notifications (debounced).
    pub is_resize_bound: bool,
    /// Run the first layout when the engine is activated.
    pub is_init_layout: bool,
    /// Quiet period for the resize debounce.
    pub resize_debounce_ms: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: "masonry".to_string(),
            column_width: None,
            row_height: None,
            gutter: 0.0,
            is_horizontal: false,
            is_origin_left: true,
            is_origin_top: true,
            is_fit_width: false,
            percent_position: false,
            transition_duration_ms: 400,
            stagger_ms: 0,
            is_resize_bound: true,
            is_init_layout: true,
            resize_debounce_ms: 100,
        }
    }
}

impl LayoutOptions {
    /// Parse options from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> BrickworkResult<Self> {
        serde_json::from_str(json).map_err(|e| BrickworkError::serde(e.to_string()))
    }

    /// Validate numeric invariants.
    pub fn validate(&self) -> BrickworkResult<()> {
        if let Some(w) = self.column_width
            && !(w.is_finite() && w > 0.0)
        {
            return Err(BrickworkError::config("columnWidth must be finite and > 0"));
        }
        if let Some(h) = self.row_height
            && !(h.is_finite() && h > 0.0)
        {
            return Err(BrickworkError::config("rowHeight must be finite and > 0"));
        }
        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(BrickworkError::config("gutter must be finite and >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
