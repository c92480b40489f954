use kurbo::Size;

use crate::config::LayoutOptions;
use crate::engine::LayoutEngine;
use crate::environment::fixture::StaticEnvironment;
use crate::environment::{ElementBox, ElementId, Margins};
use crate::foundation::error::{BrickworkError, BrickworkResult};

/// A headless layout problem: container, options, items, obstacles.
///
/// Pure data model, serializable via Serde (JSON). Solving a scene wires a
/// [`StaticEnvironment`] from it and runs one engine pass.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Container size.
    pub container: Size,
    /// Engine options. Unknown keys in the JSON are ignored.
    #[serde(default)]
    pub options: LayoutOptions,
    /// Items to place, in insertion order.
    pub items: Vec<SceneItem>,
    /// Static obstacles carved out of the placeable area.
    #[serde(default)]
    pub stamps: Vec<SceneStamp>,
}

/// One item to place.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneItem {
    /// Caller-chosen id, unique across items and stamps.
    pub id: u64,
    /// Border-box width.
    pub width: f64,
    /// Border-box height.
    pub height: f64,
    /// Margins; outer extents are derived.
    #[serde(default)]
    pub margins: Margins,
}

/// One static obstacle.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneStamp {
    /// Caller-chosen id, unique across items and stamps.
    pub id: u64,
    /// Offset from the container's left edge.
    pub x: f64,
    /// Offset from the container's top edge.
    pub y: f64,
    /// Obstacle width.
    pub width: f64,
    /// Obstacle height.
    pub height: f64,
}

/// Committed position of one item after solving.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// The item's id from the scene.
    pub id: u64,
    /// Left of the outer box.
    pub x: f64,
    /// Top of the outer box.
    pub y: f64,
    /// Position as fractions of the container box (when `percentPosition`
    /// is set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<[f64; 2]>,
}

/// The result of solving a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutReport {
    /// Container size after the pass (height fit to content; width shrunk
    /// when fit-width is on).
    pub container: Size,
    /// Per-item placements, in insertion order.
    pub placements: Vec<Placement>,
}

impl Scene {
    /// Validate scene invariants: finite non-negative dimensions, unique ids.
    pub fn validate(&self) -> BrickworkResult<()> {
        if !(self.container.width.is_finite() && self.container.width >= 0.0)
            || !(self.container.height.is_finite() && self.container.height >= 0.0)
        {
            return Err(BrickworkError::config(
                "container width/height must be finite and >= 0",
            ));
        }
        self.options.validate()?;

        let mut seen = std::collections::BTreeSet::new();
        for item in &self.items {
            if !(item.width.is_finite() && item.width >= 0.0)
                || !(item.height.is_finite() && item.height >= 0.0)
            {
                return Err(BrickworkError::config(format!(
                    "item {} width/height must be finite and >= 0",
                    item.id
                )));
            }
            if !seen.insert(item.id) {
                return Err(BrickworkError::config(format!(
                    "duplicate id {} in scene",
                    item.id
                )));
            }
        }
        for stamp in &self.stamps {
            if !(stamp.width.is_finite() && stamp.width >= 0.0)
                || !(stamp.height.is_finite() && stamp.height >= 0.0)
            {
                return Err(BrickworkError::config(format!(
                    "stamp {} width/height must be finite and >= 0",
                    stamp.id
                )));
            }
            if !seen.insert(stamp.id) {
                return Err(BrickworkError::config(format!(
                    "duplicate id {} in scene",
                    stamp.id
                )));
            }
        }
        Ok(())
    }

    /// Parse a scene from JSON.
    pub fn from_json(json: &str) -> BrickworkResult<Self> {
        serde_json::from_str(json).map_err(|e| BrickworkError::serde(e.to_string()))
    }
}

/// Solve a scene: run one layout pass over a [`StaticEnvironment`] built from
/// it and report the committed positions.
pub fn solve(scene: &Scene) -> BrickworkResult<LayoutReport> {
    scene.validate()?;

    // the container handle must not collide with scene ids
    let max_id = scene
        .items
        .iter()
        .map(|i| i.id)
        .chain(scene.stamps.iter().map(|s| s.id))
        .max()
        .unwrap_or(0);
    let container = ElementId(max_id + 1);

    let mut env = StaticEnvironment::new();
    env.set_size(
        container,
        scene.container.width,
        scene.container.height,
        Margins::default(),
    );
    for item in &scene.items {
        env.set_size(ElementId(item.id), item.width, item.height, item.margins);
    }
    for stamp in &scene.stamps {
        env.set_box(
            ElementId(stamp.id),
            ElementBox {
                x: stamp.x,
                y: stamp.y,
                width: stamp.width,
                height: stamp.height,
                outer_width: stamp.width,
                outer_height: stamp.height,
                margins: Margins::default(),
            },
        );
    }

    let mut engine = LayoutEngine::new(container, scene.options.clone())?;
    let item_ids: Vec<ElementId> = scene.items.iter().map(|i| ElementId(i.id)).collect();
    engine.add_items(&mut env, &item_ids);
    let stamp_ids: Vec<ElementId> = scene.stamps.iter().map(|s| ElementId(s.id)).collect();
    engine.stamp(&stamp_ids);
    engine.layout(&mut env)?;

    let placements = engine
        .placements()
        .into_iter()
        .map(|p| Placement {
            id: p.element.0,
            x: p.position.x,
            y: p.position.y,
            percent: p.percent.map(|f| [f.x, f.y]),
        })
        .collect();

    Ok(LayoutReport {
        container: engine.content_size(),
        placements,
    })
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
