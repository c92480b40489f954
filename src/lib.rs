//! Brickwork is a grid layout and packing engine.
//!
//! Given a container and a set of rectangular items with known sizes, Brickwork computes
//! non-overlapping positions for every item, supports interchangeable packing strategies, reacts
//! to external size changes, and animates items to newly computed positions without forcing
//! redundant reflows in the host.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: container, items, and stamped obstacles, through the host's [`Environment`]
//! 2. **Place**: the active [`LayoutStrategy`] computes a target per item (pure geometry)
//! 3. **Write**: all targets are applied in one batch, synchronously or as animated moves
//! 4. **Settle**: in-flight moves drain, the container is sized to content, events fire
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: placement is pure and stable for a given input; laying out
//!   twice with unchanged inputs moves nothing.
//! - **No IO in the engine**: measurement, animation, and timers are host capabilities behind
//!   the [`Environment`] trait.
//! - **Reads before writes**: within one pass every position is computed before any is applied.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed, standalone walkthrough of the API and architecture, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod environment;
mod foundation;
mod item;
mod scene;
mod strategy;

/// High-level, standalone documentation for Brickwork's concepts and architecture.
pub mod guide;

pub use config::LayoutOptions;
pub use engine::{ItemPlacement, LayoutEngine, LayoutEvent, LayoutPhase};
pub use environment::fixture::StaticEnvironment;
pub use environment::{
    ElementBox, ElementId, Environment, Margins, TimerToken, TransitionRequest, TransitionTicket,
};
pub use foundation::error::{BrickworkError, BrickworkResult};
pub use foundation::geom::{FIT_SLACK, Point, Rect, Size, Vec2};
pub use item::{ItemId, LayoutItem, TransitionState};
pub use scene::{LayoutReport, Placement, Scene, SceneItem, SceneStamp, solve};
pub use strategy::binpack::{BinPack, Packer, SortDirection};
pub use strategy::fitrows::FitRows;
pub use strategy::masonry::Masonry;
pub use strategy::{LayoutStrategy, StrategyContext, StrategyRegistry};
