//! 2D geometry: kernel primitives, segments, and simple polygons.
//!
//! Purpose
//! - Provide the parametric segment-segment intersection primitive and the
//!   shape types built on top of it (`Segment`, `Polygon`), with numerically
//!   explicit (eps-aware) predicates.
//! - Keep the API minimal (KISS, YAGNI): every polygon query reduces to
//!   repeated calls of `kernel::segment_intersection` or the segment distance.
//!
//! Why this design
//! - A single eps-gated intersection primitive keeps behavior consistent
//!   across containment, intersection, and distance queries.
//! - Polygons are immutable after construction; segments are derived once and
//!   never recomputed, so queries need no synchronization of any kind.
//!
//! Code cross-refs: `kernel::{segment_intersection, Intersection}`,
//! `types::GeomCfg`, `Segment`, `Polygon`

pub mod kernel;
mod polygon;
mod segment;
mod types;

pub use polygon::{GeomError, Polygon};
pub use segment::Segment;
pub use types::GeomCfg;
