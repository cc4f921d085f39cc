//! Metaball field simulation
//!
//! Pure state and integration. This module must stay free of rendering and
//! platform dependencies:
//! - Seeded RNG only
//! - Stable ball order (construction order is serialization order)
//! - Mutation only through `step`

pub mod state;
pub mod step;

pub use state::{Ball, Simulation};
pub use step::step;
