//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (restart positions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionAxis, detect_collision, handle_collision};
pub use state::{GameObject, GamePhase, GameState, RngState};
pub use tick::{TickEvents, tick};
