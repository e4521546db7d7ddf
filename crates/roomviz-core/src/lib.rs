pub mod axis;
pub mod constants;
pub mod drag;
pub mod engine;
pub mod error;
pub mod furniture;
pub mod input;
pub mod object;
pub mod picking;
pub mod rig;
pub mod room;
pub mod snap;
pub mod state;
pub mod units;

pub use axis::*;
pub use constants::*;
pub use drag::*;
pub use engine::*;
pub use error::{PlacementError, Result};
pub use furniture::*;
pub use input::*;
pub use object::*;
pub use picking::*;
pub use rig::*;
pub use room::*;
pub use snap::*;
pub use state::*;
pub use units::*;
