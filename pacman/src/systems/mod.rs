//! The simulation rules, split by concern. Each system is a plain function over entity and maze
//! state so it can be exercised without timers or a renderer.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod movement;
pub mod power;
pub mod state;

pub use self::collision::*;
pub use self::components::*;
pub use self::ghost::*;
pub use self::movement::*;
pub use self::power::*;
pub use self::state::*;
