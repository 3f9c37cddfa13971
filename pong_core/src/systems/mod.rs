pub mod collision;
pub mod control;
pub mod difficulty;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use control::*;
pub use difficulty::*;
pub use movement::*;
pub use scoring::*;
