pub mod fsm;
pub mod input;
pub mod session;

pub use fsm::*;
pub use input::*;
pub use session::*;
