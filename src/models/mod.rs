pub mod recommendation;
pub mod schedule;
pub mod weather;
pub mod window;

pub use recommendation::*;
pub use schedule::*;
pub use weather::*;
pub use window::*;
