pub mod services;
pub mod session;
pub mod time;
pub mod utils;

pub use session::Session;
pub use time::{Clock, FixedClock, SystemClock};
