pub mod booking;
pub mod booking_set;
pub mod interval;

pub use booking::*;
pub use booking_set::*;
pub use interval::*;
