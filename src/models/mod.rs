pub mod doctor;
pub mod exam;
pub mod slot;
pub mod time;

pub use doctor::*;
pub use exam::*;
pub use slot::*;
pub use time::*;
