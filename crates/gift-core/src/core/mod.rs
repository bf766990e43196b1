pub mod catalog;
pub mod layout;
pub mod rng;
pub mod round;
pub mod timer;
