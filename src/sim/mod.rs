mod input;
mod pose;
mod providers;
mod vehicle;
mod vehicle_config;
mod world;

pub use input::*;
pub use pose::*;
pub use providers::*;
pub use vehicle::*;
pub use vehicle_config::*;
pub use world::*;
