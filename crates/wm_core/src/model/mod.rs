pub mod client;
pub mod flags;
pub mod ids;
pub mod monitor;
pub mod rule;
pub mod tags;
pub mod world;

pub use client::Client;
pub use ids::{ClientId, MonitorId};
pub use monitor::Monitor;
pub use world::World;
