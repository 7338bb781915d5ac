pub mod handlers;
pub mod ids;
pub mod store;
pub mod tags;
