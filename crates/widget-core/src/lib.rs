pub mod ports;
pub mod reply;
pub mod event_bus;
pub mod controller;
