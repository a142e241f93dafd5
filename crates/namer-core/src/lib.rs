pub mod ports;
pub mod event_bus;
pub mod persistence;
pub mod copy_indicator;
pub mod session;
pub mod dispatch;
