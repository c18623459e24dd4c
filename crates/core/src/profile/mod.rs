//! Profile management: ports, validation rules and the service

pub mod ports;
pub mod service;
pub mod validation;

pub use service::ProfileService;
