//! Shared resource catalog ports

pub mod ports;
