pub mod aggregate;
pub mod domain;
pub mod ports;
