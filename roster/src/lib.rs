pub mod domain;
pub mod persistence;
pub mod ports;
pub mod service;
