pub mod config;
pub mod error;
pub mod logging;
pub mod nmap;
pub mod ports;
pub mod source;
