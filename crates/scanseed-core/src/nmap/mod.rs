//! nmap XML reports to candidate web URLs.
//!
//! Only open TCP ports count. Each one yields a URL per hostname and per
//! non-MAC address of its host, with `https` chosen when nmap saw an SSL
//! tunnel or an `https` service.

mod parse;
mod transform;

pub use parse::{
    parse_nmap_xml, Address, Host, Hostname, Hostnames, NmapRun, Port, PortState, Ports, Service,
};
pub use transform::NmapParser;
