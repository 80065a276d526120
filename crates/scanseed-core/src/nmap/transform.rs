//! Filter open TCP ports and format them as candidate URLs.

use std::collections::HashSet;
use std::io::Read;

use crate::error::NmapError;
use crate::ports::parse_port_list;

use super::parse::{parse_nmap_xml, Host, Port};

/// Turns nmap reports into `scheme://host[:port]/` URLs.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of reports (and threads).
#[derive(Debug, Clone, Default)]
pub struct NmapParser {
    /// `None` means every port passes; `Some(empty)` means none do.
    allowed_ports: Option<HashSet<u16>>,
    show_default_ports: bool,
}

impl NmapParser {
    /// Builds a parser from a comma-separated allow-list (`""` for no filter).
    pub fn new(ports: &str, show_default_ports: bool) -> Self {
        Self {
            allowed_ports: parse_port_list(ports),
            show_default_ports,
        }
    }

    pub fn allowed_ports(&self) -> Option<&HashSet<u16>> {
        self.allowed_ports.as_ref()
    }

    pub fn show_default_ports(&self) -> bool {
        self.show_default_ports
    }

    /// Reads a whole report from `r` and returns its URLs in document order.
    pub fn parse<R: Read>(&self, mut r: R) -> Result<Vec<String>, NmapError> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        self.parse_bytes(&bytes)
    }

    /// Same as [`parse`](Self::parse) for a report already in memory.
    pub fn parse_bytes(&self, xml: &[u8]) -> Result<Vec<String>, NmapError> {
        let run = parse_nmap_xml(xml)?;
        tracing::debug!("decoded nmap report with {} host(s)", run.hosts.len());

        let targets: Vec<String> = run.hosts.iter().flat_map(|h| self.host_urls(h)).collect();
        tracing::debug!("built {} target URL(s)", targets.len());
        Ok(targets)
    }

    /// URLs for one host: per eligible port, hostnames first, then non-MAC addresses.
    pub fn host_urls(&self, host: &Host) -> Vec<String> {
        let mut urls = Vec::new();
        for port in host.port_iter() {
            let Some(scheme) = self.scheme_for(port) else {
                continue;
            };

            for hostname in host.hostname_iter() {
                urls.push(self.build_url(scheme, hostname, port.port_id));
            }
            for address in &host.addresses {
                if address.addr_type == "mac" {
                    continue;
                }
                urls.push(self.build_url(scheme, &address.addr, port.port_id));
            }
        }
        urls
    }

    /// Scheme for an eligible port, or `None` if the port is skipped.
    fn scheme_for(&self, port: &Port) -> Option<&'static str> {
        if port.state.state != "open" {
            return None;
        }
        if let Some(allowed) = &self.allowed_ports {
            if !allowed.contains(&port.port_id) {
                return None;
            }
        }
        if port.protocol != "tcp" {
            return None;
        }

        if port.service.tunnel == "ssl" || port.service.name == "https" {
            Some("https")
        } else {
            Some("http")
        }
    }

    /// Formats one URL; 80/http and 443/https drop the port unless `show_default_ports`.
    pub fn build_url(&self, scheme: &str, host: &str, port: u16) -> String {
        let is_default = (scheme == "http" && port == 80) || (scheme == "https" && port == 443);
        if !self.show_default_ports && is_default {
            format!("{scheme}://{host}/")
        } else {
            format!("{scheme}://{host}:{port}/")
        }
    }
}
