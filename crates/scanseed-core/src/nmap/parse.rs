//! Minimal nmap XML structures: just the parts needed to build URLs.

use serde::Deserialize;

use crate::error::NmapError;

/// Root `<nmaprun>` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "nmaprun")]
pub struct NmapRun {
    #[serde(rename = "host", default)]
    pub hosts: Vec<Host>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Host {
    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub hostnames: Option<Hostnames>,
    #[serde(default)]
    pub ports: Option<Ports>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hostnames {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<Hostname>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Ports {
    #[serde(rename = "port", default)]
    pub ports: Vec<Port>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Port {
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub port_id: u16,
    /// Missing `<state>` decodes as an empty state, which never counts as open.
    #[serde(default)]
    pub state: PortState,
    #[serde(default)]
    pub service: Service,
}

#[derive(Debug, Default, Deserialize)]
pub struct PortState {
    #[serde(rename = "@state", default)]
    pub state: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Service {
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Transport wrapper reported by version detection, e.g. "ssl".
    #[serde(rename = "@tunnel", default)]
    pub tunnel: String,
}

impl Host {
    /// Hostname strings in document order.
    pub fn hostname_iter(&self) -> impl Iterator<Item = &str> {
        self.hostnames
            .iter()
            .flat_map(|h| h.hostnames.iter())
            .map(|h| h.name.as_str())
    }

    /// Ports in document order.
    pub fn port_iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().flat_map(|p| p.ports.iter())
    }
}

/// Decodes a complete nmap XML report.
pub fn parse_nmap_xml(xml: &[u8]) -> Result<NmapRun, NmapError> {
    let run: NmapRun = quick_xml::de::from_reader(xml)?;
    Ok(run)
}
