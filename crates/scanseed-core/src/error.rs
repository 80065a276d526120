//! Errors surfaced while turning a scan report into URLs.

use thiserror::Error;

/// Failure to produce a URL list from a report. No partial output accompanies it.
#[derive(Debug, Error)]
pub enum NmapError {
    /// The input stream could not be read.
    #[error("read scan report: {0}")]
    Read(#[from] std::io::Error),
    /// The bytes were read but are not a well-formed nmap XML report.
    #[error("decode nmap XML: {0}")]
    Decode(#[from] quick_xml::DeError),
}
