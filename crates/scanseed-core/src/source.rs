//! Source interface for turning a raw report stream into target URLs.
//!
//! The CLI reads reports through this trait. Errors are still `NmapError`,
//! so nmap is the only format for now; a second format needs a neutral error.

use std::io::Read;

use crate::error::NmapError;
use crate::nmap::NmapParser;

/// Implemented by report parsers that yield candidate URLs (nmap XML only for now).
pub trait TargetSource {
    fn targets(&self, input: &mut dyn Read) -> Result<Vec<String>, NmapError>;
}

impl TargetSource for NmapParser {
    fn targets(&self, input: &mut dyn Read) -> Result<Vec<String>, NmapError> {
        self.parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nmap_parser_as_trait_object() {
        let xml = r#"<nmaprun><host>
            <address addr="192.168.1.10" addrtype="ipv4"/>
            <ports><port protocol="tcp" portid="8443"><state state="open"/><service name="https"/></port></ports>
        </host></nmaprun>"#;
        let source: Box<dyn TargetSource> = Box::new(NmapParser::new("", false));
        let mut input = xml.as_bytes();
        let urls = source.targets(&mut input).unwrap();
        assert_eq!(urls, vec!["https://192.168.1.10:8443/"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let source = NmapParser::new("", false);
        let mut input: &[u8] = b"";
        assert!(source.targets(&mut input).is_err());
    }
}
