//! `scanseed nmap <path>` – print candidate URLs from an nmap XML report.

use anyhow::{Context, Result};
use scanseed_core::config::{OutputFormat, ScanseedConfig};
use scanseed_core::nmap::NmapParser;
use scanseed_core::source::TargetSource;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Flags for the `nmap` subcommand; `None` / `false` defer to the config file.
#[derive(Debug, Clone, Default)]
pub struct NmapArgs {
    pub path: String,
    pub ports: Option<String>,
    pub show_default_ports: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

impl NmapArgs {
    /// Parser and format after applying CLI overrides to `cfg`.
    pub fn resolve(&self, cfg: &ScanseedConfig) -> (NmapParser, OutputFormat) {
        let ports = self.ports.as_deref().unwrap_or(&cfg.ports);
        let show_default_ports = self.show_default_ports || cfg.show_default_ports;
        let parser = NmapParser::new(ports, show_default_ports);
        (parser, self.format.unwrap_or(cfg.format))
    }
}

pub fn run_nmap(cfg: &ScanseedConfig, args: &NmapArgs) -> Result<()> {
    let (parser, format) = args.resolve(cfg);
    tracing::debug!(
        "nmap path={} allow_list={:?} show_default_ports={} format={:?}",
        args.path,
        parser.allowed_ports(),
        parser.show_default_ports(),
        format
    );

    let urls = read_targets(&parser, &args.path)?;
    tracing::info!("{} target URL(s) from {}", urls.len(), args.path);

    let rendered = render(&urls, format)?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_targets(source: &dyn TargetSource, path: &str) -> Result<Vec<String>> {
    let mut input: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(path).with_context(|| format!("open {}", path))?)
    };
    let urls = source
        .targets(&mut input)
        .with_context(|| format!("parse nmap report: {}", path))?;
    Ok(urls)
}

fn render(urls: &[String], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => urls.iter().map(|u| format!("{u}\n")).collect(),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(urls)?;
            s.push('\n');
            s
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<nmaprun><host>
        <address addr="10.1.1.1" addrtype="ipv4"/>
        <ports>
            <port protocol="tcp" portid="80"><state state="open"/><service name="http"/></port>
            <port protocol="tcp" portid="8443"><state state="open"/><service name="https"/></port>
        </ports>
    </host></nmaprun>"#;

    fn report_file() -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(REPORT.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn cli_flags_override_config() {
        let cfg = ScanseedConfig {
            ports: "8443".to_string(),
            show_default_ports: false,
            format: OutputFormat::Json,
        };
        let args = NmapArgs {
            ports: Some("80".to_string()),
            show_default_ports: true,
            format: Some(OutputFormat::Text),
            ..Default::default()
        };
        let (parser, format) = args.resolve(&cfg);
        assert!(parser.allowed_ports().unwrap().contains(&80));
        assert!(!parser.allowed_ports().unwrap().contains(&8443));
        assert!(parser.show_default_ports());
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn config_applies_when_flags_absent() {
        let cfg = ScanseedConfig {
            ports: "8443".to_string(),
            show_default_ports: true,
            format: OutputFormat::Json,
        };
        let (parser, format) = NmapArgs::default().resolve(&cfg);
        assert_eq!(parser.allowed_ports().unwrap().len(), 1);
        assert!(parser.show_default_ports());
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn run_nmap_writes_text_output_file() {
        let report = report_file();
        let out_dir = tempfile::tempdir().unwrap();
        let out = out_dir.path().join("urls.txt");
        let args = NmapArgs {
            path: report.path().display().to_string(),
            output: Some(out.clone()),
            ..Default::default()
        };
        run_nmap(&ScanseedConfig::default(), &args).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "http://10.1.1.1/\nhttps://10.1.1.1:8443/\n"
        );
    }

    #[test]
    fn run_nmap_writes_json_output_file() {
        let report = report_file();
        let out_dir = tempfile::tempdir().unwrap();
        let out = out_dir.path().join("urls.json");
        let args = NmapArgs {
            path: report.path().display().to_string(),
            ports: Some("8443".to_string()),
            format: Some(OutputFormat::Json),
            output: Some(out.clone()),
            ..Default::default()
        };
        run_nmap(&ScanseedConfig::default(), &args).unwrap();
        let urls: Vec<String> = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(urls, vec!["https://10.1.1.1:8443/"]);
    }

    #[test]
    fn missing_report_is_an_error() {
        let args = NmapArgs {
            path: "/nonexistent/scan.xml".to_string(),
            ..Default::default()
        };
        let err = run_nmap(&ScanseedConfig::default(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/scan.xml"));
    }

    #[test]
    fn render_empty_list() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }
}
