//! Configuration loading and parsing.
//!
//! Reads `ryu.toml` (or an override path supplied by the binary). Every
//! section and field is optional; a missing or malformed file yields the
//! defaults so the editor always starts. Unknown fields are ignored.
//!
//! ```toml
//! [display]
//! line_numbers = true
//! no_name = "[No Name]"
//! title = "Ryu Editor"
//!
//! [log]
//! filter = "actions.dispatch=trace"
//! file = "ryu.log"
//!
//! [scroll]
//! margin = 2
//! ```
//!
//! The scroll margin is clamped against the text area height at render time
//! via [`Config::apply_viewport`].

use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "ryu.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_line_numbers")]
    pub line_numbers: bool,
    /// Shown in place of a file name for an unsaved buffer.
    #[serde(default = "DisplayConfig::default_no_name")]
    pub no_name: String,
    #[serde(default = "DisplayConfig::default_title")]
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_numbers: Self::default_line_numbers(),
            no_name: Self::default_no_name(),
            title: Self::default_title(),
        }
    }
}

impl DisplayConfig {
    const fn default_line_numbers() -> bool {
        true
    }
    fn default_no_name() -> String {
        "[No Name]".to_string()
    }
    fn default_title() -> String {
        "Ryu Editor".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default = "LogConfig::default_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: None,
            file: Self::default_file(),
        }
    }
}

impl LogConfig {
    fn default_file() -> String {
        "ryu.log".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    #[serde(default)]
    pub margin: u16,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,     // file content as read
    pub file: ConfigFile,        // parsed (or default) data
    pub source: Option<PathBuf>, // path the data came from, if any
    pub effective_scroll_margin: u16,
    /// Set when a file was found but could not be parsed; the defaults are
    /// in use and the path it came from is kept in `rejected`.
    pub parse_error: Option<String>,
    pub rejected: Option<PathBuf>,
}

/// Config path following platform conventions: `./ryu.toml` first, then the
/// user config directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("ryu").join(CONFIG_FILE_NAME);
    }
    local
}

/// Read and parse the config file. Nothing is logged here: loading runs
/// before the subscriber exists, so the outcome is kept on the returned
/// [`Config`] and emitted later by [`Config::log_load_outcome`].
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
            source: Some(path),
            ..Config::default()
        }),
        Err(e) => Ok(Config {
            parse_error: Some(e.to_string()),
            rejected: Some(path),
            ..Config::default()
        }),
    }
}

impl Config {
    pub fn log_load_outcome(&self) {
        if let Some(path) = &self.source {
            info!(target: "config", path = %path.display(), "config_loaded");
        }
        if let Some(error) = &self.parse_error {
            let path = self.rejected.as_deref().unwrap_or(Path::new(CONFIG_FILE_NAME));
            warn!(target: "config", path = %path.display(), error = %error, "config_parse_failed");
        }
    }

    /// Clamp the configured scroll margin to `(text_rows - 2) / 2`; areas of
    /// three rows or fewer get no margin. Returns the effective value.
    pub fn apply_viewport(&mut self, text_rows: u16) -> u16 {
        let raw = self.file.scroll.margin;
        let clamped = if text_rows <= 3 {
            0
        } else {
            raw.min(text_rows.saturating_sub(2) / 2)
        };
        if clamped != raw {
            info!(target: "config", raw, clamped, text_rows, "scroll_margin_clamped");
        }
        self.effective_scroll_margin = clamped;
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), content).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.raw.is_none());
        assert!(cfg.source.is_none());
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.file.display.line_numbers);
        assert_eq!(cfg.file.display.no_name, "[No Name]");
        assert_eq!(cfg.file.log.file, "ryu.log");
        assert_eq!(cfg.file.scroll.margin, 0);
    }

    #[test]
    fn parses_all_sections() {
        let tmp = write_config(
            "[display]\nline_numbers = false\nno_name = \"scratch\"\n\
             [log]\nfilter = \"debug\"\n[scroll]\nmargin = 3\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert!(!cfg.file.display.line_numbers);
        assert_eq!(cfg.file.display.no_name, "scratch");
        assert_eq!(cfg.file.display.title, "Ryu Editor");
        assert_eq!(cfg.file.log.filter.as_deref(), Some("debug"));
        assert_eq!(cfg.file.log.file, "ryu.log");
        assert_eq!(cfg.file.scroll.margin, 3);
        assert_eq!(cfg.source.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let tmp = write_config("[display\nline_numbers = ");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.source.is_none());
        assert!(cfg.parse_error.is_some());
        assert_eq!(cfg.rejected.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn parse_failure_is_logged_once_a_subscriber_exists() {
        let tmp = write_config("[scroll]\nmargin = \"wide\"\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || cfg.log_load_outcome());

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_parse_failed"));
        assert!(!log_output.contains("config_loaded"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let tmp = write_config("[display]\ntheme = \"dark\"\n[other]\nx = 1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert!(cfg.file.display.line_numbers);
    }

    #[test]
    fn margin_is_clamped_to_viewport() {
        let tmp = write_config("[scroll]\nmargin = 50\n");
        let mut cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        // 20 rows -> max = (20 - 2) / 2 = 9
        assert_eq!(cfg.apply_viewport(20), 9);
        assert_eq!(cfg.effective_scroll_margin, 9);
        assert_eq!(cfg.apply_viewport(3), 0);
        assert_eq!(cfg.apply_viewport(200), 50);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let tmp = write_config("[scroll]\nmargin = 8\n");
        let mut cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            cfg.apply_viewport(6);
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("scroll_margin_clamped"));
        assert_eq!(cfg.effective_scroll_margin, 2);
    }
}
