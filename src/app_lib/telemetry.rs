//! Routes `tracing` output to the browser console.

use cohort_projects::{AppError, config::AppConfig};
use std::io::{self, Write};
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, fmt::MakeWriter, layer::SubscriberExt};
use wasm_bindgen::JsValue;

/// Installs the global subscriber. The filter comes from `AppConfig::log_filter`;
/// unparsable directives are skipped and `info` applies when nothing matches.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<(), AppError> {
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter);

    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(&config.log_filter);

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| AppError::Config(format!("Failed to install logger: {err}")))
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

/// Buffers one formatted event and emits it as a single console line on drop.
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}
