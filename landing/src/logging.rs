//! `tracing` output for the browser console.
//!
//! The fmt subscriber formats each event into a buffer; when the writer is
//! dropped the line goes to the console method matching the event level, so
//! errors and warnings keep their colour and filter in devtools.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Destination of one finished log line.
pub type Sink = fn(Level, &str);

/// Writes a single formatted event to the browser console.
fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        Level::DEBUG => web_sys::console::debug_1(&line),
        Level::TRACE => web_sys::console::log_1(&line),
    }
}

/// Buffers one event and flushes it to the sink on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

/// [`MakeWriter`] handing out one [`ConsoleWriter`] per event.
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self { sink: console_sink }
    }
}

impl ConsoleMakeWriter {
    /// Writer that sends lines to `sink` instead of the console.
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
            sink: self.sink,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
            sink: self.sink,
        }
    }
}

/// Level from the configuration, or the build default.
///
/// Debug builds log at `DEBUG` so per-frame failures are visible while
/// developing; release builds keep the console to warnings and errors.
pub fn level_filter(configured: Option<&str>) -> LevelFilter {
    configured
        .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
}

/// Install the console subscriber. Safe to call more than once.
pub fn init(configured: Option<&str>) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::default())
        .with_max_level(level_filter(configured))
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::io::Write;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn record(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn configured_level_wins() {
        assert_eq!(level_filter(Some("trace")), LevelFilter::TRACE);
        assert_eq!(level_filter(Some(" error ")), LevelFilter::ERROR);
        assert_eq!(level_filter(Some("off")), LevelFilter::OFF);
    }

    #[test]
    fn unknown_level_falls_back_to_build_default() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };
        assert_eq!(level_filter(Some("chatty")), expected);
        assert_eq!(level_filter(None), expected);
    }

    #[test]
    fn writer_emits_one_trimmed_line_per_event() {
        let make = ConsoleMakeWriter::with_sink(record);
        {
            let mut writer = make.make_writer();
            writer.level = Level::WARN;
            write!(writer, " WARN cube frame failed").unwrap();
            writeln!(writer, " frame=3").unwrap();
        }
        {
            let _empty = make.make_writer();
        }
        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(
            lines,
            vec![(Level::WARN, " WARN cube frame failed frame=3".to_string())]
        );
    }
}
