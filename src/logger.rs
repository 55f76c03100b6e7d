use ansi_term::{ANSIString, Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger {
    colors_enabled: bool,
}

impl Logger {
    fn prefix(&self, level: Level) -> ANSIString<'static> {
        let style = if self.colors_enabled {
            let color = match level {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Cyan,
                Level::Debug => Color::Purple,
                Level::Trace => Color::Green,
            };
            color.bold()
        } else {
            Style::new()
        };
        style.paint(format!("[{}]", level))
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("reslog")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record.target().trim_start_matches("reslog::");
        eprintln!("{} {}: {}", self.prefix(record.level()), module, record.args());
    }

    fn flush(&self) {}
}

/// Install the logger. The level comes from `RESLOG_LOG` (`off`, `error`,
/// ..., `trace`) and defaults to `warn`.
pub fn init_from_env(colors_enabled: bool) {
    let max_level = std::env::var("RESLOG_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    log::set_boxed_logger(Box::new(Logger { colors_enabled })).expect("couldn't set up logger");
    log::set_max_level(max_level);
}
