use crossterm::style::{style, Color};
use env_logger::fmt::Formatter;

use std::io::Write;

/// Initialises the global logger, filtered by `RUST_LOG` (default `info`)
///
/// Calling this more than once is harmless.
pub fn logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .format(logging_format)
        .try_init();
}

fn logging_format(buf: &mut Formatter, record: &log::Record) -> std::io::Result<()> {
    let color = match record.level() {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        _ => Color::DarkGrey,
    };

    let line = format!(
        "[{:5} {}:{}] {}",
        record.level(),
        record.file().unwrap_or_default(),
        record.line().unwrap_or_default(),
        record.args()
    );
    writeln!(buf, "{}", style(line).with(color))
}
