//! Console logging setup.
//!
//! `RUST_LOG` wins when set. Otherwise the library and the app log at debug
//! level in debug builds and info level in release builds, and other crates
//! are silenced.

use std::io::Write;

use env_logger::fmt::Color;
use log::{Level, LevelFilter};

pub fn setup_logger() {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter(None, LevelFilter::Off);
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        builder.filter(Some("label_validator"), level);
    }

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        match record.level() {
            Level::Error => level_style.set_color(Color::Red).set_bold(true),
            Level::Warn => level_style.set_color(Color::Yellow).set_bold(true),
            Level::Info => level_style.set_color(Color::Green).set_bold(true),
            Level::Debug => level_style.set_color(Color::Blue).set_bold(true),
            Level::Trace => level_style.set_color(Color::White),
        };
        writeln!(
            buf,
            "{} {}",
            level_style.value(format!("{:<5}", record.level())),
            record.args()
        )
    });

    // A second init (tests, manual check binaries) keeps the first logger.
    let _ = builder.try_init();
}
