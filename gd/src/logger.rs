//! Colored logs to godot output
//!

use godot::global::godot_print_rich;

static LOGGER: GodotLogger = GodotLogger {};

/// Safe to call more than once, only the first call installs the logger
pub fn init(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct GodotLogger {}

impl log::Log for GodotLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            log::Level::Error => "red",
            log::Level::Warn => "yellow",
            log::Level::Info => "cyan",
            log::Level::Debug => "magenta",
            log::Level::Trace => "pink",
        };
        godot_print_rich!(
            "[color={color}]{}[/color] [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}
