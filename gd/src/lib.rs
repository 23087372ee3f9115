use godot::prelude::*;

mod gd;
mod logger;
mod persist;

struct CoasterExtension;

#[gdextension]
unsafe impl ExtensionLibrary for CoasterExtension {
    fn on_level_init(level: InitLevel) {
        match level {
            InitLevel::Scene => {
                logger::init(log::LevelFilter::Debug);
                log::info!("coaster extension loaded");
            }
            _ => {}
        }
    }
}
