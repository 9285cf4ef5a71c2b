use windsynth::config::WindConfig;
use windsynth::runtime::native;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional JSON preset path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => WindConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load config '{}': {}. Using defaults.", path, e);
            WindConfig::default()
        }),
        None => WindConfig::default(),
    };

    if let Err(e) = native::start(config) {
        log::error!("Audio backend failed: {}", e);
        std::process::exit(1);
    }
}
