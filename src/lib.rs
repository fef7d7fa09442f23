//! # ZoneKit
//!
//! Administrative client for the citizen registry and zone map service.
//!
//! ZoneKit is organized as a workspace:
//!
//! 1. **zonekit-core** - Geometry types, Web Mercator projection, GeoJSON codec
//! 2. **zonekit-client** - Typed HTTP client for the registry service
//! 3. **zonekit-editor** - Zone map editing core (registry, draw tool, sync)
//! 4. **zonekit-settings** - Configuration file handling
//! 5. **zonekit-ui** - View-state layer for the map and citizen surfaces
//! 6. **zonekit** - This crate: logging bootstrap and the headless admin binary

pub use zonekit_client as client;
pub use zonekit_settings as settings;

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
