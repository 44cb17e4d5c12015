//! Environment source: STORYTIME_<SECTION>__<KEY>, e.g. STORYTIME_PROVIDER__KIND=gemini

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

fn environment() -> Environment {
    Environment::with_prefix("STORYTIME")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Add the process environment to builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(environment())
}

/// Add an explicit variable map instead of the process environment.
#[cfg(test)]
pub fn add_map_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: config::Map<String, String>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(environment().source(Some(vars)))
}
