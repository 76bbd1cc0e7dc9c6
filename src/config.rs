//! Mechanism for loading and sharing the analysis configuration

use crate::{numeric::Float, pairing::Z_MASS};

use eyre::{ensure, eyre, Report, Result, WrapErr};

use std::{fs, path::Path, str::FromStr};

/// Analysis configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Reference mass for Z⁰ boson candidates (GeV)
    pub z_mass: Float,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        let file_name = file_name.as_ref();
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Failed to read {}", file_name.display()))?;
        Self::parse(&config_str)
    }

    /// Parse the configuration from the contents of a configuration file
    pub fn parse(config_str: &str) -> Result<Self> {
        // We will iterate over the configuration items. These should be the
        // first non-whitespace chunk of text on each line, the rest of the line
        // being free-form commentary. We will ignore blank lines.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            z_mass: next_item("z_mass")?.parse::<Float>()?,
        };

        // Leftovers are most likely a sign of an outdated configuration file
        if let Some(extra) = config_iter.next() {
            return Err(eyre!("Unexpected configuration item {:?}", extra));
        }

        // The pair finder measures distances to this mass
        ensure!(
            config.z_mass.is_finite() && config.z_mass > 0.,
            "The reference Z mass must be a positive number of GeV, got {}",
            config.z_mass
        );

        config.print();
        Ok(config)
    }

    /// Log the configuration
    pub fn print(&self) {
        log::info!("Z mass         : {} GeV", self.z_mass);
    }
}

impl Default for Configuration {
    /// Use the nominal Z⁰ boson mass
    fn default() -> Self {
        Self { z_mass: Z_MASS }
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: ::std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .map_err(Report::new)
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }
}
