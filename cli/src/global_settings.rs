use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use clap::{arg, Arg, ArgMatches};

pub struct GlobalSettings {
    pub table: crate::tables::Settings,

    // How to display timestamps, as a chrono format string
    pub date_format: String,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--"date-format" [FORMAT] "How to display timestamps")
                .default_value("%Y-%m-%d %H:%M")
                .global(true),
            arg!(--colsep [SEP] "Separator between table columns")
                .default_value("│")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let date_format = args
            .get_one::<String>("date-format")
            .cloned()
            .unwrap_or_else(|| "%Y-%m-%d %H:%M".to_string());

        // chrono only reports invalid formats when displaying, and
        // to_string() would then panic.
        if StrftimeItems::new(&date_format).any(|i| i == Item::Error) {
            bail!("Invalid date format {}", date_format);
        }

        Ok(GlobalSettings {
            date_format,
            table: crate::tables::Settings {
                colsep: args
                    .get_one::<String>("colsep")
                    .cloned()
                    .unwrap_or_else(|| "│".to_string()),
            },
        })
    }
}
