mod args;
mod global_settings;
mod layout_view;
mod tables;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::layout_view::layout_view;
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::ArgMatches;
use layout_lib::{
    importers::{read_file, read_ranges, Format},
    layouts::Layout,
    samples,
    times::Range,
};
use std::path::Path;

fn show_layout(
    ranges: Vec<Range<NaiveDateTime>>,
    args: &ArgMatches,
) -> Result<()> {
    let globals = GlobalSettings::new(args)?;
    let settings = crate::layout_view::Settings::new(args, &globals)?;
    let layout = Layout::new(ranges);
    println!("{}", layout_view(&layout, &settings)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.clone().generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some(("layout", sub)) => {
            let format = match sub.get_one::<String>("format") {
                None => Format::default(),
                Some(f) => f.parse::<Format>()?,
            };
            let ranges = match sub.get_one::<String>("FILE").map(String::as_str)
            {
                None | Some("-") => {
                    let ranges = read_ranges(std::io::stdin().lock(), format)?;
                    log::info!("read {} ranges from stdin", ranges.len());
                    ranges
                }
                Some(path) => read_file(Path::new(path), format)?,
            };
            show_layout(ranges, sub)?;
        }
        Some(("demo", sub)) => {
            show_layout(samples::canonical(), sub)?;
        }
        Some((cmd, _)) => {
            anyhow::bail!("Unknown command {}", cmd);
        }
        None => {}
    }

    Ok(())
}
