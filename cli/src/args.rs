use clap::{arg, Arg, Command};
use crate::global_settings::GlobalSettings;

pub(crate) fn build_cli() -> Command {
    Command::new("range-layout")
        .version("0.1")
        .about("Lay out overlapping time ranges in columns")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("layout")
                .about("Compute the column of each range read from a file")
                .arg(arg!([FILE] "File to read ranges from, or - for stdin"))
                .arg(
                    arg!(-f --format [FORMAT] "Format of the input")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .args(crate::layout_view::Settings::cli()),
        )
        .subcommand(
            Command::new("demo")
                .about("Lay out a small sample evening of events")
                .args(crate::layout_view::Settings::cli()),
        )
        .subcommand(
            // Use    eval "$(range-layout completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
