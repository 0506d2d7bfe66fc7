use crate::global_settings::GlobalSettings;
use crate::tables::{Align, Column, Table};
use anyhow::{bail, Result};
use chrono::NaiveDateTime;
use clap::{arg, Arg, ArgMatches};
use console::Term;
use itertools::Itertools;
use layout_lib::layouts::Layout;
use layout_lib::times::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    // One row per range, with its column
    Table,

    // All ranges, then all columns
    List,

    // The columns, as a JSON array
    Json,
}

pub struct Settings {
    pub output: Output,
    pub date_format: String,
    pub table: crate::tables::Settings,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [arg!(-o --output [OUTPUT] "How to display the columns")
            .value_parser(["table", "list", "json"])
            .default_value("table")]
    }

    pub fn new(args: &ArgMatches, global: &GlobalSettings) -> Result<Self> {
        let output = match args.get_one::<String>("output").map(String::as_str)
        {
            None | Some("table") => Output::Table,
            Some("list") => Output::List,
            Some("json") => Output::Json,
            Some(o) => bail!("Unknown output {}", o),
        };
        Ok(Settings {
            output,
            date_format: global.date_format.clone(),
            table: global.table.clone(),
        })
    }
}

fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map_or(80, |(_, cols)| cols as usize)
}

pub fn layout_view(
    layout: &Layout<NaiveDateTime>,
    settings: &Settings,
) -> Result<String> {
    layout_view_with_width(layout, settings, terminal_width())
}

fn layout_view_with_width(
    layout: &Layout<NaiveDateTime>,
    settings: &Settings,
    width: usize,
) -> Result<String> {
    type Row<'a> = (&'a Range<NaiveDateTime>, usize);
    let fmt = settings.date_format.as_str();

    Ok(match settings.output {
        Output::Json => serde_json::to_string(layout.columns())?,
        Output::List => layout
            .ranges()
            .iter()
            .map(|r| format!("{}–{}", r.start.format(fmt), r.end.format(fmt)))
            .chain(layout.columns().iter().map(usize::to_string))
            .join("\n"),
        Output::Table => {
            let start_image = |row: &Row| row.0.start.format(fmt).to_string();
            let end_image = |row: &Row| row.0.end.format(fmt).to_string();
            let column_image = |row: &Row| row.1.to_string();
            let columns = vec![
                Column::new(&start_image).with_title("Start"),
                Column::new(&end_image).with_title("End"),
                Column::new(&column_image)
                    .with_title("Column")
                    .with_align(Align::Right),
            ];
            let mut table = Table::new(columns, &settings.table)
                .with_title(&format!(
                    "{} ranges in {} columns",
                    layout.ranges().len(),
                    layout.column_count(),
                ))
                .with_col_headers();
            let rows: Vec<Row> = layout.iter().collect();
            table.add_rows(&rows);
            table.to_string(width)
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use layout_lib::samples;

    fn settings(output: Output) -> Settings {
        Settings {
            output,
            date_format: "%H:%M".to_string(),
            table: crate::tables::Settings {
                colsep: "|".to_string(),
            },
        }
    }

    #[test]
    fn test_json() {
        let layout = Layout::new(samples::canonical());
        assert_eq!(
            layout_view_with_width(&layout, &settings(Output::Json), 80)
                .unwrap(),
            "[0,1,2,0,1,0]",
        );

        let empty = Layout::new(Vec::new());
        assert_eq!(
            layout_view_with_width(&empty, &settings(Output::Json), 80)
                .unwrap(),
            "[]",
        );
    }

    #[test]
    fn test_list() {
        let layout = Layout::new(samples::canonical());
        assert_eq!(
            layout_view_with_width(&layout, &settings(Output::List), 80)
                .unwrap(),
            "20:00–22:00\n\
             20:30–22:30\n\
             21:59–00:14\n\
             22:00–00:00\n\
             23:30–00:00\n\
             00:05–00:07\n\
             0\n1\n2\n0\n1\n0",
        );
    }

    #[test]
    fn test_table() {
        let layout = Layout::new(samples::canonical());
        assert_eq!(
            layout_view_with_width(&layout, &settings(Output::Table), 80)
                .unwrap(),
            "6 ranges in 3 columns\n\
             Start| End |Column\n\
             -----|-----|------\n\
             20:00|22:00|     0\n\
             20:30|22:30|     1\n\
             21:59|00:14|     2\n\
             22:00|00:00|     0\n\
             23:30|00:00|     1\n\
             00:05|00:07|     0\n"
                .replace('-', "─"),
        );
    }
}
