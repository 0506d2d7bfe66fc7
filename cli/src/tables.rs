#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct Column<'a, TRow> {
    align: Align,
    title: Option<String>,
    get_content: &'a dyn Fn(&TRow) -> String,
    computed_width: usize,
}
impl<'a, TRow> Column<'a, TRow> {
    pub fn new(get_content: &'a dyn Fn(&TRow) -> String) -> Self {
        Self {
            align: Align::Left,
            title: None,
            computed_width: 0,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row)
    }

    fn title_width(&self) -> usize {
        self.title.as_ref().map_or(0, |t| t.chars().count())
    }
}

enum RowData {
    Separator,
    Cells(Vec<String>),
    Headers,
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

pub struct Table<'a, TRow> {
    columns: Vec<Column<'a, TRow>>,
    rows: Vec<RowData>,
    title: Option<String>,
    settings: Settings,
}
impl<'a, TRow> Table<'a, TRow> {
    pub fn new(columns: Vec<Column<'a, TRow>>, settings: &Settings) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            title: None,
            settings: settings.clone(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_rows<'b>(&mut self, rows: impl IntoIterator<Item = &'b TRow>)
    where
        TRow: 'b,
    {
        for row in rows {
            self.add_row(row);
        }
    }

    pub fn add_row(&mut self, row: &TRow) {
        self.rows.push(RowData::Cells(
            self.columns.iter().map(|col| col.content(row)).collect(),
        ));
    }

    /// Compute the size allocated for each column.  Every column gets the
    /// width of its largest cell, then the widest columns are shrunk until
    /// the table fits in max_width (separators not included), or every
    /// column is a single character wide.
    fn compute_widths(&mut self, max_width: usize) {
        for (colidx, col) in self.columns.iter_mut().enumerate() {
            col.computed_width = self
                .rows
                .iter()
                .map(|row| match row {
                    RowData::Separator => 0,
                    RowData::Headers => col.title_width(),
                    RowData::Cells(cells) => {
                        cells.get(colidx).map_or(0, |c| c.chars().count())
                    }
                })
                .max()
                .unwrap_or(0);
        }

        let mut total: usize =
            self.columns.iter().map(|c| c.computed_width).sum();
        while total > max_width {
            match self.columns.iter_mut().max_by_key(|c| c.computed_width) {
                Some(widest) if widest.computed_width > 1 => {
                    widest.computed_width -= 1;
                    total -= 1;
                }
                Some(_) | None => break,
            }
        }
    }

    fn push_colsep(&self, into: &mut String) {
        into.push_str(&self.settings.colsep);
    }

    pub fn to_string(&mut self, max_width: usize) -> String {
        let seps = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        self.compute_widths(max_width.saturating_sub(seps));
        let mut result = String::new();

        if let Some(title) = &self.title {
            let width = std::cmp::min(
                max_width,
                seps + self
                    .columns
                    .iter()
                    .map(|c| c.computed_width)
                    .sum::<usize>(),
            );
            push_align(&mut result, title, width, Align::Center);
            result.push('\n');
        }

        for row in &self.rows {
            for (colidx, col) in self.columns.iter().enumerate() {
                if colidx > 0 {
                    self.push_colsep(&mut result);
                }
                match row {
                    RowData::Separator => {
                        push_sep(&mut result, col.computed_width);
                    }
                    RowData::Headers => {
                        push_align(
                            &mut result,
                            truncate(
                                col.title.as_deref().unwrap_or(""),
                                col.computed_width,
                            ),
                            col.computed_width,
                            Align::Center,
                        );
                    }
                    RowData::Cells(cells) => {
                        push_align(
                            &mut result,
                            truncate(
                                cells.get(colidx).map_or("", String::as_str),
                                col.computed_width,
                            ),
                            col.computed_width,
                            col.align,
                        );
                    }
                }
            }
            result.push('\n');
        }

        result
    }
}

fn push_sep(into: &mut String, width: usize) {
    into.push_str(&format!("{:─^width$}", "", width = width));
}

fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Center => into.push_str(&format!("{:^width$}", value)),
        Align::Right => into.push_str(&format!("{:>width$}", value)),
    }
}

/// Truncate the string if necessary, keeping its first characters
fn truncate(val: &str, width: usize) -> &str {
    val.char_indices()
        .nth(width)
        .map_or_else(|| val, |(i, _)| val.get(..i).unwrap_or(val))
}

#[cfg(test)]
mod test {
    use crate::tables::{Align, Column, Settings, Table};

    #[test]
    fn test_table() {
        let name_image = |row: &(&str, usize)| row.0.to_string();
        let count_image = |row: &(&str, usize)| row.1.to_string();
        let columns = vec![
            Column::new(&name_image).with_title("Name"),
            Column::new(&count_image)
                .with_title("Count")
                .with_align(Align::Right),
        ];
        let mut table = Table::new(columns, &Settings::default())
            .with_col_headers();
        table.add_rows(&[("abcdefgh", 1), ("xyz", 1234)]);

        // We have plenty of space to display the columns
        assert_eq!(
            table.to_string(40),
            "  Name  │Count\n\
             ────────│─────\n\
             abcdefgh│    1\n\
             xyz     │ 1234\n"
        );

        // The widest column is truncated first
        assert_eq!(
            table.to_string(11),
            "Name │Count\n\
             ─────│─────\n\
             abcde│    1\n\
             xyz  │ 1234\n"
        );

        // until all columns need to be truncated
        assert_eq!(
            table.to_string(9),
            "Name│Coun\n\
             ────│────\n\
             abcd│   1\n\
             xyz │1234\n"
        );
    }

    #[test]
    fn test_title() {
        let image = |row: &u32| row.to_string();
        let mut table =
            Table::new(vec![Column::new(&image)], &Settings::default())
                .with_title("Numbers");
        table.add_row(&12345678);
        assert_eq!(table.to_string(80), "Numbers \n12345678\n");
    }
}
