/// One `<td>` of a scraped row, keyed by its class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub class: String,
    pub text: String,
}

/// One scraped table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Alternating row marker ("odd" / "even")
    pub marker: String,
    pub cells: Vec<Cell>,
}

impl RawRow {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            cells: Vec::new(),
        }
    }

    pub fn with_cell(mut self, class: &str, text: &str) -> Self {
        self.cells.push(Cell {
            class: class.to_string(),
            text: text.to_string(),
        });
        self
    }

    pub fn cells_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> {
        self.cells
            .iter()
            .filter(move |c| c.class == class)
            .map(|c| c.text.as_str())
    }
}

/// Consecutive rows sharing a marker: one sense of the word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup {
    pub marker: String,
    pub rows: Vec<RawRow>,
}

impl EntryGroup {
    pub fn cells_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> {
        self.rows.iter().flat_map(move |r| r.cells_of(class))
    }
}

/// Split rows into senses.
///
/// The site alternates row classes between senses and repeats the class for
/// extra example rows of the same sense:
///
/// ```text
/// odd   odd  | even | odd  odd  odd | even  even
/// sense 1    | 2    | 3             | 4
/// ```
pub fn group_rows(rows: impl IntoIterator<Item = RawRow>) -> Vec<EntryGroup> {
    let mut groups: Vec<EntryGroup> = Vec::new();

    for row in rows {
        match groups.last_mut() {
            Some(group) if group.marker == row.marker => group.rows.push(row),
            _ => groups.push(EntryGroup {
                marker: row.marker.clone(),
                rows: vec![row],
            }),
        }
    }

    groups
}
