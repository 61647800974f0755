//! Plain ASCII table rendering for analysis results.

/// Rows of cells under a header, with optional divider lines after chosen rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    dividers: Vec<bool>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            dividers: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        self.dividers.push(false);
    }

    /// Draw a rule under the most recently added row.
    pub fn divide(&mut self) {
        if let Some(last) = self.dividers.last_mut() {
            *last = true;
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = format!(
            "+{}+",
            widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+")
        );
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!(" {c:<w$} "))
                .collect();
            format!("|{}|", padded.join("|"))
        };

        let mut out = vec![rule.clone(), line(&self.headers), rule.clone()];
        for (row, &divide) in self.rows.iter().zip(&self.dividers) {
            out.push(line(row));
            if divide {
                out.push(rule.clone());
            }
        }
        if !self.rows.is_empty() && self.dividers.last() != Some(&true) {
            out.push(rule);
        }
        out.join("\n")
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
