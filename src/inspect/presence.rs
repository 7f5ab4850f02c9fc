use crate::common::schema::ColumnInfo;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPresence {
    pub found: bool,
    pub existing: Vec<String>,
}

impl ColumnPresence {
    /// Exact, case-sensitive match of `target` against every column name.
    pub fn scan(columns: &[ColumnInfo], target: &str) -> Self {
        let mut found = false;
        let mut existing = Vec::with_capacity(columns.len());

        for column in columns {
            if column.name == target {
                found = true;
            }
            existing.push(column.name.clone());
        }

        ColumnPresence { found, existing }
    }
}
