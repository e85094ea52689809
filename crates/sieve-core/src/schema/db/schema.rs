use super::{Column, ColumnId, Table, TableId};

/// Physical tables known to the catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    /// # Panics
    ///
    /// Panics if the column ID does not exist in the schema.
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    /// # Panics
    ///
    /// Panics if the table ID does not exist in the schema.
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
