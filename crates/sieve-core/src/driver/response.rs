use crate::stmt::Value;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, one `Vec` of column values per row
    Values(Vec<Vec<Value>>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    #[track_caller]
    pub fn into_values(self) -> Vec<Vec<Value>> {
        match self {
            Self::Values(values) => values,
            _ => panic!("expected rows; actual={self:#?}"),
        }
    }
}
