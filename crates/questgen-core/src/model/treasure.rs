use serde::{Deserialize, Serialize};

/// A kind of treasure from the reference table, with its point value
///
/// The value is stored in the `sql` column of the `treasure` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureKind {
    /// Treasure name, the key of the reference row
    pub name: String,

    /// Worth of one unit of this treasure
    pub value: i64,
}

impl TreasureKind {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
