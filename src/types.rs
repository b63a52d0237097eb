use crate::selector::SelectionStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionReport {
    /// File path, or "-" for stdin
    pub source: String,
    pub k: usize,
    pub input_len: usize,
    pub values: Vec<i64>,
    pub sorted: bool,
    pub stats: SelectionStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl SelectionReport {
    /// 1 when a requested reference check failed, otherwise 0.
    pub fn exit_code(&self) -> i32 {
        if self.verified == Some(false) {
            1
        } else {
            0
        }
    }
}
