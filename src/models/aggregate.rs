use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Frequency tables returned by `/data`. Entries keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    pub skills: Vec<NameCount>,
    pub experience: Vec<NameCount>,
    pub schedule: Vec<NameCount>,
}
