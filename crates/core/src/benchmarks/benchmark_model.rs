use serde::{Deserialize, Serialize};

use crate::performance::PerformancePoint;

/// One benchmark overlay series tracked by the manager.
///
/// `ticker` is the unique key: a plain symbol (`SPY`) or a composite
/// symphony reference (`symphony:<id>`). `data` is empty while the fetch is
/// in flight, so the UI can render the pending label and color immediately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkEntry {
    pub ticker: String,
    pub label: String,
    pub color: String,
    pub data: Vec<PerformancePoint>,
}

/// Wire shape of a plain benchmark history fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkHistory {
    pub data: Vec<PerformancePoint>,
}

/// Wire shape of a composite symphony benchmark fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymphonyBenchmark {
    pub name: Option<String>,
    pub data: Vec<PerformancePoint>,
}
