use serde::{Deserialize, Serialize};
use std::fmt;

use crate::es::api::TermsAggregation;
use crate::utils::format_number;

/// Klíč bucketu z terms agregace. Elasticsearch vrací podle typu pole
/// string, číslo nebo boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketKey {
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Boolean(value) => write!(f, "{}", value),
            BucketKey::Integer(value) => write!(f, "{}", value),
            BucketKey::Unsigned(value) => write!(f, "{}", value),
            BucketKey::Float(value) => write!(f, "{}", value),
            BucketKey::Text(value) => f.write_str(value),
        }
    }
}

/// Počet dokumentů jednoho druhu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: String,
    pub count: u64,
}

impl KindCount {
    pub fn count_formatted(&self) -> String {
        format_number(self.count)
    }
}

/// Převede buckety agregace na tabulku druhů ve stejném pořadí.
/// Chybějící agregace znamená prázdnou tabulku.
pub fn aggregate_kinds(aggregation: Option<&TermsAggregation>) -> Vec<KindCount> {
    let Some(aggregation) = aggregation else {
        return Vec::new();
    };

    aggregation
        .buckets
        .iter()
        .map(|bucket| KindCount {
            kind: bucket.key.to_string(),
            count: bucket.doc_count,
        })
        .collect()
}
