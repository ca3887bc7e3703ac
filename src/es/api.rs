use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::EsClient;
use crate::config::{KIND_FIELD, KIND_TERMS_SIZE};
use crate::models::BucketKey;

const KINDS_AGGREGATION: &str = "kinds";

/// Řádek z `_cat/indices` (ostatní sloupce nás nezajímají)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatIndex {
    pub index: String,
}

/// Výsledek terms agregace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermsAggregation {
    #[serde(default)]
    pub buckets: Vec<TermsBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsBucket {
    pub key: BucketKey,
    pub doc_count: u64,
}

#[derive(Debug, Deserialize)]
struct KindsSearchResponse {
    #[serde(default)]
    aggregations: Option<KindsAggregations>,
}

#[derive(Debug, Deserialize)]
struct KindsAggregations {
    #[serde(default)]
    kinds: Option<TermsAggregation>,
}

/// Tělo dotazu: žádné hity, jen agregace podle `kind`
pub fn kind_aggregation_query() -> Value {
    json!({
        "size": 0,
        "aggs": {
            KINDS_AGGREGATION: {
                "terms": {
                    "field": KIND_FIELD,
                    "size": KIND_TERMS_SIZE
                }
            }
        }
    })
}

impl EsClient {
    /// Získá seznam indexů (cat API)
    pub async fn cat_indices(&self) -> Result<Vec<CatIndex>> {
        self.get("/_cat/indices?format=json&h=index").await
    }

    /// Spočítá dokumenty podle `kind` nad daným patternem.
    ///
    /// Vrací `None`, pokud odpověď agregaci neobsahuje.
    pub async fn kind_aggregation(&self, pattern: &str) -> Result<Option<TermsAggregation>> {
        let path = format!("/{}/_search", pattern);
        let response: KindsSearchResponse = self.post(&path, kind_aggregation_query()).await?;

        Ok(response.aggregations.and_then(|aggs| aggs.kinds))
    }
}
