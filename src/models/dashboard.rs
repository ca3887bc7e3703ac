use serde::{Deserialize, Serialize};

use crate::es::api::TermsAggregation;
use crate::utils::format_number;
use super::{aggregate_kinds, resolve_revisions, IndexRevision, KindCount};

/// Data pro hlavní stránku, skládají se znovu pro každý request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub indices: Vec<IndexRevision>,
    pub kinds: Vec<KindCount>,
}

impl DashboardView {
    pub fn build<I, S>(index_names: I, prefix: &str, kinds: Option<&TermsAggregation>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            indices: resolve_revisions(index_names, prefix),
            kinds: aggregate_kinds(kinds),
        }
    }

    /// Nejnovější revize (cíl pro další zápis)
    pub fn latest(&self) -> Option<&IndexRevision> {
        self.indices.first()
    }

    pub fn total_documents(&self) -> u64 {
        self.kinds.iter().fold(0u64, |acc, k| acc.saturating_add(k.count))
    }

    pub fn total_documents_formatted(&self) -> String {
        format_number(self.total_documents())
    }
}
