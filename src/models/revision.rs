use serde::{Deserialize, Serialize};

/// Jedna revize znalostní báze (`kb-rev3` -> rev 3)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRevision {
    pub index: String,
    pub rev: i64,
}

impl IndexRevision {
    /// Parsuje název indexu `<prefix><číslo>`; ostatní názvy vrací `None`
    pub fn parse(index: &str, prefix: &str) -> Option<Self> {
        let suffix = index.strip_prefix(prefix)?;
        let rev = suffix.parse::<i64>().ok()?;

        Some(Self {
            index: index.to_string(),
            rev,
        })
    }
}

/// Vybere revize z názvů indexů, seřazené od nejnovější.
///
/// Názvy bez prefixu nebo s nečíselným suffixem se tiše přeskočí. Pokud
/// nezbude nic, vrátí jedinou syntetickou revizi `<prefix>1`, takže výsledek
/// není nikdy prázdný.
pub fn resolve_revisions<I, S>(index_names: I, prefix: &str) -> Vec<IndexRevision>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut revisions: Vec<IndexRevision> = index_names
        .into_iter()
        .filter_map(|name| IndexRevision::parse(name.as_ref(), prefix))
        .collect();

    // sort_by je stabilní, shodné revize drží pořadí ze vstupu
    revisions.sort_by(|a, b| b.rev.cmp(&a.rev));

    if revisions.is_empty() {
        revisions.push(IndexRevision {
            index: format!("{}1", prefix),
            rev: 1,
        });
    }

    revisions
}
