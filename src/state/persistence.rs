use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Food, IntakeEntry, MealDefinition};

/// Everything the tracker stores: meals, the food catalog and intake records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub meals: Vec<MealDefinition>,

    #[serde(default)]
    pub foods: Vec<Food>,

    #[serde(default)]
    pub intakes: Vec<IntakeEntry>,
}

/// Keep the last entry for each id, in order of first appearance.
fn dedup_by_id<T, F>(items: Vec<T>, id: F) -> Vec<T>
where
    F: Fn(&T) -> i64,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let key = id(&item);
        match index.get(&key).copied() {
            Some(i) => out[i] = item,
            None => {
                index.insert(key, out.len());
                out.push(item);
            }
        }
    }
    out
}

/// Load a journal from a JSON file.
///
/// Entries sharing an id are collapsed (last occurrence wins).
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<Journal> {
    let content = fs::read_to_string(path.as_ref())?;
    let journal: Journal = serde_json::from_str(&content)?;

    let journal = Journal {
        meals: dedup_by_id(journal.meals, |m| m.id),
        foods: dedup_by_id(journal.foods, |f| f.id),
        intakes: dedup_by_id(journal.intakes, |i| i.id),
    };

    debug!(
        path = %path.as_ref().display(),
        meals = journal.meals.len(),
        foods = journal.foods.len(),
        intakes = journal.intakes.len(),
        "journal loaded"
    );
    Ok(journal)
}

/// Load a journal, starting empty when the file does not exist yet.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Journal> {
    if !path.as_ref().exists() {
        info!(path = %path.as_ref().display(), "journal not found, starting empty");
        return Ok(Journal::default());
    }
    load_journal(path)
}

/// Save a journal to a JSON file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "journal saved");
    Ok(())
}
