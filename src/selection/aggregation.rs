use std::collections::HashMap;

use crate::types::identifiers::RecipeId;
use crate::types::recipe::RecipeRecord;

/// Collapse records sharing an id.
///
/// The surviving entry sits where its id was first seen but carries the
/// fields of the last record with that id.
pub fn merge_by_id(records: Vec<RecipeRecord>) -> Vec<RecipeRecord> {
    let mut position: HashMap<RecipeId, usize> = HashMap::with_capacity(records.len());
    let mut merged: Vec<RecipeRecord> = Vec::with_capacity(records.len());

    for record in records {
        match position.get(&record.id) {
            Some(&index) => merged[index] = record,
            None => {
                position.insert(record.id.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}
