use std::collections::HashMap;

use crate::model::{Collection, Record};

/// Fold a freshly scraped batch into the collection.
///
/// A record whose server is already present replaces the old entry
/// wholesale, at its original position; unknown servers append in batch
/// order. Entries the batch does not touch never move.
pub fn merge(collection: &mut Collection, batch: Vec<Record>) {
    if collection.configs.is_empty() {
        collection.configs = batch;
        return;
    }

    let mut index: HashMap<String, usize> = collection
        .configs
        .iter()
        .enumerate()
        .map(|(position, record)| (record.server.clone(), position))
        .collect();

    for record in batch {
        match index.get(record.key()) {
            Some(&position) => collection.configs[position] = record,
            None => {
                // Index the appended entry as well: a batch that repeats a
                // server unknown to the collection must still end up with
                // one entry for it, holding the last content seen.
                index.insert(record.server.clone(), collection.configs.len());
                collection.configs.push(record);
            }
        }
    }
}
