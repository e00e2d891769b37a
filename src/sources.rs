use std::path::Path;

use log::warn;
use regex::Regex;
use serde::Deserialize;

use crate::error::HarvestError;
use crate::model::ESSENTIAL_FIELDS;

/// Where and how to scrape one listing page.
///
/// `pattern` carries exactly `fields.len()` capture groups; the equality is
/// checked once when the definition is loaded, so extraction can pair group
/// `i + 1` with field `i` without re-counting per match.
#[derive(Debug, Clone)]
pub struct PageDefinition {
    pub url: String,
    pub pattern: Regex,
    pub fields: Vec<String>,
}

/// Raw shape of one entry in the sources file.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    url: String,
    #[serde(default)]
    regex: String,
    fields: Option<Vec<String>>,
}

fn default_fields() -> Vec<String> {
    ESSENTIAL_FIELDS.iter().map(|f| f.to_string()).collect()
}

/// Load page definitions from a JSON array of `{url, regex, fields?}`
/// objects.
///
/// An unreadable or unparseable file is an error; individually invalid
/// entries are skipped with a warning and excluded from the returned list.
pub fn load_definitions(path: &Path) -> Result<Vec<PageDefinition>, HarvestError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarvestError::SourcesRead {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<RawDefinition> =
        serde_json::from_str(&text).map_err(|source| HarvestError::SourcesParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .filter_map(|entry| match validate(entry) {
            Ok(definition) => Some(definition),
            Err(reason) => {
                warn!("Skipping page definition: {reason}");
                None
            }
        })
        .collect())
}

fn validate(raw: RawDefinition) -> Result<PageDefinition, String> {
    if raw.url.is_empty() {
        return Err("empty url".to_string());
    }
    if raw.regex.is_empty() {
        return Err(format!("{}: empty regex", raw.url));
    }

    let fields = raw.fields.unwrap_or_else(default_fields);
    if fields.len() < ESSENTIAL_FIELDS.len() {
        return Err(format!(
            "{}: field list has fewer than {} entries",
            raw.url,
            ESSENTIAL_FIELDS.len()
        ));
    }
    // A definition that can never yield a storable record is rejected here
    // instead of producing empty batches every run.
    for essential in ESSENTIAL_FIELDS {
        if !fields.iter().any(|f| f == essential) {
            return Err(format!("{}: field list is missing '{essential}'", raw.url));
        }
    }

    let pattern = Regex::new(&raw.regex).map_err(|e| format!("{}: {e}", raw.url))?;
    // captures_len counts group 0, which never pairs with a field.
    let groups = pattern.captures_len() - 1;
    if groups != fields.len() {
        return Err(format!(
            "{}: pattern has {} capture groups but {} fields are declared",
            raw.url,
            groups,
            fields.len()
        ));
    }

    Ok(PageDefinition {
        url: raw.url,
        pattern,
        fields,
    })
}
