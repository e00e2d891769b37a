use log::debug;
use regex::Captures;
use serde_json::{Map, Value};

use crate::model::{is_essential, Record};
use crate::sources::PageDefinition;

/// Extract every valid record from one page body.
///
/// Matches are scanned left to right; capture group `i + 1` pairs with
/// field `i` of the definition's field list. A match that leaves any
/// essential field empty, or that is missing a group altogether, produces
/// no record at all.
pub fn extract_records(text: &str, page: &PageDefinition) -> Vec<Record> {
    let mut records = Vec::new();

    for caps in page.pattern.captures_iter(text) {
        if let Some(record) = record_from_match(&caps, &page.fields) {
            records.push(record);
        }
    }

    debug!("Extracted {} records from {}", records.len(), page.url);
    records
}

fn record_from_match(caps: &Captures<'_>, fields: &[String]) -> Option<Record> {
    let mut server = None;
    let mut server_port = None;
    let mut password = None;
    let mut method = None;
    let mut extra = Map::new();

    for (i, field) in fields.iter().enumerate() {
        // A group beyond the pattern's arity, or one that did not take
        // part in the match, makes the record partial.
        let value = caps.get(i + 1)?.as_str();
        if value.is_empty() && is_essential(field) {
            return None;
        }
        match field.as_str() {
            "server" => server = Some(value.to_string()),
            "server_port" => server_port = Some(value.parse::<u16>().ok()?),
            "password" => password = Some(value.to_string()),
            "method" => method = Some(value.to_ascii_lowercase()),
            _ => {
                extra.insert(field.to_string(), Value::String(value.to_string()));
            }
        }
    }

    Some(Record {
        server: server?,
        server_port: server_port?,
        password: password?,
        method: method?,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    // The ishadowsocks account-block layout.
    const H4_PATTERN: &str = r"<h4>[^<:]+:([^<]+)</h4>\s+<h4>[^<:]+:([0-9]+)</h4>\s+<h4>[^<:]+:([^<]*)</h4>\s+<h4>[^<:]+:([^<]*)</h4>";

    fn page(pattern: &str, fields: &[&str]) -> PageDefinition {
        PageDefinition {
            url: "http://proxies.example/free".to_string(),
            pattern: Regex::new(pattern).unwrap(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn h4_page() -> PageDefinition {
        page(H4_PATTERN, &["server", "server_port", "password", "method"])
    }

    fn h4_block(server: &str, port: &str, password: &str, method: &str) -> String {
        format!(
            "<h4>Server:{server}</h4>\n  <h4>Port:{port}</h4>\n  <h4>Password:{password}</h4>\n  <h4>Method:{method}</h4>"
        )
    }

    #[test]
    fn extracts_one_record_per_account_block() {
        let html = h4_block("1.2.3.4", "8388", "secret", "AES-256-CFB");

        let records = extract_records(&html, &h4_page());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.server, "1.2.3.4");
        assert_eq!(record.server_port, 8388);
        assert_eq!(record.password, "secret");
        assert_eq!(record.method, "aes-256-cfb");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn empty_password_drops_the_whole_record() {
        let html = h4_block("1.2.3.4", "8388", "", "aes-256-cfb");

        assert!(extract_records(&html, &h4_page()).is_empty());
    }

    #[test]
    fn empty_method_drops_the_whole_record() {
        let html = h4_block("1.2.3.4", "8388", "secret", "");

        assert!(extract_records(&html, &h4_page()).is_empty());
    }

    #[test]
    fn multiple_blocks_extract_in_document_order() {
        let html = format!(
            "{}\n{}\n{}",
            h4_block("1.1.1.1", "8388", "a", "aes-128-cfb"),
            h4_block("2.2.2.2", "8389", "", "aes-128-cfb"),
            h4_block("3.3.3.3", "8390", "c", "RC4-MD5"),
        );

        let records = extract_records(&html, &h4_page());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].server, "1.1.1.1");
        assert_eq!(records[1].server, "3.3.3.3");
        assert_eq!(records[1].method, "rc4-md5");
    }

    #[test]
    fn zero_matches_yield_an_empty_batch() {
        assert!(extract_records("<p>nothing here</p>", &h4_page()).is_empty());
    }

    #[test]
    fn field_list_longer_than_group_count_yields_no_records() {
        // Bypasses load-time validation on purpose: a three-group pattern
        // driven with four fields must drop every match, not panic.
        let definition = page(
            r"(\S+) (\d+) (\S+)",
            &["server", "server_port", "password", "method"],
        );

        assert!(extract_records("1.2.3.4 8388 secret", &definition).is_empty());
    }

    #[test]
    fn non_numeric_port_drops_the_record() {
        let definition = page(
            r"(\S+) (\S+) (\S+) (\S+)",
            &["server", "server_port", "password", "method"],
        );

        assert!(extract_records("1.2.3.4 oops secret aes", &definition).is_empty());
        assert!(extract_records("1.2.3.4 99999999 secret aes", &definition).is_empty());
    }

    #[test]
    fn extra_fields_are_kept_in_list_order_and_may_be_empty() {
        let definition = page(
            r"(\S+) (\d+) (\S+) (\S+) (\S+) ?(.*)",
            &["server", "server_port", "password", "method", "region", "remark"],
        );

        let records = extract_records("1.2.3.4 8388 secret AES hk ", &definition);

        assert_eq!(records.len(), 1);
        let keys: Vec<&String> = records[0].extra.keys().collect();
        assert_eq!(keys, ["region", "remark"]);
        assert_eq!(records[0].extra["region"], "hk");
        assert_eq!(records[0].extra["remark"], "");
    }

    #[test]
    fn field_order_in_the_list_drives_the_pairing() {
        // Port first on the page, server second.
        let definition = page(
            r"(\d+)/(\S+)/(\S+)/(\S+)",
            &["server_port", "server", "password", "method"],
        );

        let records = extract_records("8388/1.2.3.4/secret/AES", &definition);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].server, "1.2.3.4");
        assert_eq!(records[0].server_port, 8388);
    }
}
