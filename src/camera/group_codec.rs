//! Text codec for the device's configuration groups.
//!
//! A group read returns a body such as:
//!
//! ```text
//! [EVENT]
//! event_trigger=1
//! event_interval=30
//! ```
//!
//! Writes go out as query parameters on `set_group.cgi`, the group name first.

use crate::errors::{Result, SercommError};
use log::debug;
use std::collections::BTreeMap;

/// Key/value parameters of one group. Values are untyped strings.
pub type GroupParams = BTreeMap<String, String>;

/// Parses a group listing (`[NAME]` per line) in the order the device reports it.
/// Blank lines are ignored.
pub fn parse_group_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = line.strip_prefix('[').unwrap_or(line);
            line.strip_suffix(']').unwrap_or(line).to_string()
        })
        .collect()
}

/// Parses a group body into its parameters.
///
/// Section headers (lines starting with `[`) and blank lines are skipped.
/// Every other line must contain `=`; the key is everything before the first
/// one. A later duplicate key overwrites an earlier one.
pub fn parse_group(body: &str) -> Result<GroupParams> {
    let mut params = GroupParams::new();
    for line in body.lines() {
        if line.is_empty() || line.starts_with('[') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| SercommError::MalformedLine(line.to_string()))?;
        params.insert(key.to_string(), value.to_string());
    }
    debug!("Parsed {} group parameter(s).", params.len());
    Ok(params)
}

/// Builds the query for a `set_group.cgi` request: `group=<name>` followed by
/// the fields in the order given.
pub fn encode_set_group_query<K, V>(group: &str, fields: &[(K, V)]) -> Result<Vec<(String, String)>>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if group.trim().is_empty() {
        return Err(SercommError::InvalidGroupName(group.to_string()));
    }
    let mut query = Vec::with_capacity(fields.len() + 1);
    query.push(("group".to_string(), group.to_string()));
    for (key, value) in fields {
        let key = key.as_ref();
        if key == "group" {
            return Err(SercommError::invalid_value("group", value.as_ref()));
        }
        query.push((key.to_string(), value.as_ref().to_string()));
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_list_keeps_server_order() {
        assert_eq!(parse_group_list("[GROUP_A]\n[GROUP_B]\n"), vec!["GROUP_A", "GROUP_B"]);
        assert_eq!(
            parse_group_list("[ZETA]\r\n\r\n[ALPHA]\r\n"),
            vec!["ZETA".to_string(), "ALPHA".to_string()]
        );
        assert!(parse_group_list("").is_empty());
    }

    #[test]
    fn group_body_skips_header() {
        let params = parse_group("[EVENT]\nevent_trigger=1\nevent_interval=30\n").unwrap();
        let expected: GroupParams = [("event_trigger", "1"), ("event_interval", "30")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let params = parse_group("http_url=http://x/y?a=1&b=2\nhttp_user=\n").unwrap();
        assert_eq!(params["http_url"], "http://x/y?a=1&b=2");
        assert_eq!(params["http_user"], "");
    }

    #[test]
    fn last_duplicate_wins() {
        let params = parse_group("a=1\na=2\n").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["a"], "2");
    }

    #[test]
    fn line_without_separator_is_an_error() {
        match parse_group("[EVENT]\nevent_trigger=1\ngarbage\n") {
            Err(SercommError::MalformedLine(line)) => assert_eq!(line, "garbage"),
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn set_query_puts_group_first() {
        let query = encode_set_group_query("EVENT", &[("event_trigger", "1"), ("event_interval", "30")]).unwrap();
        assert_eq!(
            query,
            vec![
                ("group".to_string(), "EVENT".to_string()),
                ("event_trigger".to_string(), "1".to_string()),
                ("event_interval".to_string(), "30".to_string()),
            ]
        );
    }

    #[test]
    fn set_query_rejects_empty_group_and_group_field() {
        let no_fields: [(&str, &str); 0] = [];
        assert!(matches!(
            encode_set_group_query(" ", &no_fields),
            Err(SercommError::InvalidGroupName(_))
        ));
        assert!(matches!(
            encode_set_group_query("EVENT", &[("group", "OTHER")]),
            Err(SercommError::InvalidValue { .. })
        ));
    }
}
