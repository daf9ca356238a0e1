//! Turns DataForSEO Labs responses into keyword records.

use tracing::debug;

use super::types::{ApiItem, ApiResponse, KeywordInfo};
use crate::keyword::{KeywordRecord, SUGGESTION_CONNECTION_STRENGTH};
use crate::TARGET_WEB_REQUEST;

/// Connection strength recorded when a related-keywords item omits it
pub const RELATED_CONNECTION_STRENGTH: f64 = 0.0;

fn items(response: &ApiResponse) -> impl Iterator<Item = &ApiItem> {
    response
        .tasks
        .iter()
        .flatten()
        .flat_map(|task| task.result.iter().flatten())
        .flat_map(|result| result.items.iter().flatten())
}

fn build_record(
    keyword: Option<&str>,
    info: Option<&KeywordInfo>,
    connection_strength: f64,
) -> Option<KeywordRecord> {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty())?;
    let search_volume = info.and_then(|i| i.search_volume).unwrap_or(0);
    let difficulty = info
        .and_then(|i| i.keyword_difficulty)
        .unwrap_or(0)
        .clamp(0, 100) as u8;

    Some(KeywordRecord::new(
        keyword,
        search_volume,
        difficulty,
        connection_strength,
    ))
}

/// Extracts records from a related-keywords response
///
/// Items without keyword text are skipped.
pub fn parse_related_keywords(response: &ApiResponse) -> Vec<KeywordRecord> {
    let mut skipped = 0;
    let keywords: Vec<KeywordRecord> = items(response)
        .filter_map(|item| {
            let data = item.keyword_data.as_ref();
            let record = build_record(
                data.and_then(|d| d.keyword.as_deref()),
                data.and_then(|d| d.keyword_info.as_ref()),
                item.connection_strength.unwrap_or(RELATED_CONNECTION_STRENGTH),
            );
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();

    debug!(
        target: TARGET_WEB_REQUEST,
        "Parsed {} related keywords ({} skipped)",
        keywords.len(),
        skipped
    );
    keywords
}

/// Extracts records from a keyword-suggestions response
///
/// Suggestion items may carry their fields at the top level instead of under
/// `keyword_data`, and usually have no connection strength.
pub fn parse_keyword_suggestions(response: &ApiResponse) -> Vec<KeywordRecord> {
    let mut skipped = 0;
    let keywords: Vec<KeywordRecord> = items(response)
        .filter_map(|item| {
            let (keyword, info) = match item.keyword_data.as_ref() {
                Some(data) => (
                    data.keyword.as_deref().or(item.keyword.as_deref()),
                    data.keyword_info.as_ref(),
                ),
                None => (item.keyword.as_deref(), item.keyword_info.as_ref()),
            };
            let record = build_record(
                keyword,
                info,
                item.connection_strength.unwrap_or(SUGGESTION_CONNECTION_STRENGTH),
            );
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();

    debug!(
        target: TARGET_WEB_REQUEST,
        "Parsed {} keyword suggestions ({} skipped)",
        keywords.len(),
        skipped
    );
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ApiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_related_keywords() {
        let parsed = parse_related_keywords(&response(json!({
            "status_code": 20000,
            "tasks": [{
                "result": [{
                    "items": [
                        {
                            "keyword_data": {
                                "keyword": "ai seo tools",
                                "keyword_info": {"search_volume": 500, "keyword_difficulty": 30}
                            },
                            "connection_strength": 0.8
                        },
                        {
                            "keyword_data": {"keyword": "ai seo"}
                        },
                        {
                            "keyword_data": {"keyword": ""},
                            "connection_strength": 0.9
                        },
                        {"connection_strength": 0.9}
                    ]
                }]
            }]
        })));

        assert_eq!(
            parsed,
            vec![
                KeywordRecord::new("ai seo tools", 500, 30, 0.8),
                KeywordRecord::new("ai seo", 0, 0, 0.0),
            ]
        );
    }

    #[test]
    fn test_suggestions_fall_back_to_item_fields() {
        let parsed = parse_keyword_suggestions(&response(json!({
            "tasks": [{
                "result": [{
                    "items": [
                        {
                            "keyword": "seo for beginners",
                            "keyword_info": {"search_volume": 1200, "keyword_difficulty": 25}
                        },
                        {
                            "keyword_data": {
                                "keyword": "seo checklist",
                                "keyword_info": {"search_volume": 300}
                            },
                            "connection_strength": 0.7
                        },
                        {"keyword_info": {"search_volume": 10}}
                    ]
                }]
            }]
        })));

        assert_eq!(
            parsed,
            vec![
                KeywordRecord::new("seo for beginners", 1200, 25, 0.5),
                KeywordRecord::new("seo checklist", 300, 0, 0.7),
            ]
        );
    }

    #[test]
    fn test_missing_and_null_arrays() {
        assert!(parse_related_keywords(&response(json!({}))).is_empty());
        assert!(parse_related_keywords(&response(json!({"tasks": null}))).is_empty());
        assert!(parse_keyword_suggestions(&response(json!({
            "tasks": [{"result": null}, {"result": [{"items": null}]}]
        })))
        .is_empty());
    }

    #[test]
    fn test_difficulty_is_clamped() {
        let parsed = parse_related_keywords(&response(json!({
            "tasks": [{"result": [{"items": [{
                "keyword_data": {
                    "keyword": "seo",
                    "keyword_info": {"search_volume": 10, "keyword_difficulty": 140}
                },
                "connection_strength": 0.5
            }]}]}]
        })));
        assert_eq!(parsed[0].difficulty, 100);
    }
}
