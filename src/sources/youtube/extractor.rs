use serde_json::Value;

use crate::protocol::tracks::VideoMatch;

/// First `videoRenderer` in a search response, in document order.
pub fn first_video(response: &Value) -> Option<VideoMatch> {
    let mut renderers = Vec::new();
    collect_video_renderers(response, &mut renderers);
    renderers.into_iter().find_map(extract_video)
}

/// Depth-first walk collecting every `videoRenderer` object. The search
/// response nests them differently per client and experiment, so a
/// structural walk is sturdier than a fixed pointer path.
fn collect_video_renderers<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            if let Some(renderer) = map.get("videoRenderer") {
                out.push(renderer);
            }
            for child in map.values() {
                collect_video_renderers(child, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_video_renderers(child, out);
            }
        }
        _ => {}
    }
}

fn extract_video(renderer: &Value) -> Option<VideoMatch> {
    let id = renderer.get("videoId")?.as_str()?.to_string();
    let title = renderer.get("title").and_then(get_text)?;
    let duration = renderer.get("lengthText").and_then(get_text);

    Some(VideoMatch {
        id,
        title,
        duration,
    })
}

/// Text from either a `simpleText` field or joined `runs`.
fn get_text(value: &Value) -> Option<String> {
    if let Some(simple) = value.get("simpleText").and_then(|v| v.as_str()) {
        return Some(simple.to_string());
    }

    let joined: String = value
        .get("runs")?
        .as_array()?
        .iter()
        .filter_map(|run| run.get("text").and_then(|t| t.as_str()))
        .collect();

    if joined.is_empty() { None } else { Some(joined) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn search_response() -> Value {
        serde_json::json!({
            "contents": {
                "twoColumnSearchResultsRenderer": {
                    "primaryContents": {
                        "sectionListRenderer": {
                            "contents": [
                                {
                                    "itemSectionRenderer": {
                                        "contents": [
                                            { "adSlotRenderer": {} },
                                            {
                                                "videoRenderer": {
                                                    "videoId": "1uYWYWPc9HU",
                                                    "title": { "runs": [ { "text": "Radiohead - Karma " }, { "text": "Police" } ] },
                                                    "lengthText": { "simpleText": "4:24" }
                                                }
                                            },
                                            {
                                                "videoRenderer": {
                                                    "videoId": "second111",
                                                    "title": { "simpleText": "Karma Police (Live)" },
                                                    "lengthText": { "simpleText": "5:01" }
                                                }
                                            }
                                        ]
                                    }
                                }
                            ]
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_first_video_wins() {
        let video = first_video(&search_response()).unwrap();

        assert_eq!(video.id, "1uYWYWPc9HU");
        assert_eq!(video.title, "Radiohead - Karma Police");
        assert_eq!(video.duration.as_deref(), Some("4:24"));
    }

    #[test]
    fn test_renderer_without_length_has_no_duration() {
        let response = serde_json::json!({
            "contents": [
                {
                    "videoRenderer": {
                        "videoId": "livestream1",
                        "title": { "simpleText": "lofi hip hop radio" }
                    }
                }
            ]
        });

        let video = first_video(&response).unwrap();
        assert_eq!(video.id, "livestream1");
        assert_eq!(video.duration, None);
    }

    #[test]
    fn test_renderer_without_id_is_skipped() {
        let response = serde_json::json!({
            "contents": [
                { "videoRenderer": { "title": { "simpleText": "broken" } } },
                {
                    "videoRenderer": {
                        "videoId": "ok12345",
                        "title": { "simpleText": "works" }
                    }
                }
            ]
        });

        assert_eq!(first_video(&response).unwrap().id, "ok12345");
    }

    #[test]
    fn test_no_results() {
        assert!(first_video(&serde_json::json!({ "contents": [] })).is_none());
        assert!(first_video(&serde_json::json!({})).is_none());
    }
}
