// keycloud-core/src/keywords.rs
//
// Pure core: decode the serialized keyword lists, build the weighted word
// list, and decide whether a render should happen at all. Everything here is
// host-testable; nothing touches the DOM.

use serde::{Deserialize, Serialize};

use crate::config::{CloudConfig, MATCHED_WEIGHT, MISSING_WEIGHT};

/// Which source list a keyword came from. Membership alone decides the weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordSource {
    /// Present in both resume and job description
    Matched,
    /// Expected by the job description but absent from the resume
    Missing,
}

impl KeywordSource {
    /// Static weight for keywords from this source
    pub fn weight(&self) -> u32 {
        match self {
            Self::Matched => MATCHED_WEIGHT,
            Self::Missing => MISSING_WEIGHT,
        }
    }
}

/// A keyword paired with its display weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub text: String,
    pub weight: u32,
}

impl WeightedKeyword {
    pub fn new(text: impl Into<String>, source: KeywordSource) -> Self {
        Self {
            text: text.into(),
            weight: source.weight(),
        }
    }
}

/// Keyword cloud errors
#[derive(Debug, Clone, PartialEq)]
pub enum CloudError {
    /// A data attribute held something other than a JSON array of strings
    DecodeFailed { attribute: String, message: String },
    /// No element with the given id exists in the document
    MissingContainer(String),
    /// The container element is not an HTMLElement
    NotAnHtmlElement(String),
    /// No window/document available (not running in a browser page)
    NoDocument,
    /// Building the wordcloud2.js options object failed
    OptionsFailed(String),
    /// The WordCloud global threw or is not loaded on the page
    RenderFailed(String),
}

impl std::fmt::Display for CloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloudError::DecodeFailed { attribute, message } => {
                write!(f, "Failed to decode {}: {}", attribute, message)
            }
            CloudError::MissingContainer(id) => {
                write!(f, "Keyword cloud container #{} not found", id)
            }
            CloudError::NotAnHtmlElement(id) => {
                write!(f, "Keyword cloud container #{} is not an HTML element", id)
            }
            CloudError::NoDocument => write!(f, "No document available"),
            CloudError::OptionsFailed(msg) => write!(f, "Failed to build cloud options: {}", msg),
            CloudError::RenderFailed(msg) => write!(f, "WordCloud render failed: {}", msg),
        }
    }
}

impl std::error::Error for CloudError {}

/// Decode a serialized keyword list from a data attribute.
///
/// An absent attribute means the feature simply was not populated for this
/// page, so it decodes to an empty list. A present attribute must be a JSON
/// array of strings.
pub fn decode_keywords(attribute: &str, raw: Option<&str>) -> Result<Vec<String>, CloudError> {
    match raw {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json).map_err(|e| CloudError::DecodeFailed {
            attribute: attribute.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Decode a keyword list, degrading malformed input to an empty list.
///
/// The cloud is a best-effort page enhancement: bad attribute data must not
/// take down the rest of the page's scripts. The error is returned alongside
/// so the caller can log it.
pub fn decode_keywords_lossy(
    attribute: &str,
    raw: Option<&str>,
) -> (Vec<String>, Option<CloudError>) {
    match decode_keywords(attribute, raw) {
        Ok(list) => (list, None),
        Err(e) => (Vec::new(), Some(e)),
    }
}

/// Build the combined weighted list: matched keywords first at weight 30,
/// then missing keywords at weight 15. Source order is preserved, duplicates
/// are kept as-is.
pub fn build_word_list(matched: &[String], missing: &[String]) -> Vec<WeightedKeyword> {
    matched
        .iter()
        .map(|k| WeightedKeyword::new(k.clone(), KeywordSource::Matched))
        .chain(
            missing
                .iter()
                .map(|k| WeightedKeyword::new(k.clone(), KeywordSource::Missing)),
        )
        .collect()
}

/// A validated, ready-to-render cloud: a non-empty word list plus the
/// rendering options. Built once per initialization and consumed by the
/// render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub list: Vec<WeightedKeyword>,
    pub config: CloudConfig,
}

impl RenderPlan {
    /// Word list as `[text, weight]` pairs, the shape wordcloud2.js expects
    /// for its `list` option.
    pub fn pairs(&self) -> Vec<(&str, u32)> {
        self.list.iter().map(|w| (w.text.as_str(), w.weight)).collect()
    }
}

/// Decide whether to render and with what.
///
/// Returns `None` when both lists are empty: the renderer must not be invoked
/// and the page shows no cloud.
pub fn plan_cloud(
    matched: Vec<String>,
    missing: Vec<String>,
    config: CloudConfig,
) -> Option<RenderPlan> {
    let list = build_word_list(&matched, &missing);
    if list.is_empty() {
        return None;
    }
    Some(RenderPlan { list, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_absent_attribute() {
        assert_eq!(decode_keywords("data-matched", None).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_valid_list() {
        let decoded = decode_keywords("data-matched", Some(r#"["api","cloud"]"#)).unwrap();
        assert_eq!(decoded, words(&["api", "cloud"]));
    }

    #[test]
    fn test_decode_empty_list() {
        assert_eq!(decode_keywords("data-missing", Some("[]")).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_keywords("data-matched", Some(r#"["api","#)).unwrap_err();
        match err {
            CloudError::DecodeFailed { attribute, .. } => assert_eq!(attribute, "data-matched"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_wrong_shape() {
        // A JSON value that is not an array of strings is malformed too
        assert!(decode_keywords("data-matched", Some(r#"{"a":1}"#)).is_err());
        assert!(decode_keywords("data-matched", Some("[1,2,3]")).is_err());
    }

    #[test]
    fn test_decode_lossy_falls_back_to_empty() {
        let (list, err) = decode_keywords_lossy("data-missing", Some("not json"));
        assert!(list.is_empty());
        assert!(err.is_some());

        let (list, err) = decode_keywords_lossy("data-missing", Some(r#"["docker"]"#));
        assert_eq!(list, words(&["docker"]));
        assert!(err.is_none());
    }

    #[test]
    fn test_source_weights() {
        assert_eq!(KeywordSource::Matched.weight(), 30);
        assert_eq!(KeywordSource::Missing.weight(), 15);
    }

    #[test]
    fn test_build_word_list_weights_and_order() {
        let list = build_word_list(&words(&["api", "cloud"]), &words(&["kubernetes"]));
        assert_eq!(
            list,
            vec![
                WeightedKeyword { text: "api".into(), weight: 30 },
                WeightedKeyword { text: "cloud".into(), weight: 30 },
                WeightedKeyword { text: "kubernetes".into(), weight: 15 },
            ]
        );
    }

    #[test]
    fn test_build_word_list_keeps_duplicates() {
        let list = build_word_list(&words(&["api", "api"]), &words(&["api"]));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].weight, 30);
        assert_eq!(list[2].weight, 15);
    }

    #[test]
    fn test_plan_empty_input_skips_render() {
        assert_eq!(plan_cloud(vec![], vec![], CloudConfig::default()), None);
    }

    #[test]
    fn test_plan_matched_only() {
        let plan = plan_cloud(words(&["rust"]), vec![], CloudConfig::default()).unwrap();
        assert_eq!(plan.pairs(), vec![("rust", 30)]);
    }

    #[test]
    fn test_plan_missing_only() {
        let plan = plan_cloud(vec![], words(&["sql"]), CloudConfig::default()).unwrap();
        assert_eq!(plan.pairs(), vec![("sql", 15)]);
    }

    #[test]
    fn test_plan_combined() {
        let plan = plan_cloud(
            words(&["api", "cloud"]),
            words(&["kubernetes"]),
            CloudConfig::default(),
        )
        .unwrap();
        assert_eq!(
            plan.pairs(),
            vec![("api", 30), ("cloud", 30), ("kubernetes", 15)]
        );
    }

    #[test]
    fn test_error_display() {
        let err = CloudError::MissingContainer("keywordCloud".to_string());
        assert_eq!(err.to_string(), "Keyword cloud container #keywordCloud not found");

        let err = CloudError::DecodeFailed {
            attribute: "data-matched".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode data-matched: expected value");
    }
}
