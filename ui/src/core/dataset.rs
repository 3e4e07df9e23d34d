//! The in-memory play collection, loaded once at startup.

use std::{collections::BTreeSet, path::PathBuf, rc::Rc};

use dioxus::logger::tracing::{debug, info, warn};
use thiserror::Error;

use super::play::{PlayRecord, RawPlay};

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched over HTTP (web builds).
    Url(String),
    /// Read from disk (native builds).
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("couldn't fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },
    #[error("couldn't read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a valid play list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} can't be loaded on this platform")]
    UnsupportedSource(DataSource),
}

/// Shared, read-only handle to the loaded plays.
#[derive(Debug, Clone)]
pub struct Dataset {
    plays: Rc<[PlayRecord]>,
    rejected: usize,
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.plays, &other.plays)
    }
}

impl Dataset {
    pub fn new(plays: Vec<PlayRecord>) -> Self {
        Self {
            plays: plays.into(),
            rejected: 0,
        }
    }

    /// Parse a JSON array of plays, dropping records that lack required fields.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let total = entries.len();

        let mut plays = Vec::with_capacity(total);
        let mut rejected = 0usize;
        for (idx, entry) in entries.into_iter().enumerate() {
            let record = serde_json::from_value::<RawPlay>(entry)
                .map_err(|err| err.to_string())
                .and_then(|raw| PlayRecord::try_from(raw).map_err(|reason| reason.to_string()));
            match record {
                Ok(play) => plays.push(play),
                Err(reason) => {
                    debug!("skipping play #{idx}: {reason}");
                    rejected += 1;
                }
            }
        }

        if rejected > 0 {
            warn!("dropped {rejected} of {total} plays with missing or invalid fields");
        }

        Ok(Self {
            plays: plays.into(),
            rejected,
        })
    }

    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Records dropped during coercion.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_plays(&self.plays)
    }
}

/// Distinct picker values present in the data, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub coverages: Vec<String>,
    pub downs: Vec<u8>,
    pub formations: Vec<String>,
}

impl FilterOptions {
    pub fn from_plays(plays: &[PlayRecord]) -> Self {
        let mut coverages = BTreeSet::new();
        let mut downs = BTreeSet::new();
        let mut formations = BTreeSet::new();

        for play in plays {
            coverages.insert(play.coverage_type.as_str());
            downs.insert(play.down);
            formations.insert(play.offense_formation.as_str());
        }

        Self {
            coverages: coverages.into_iter().map(String::from).collect(),
            downs: downs.into_iter().collect(),
            formations: formations.into_iter().map(String::from).collect(),
        }
    }
}

/// Load and parse the dataset from `source`.
pub async fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    info!("loading plays from {source}");
    let json = read_source(source).await?;
    let dataset = Dataset::from_json(&json)?;
    info!(
        "loaded {} plays ({} rejected)",
        dataset.len(),
        dataset.rejected()
    );
    Ok(dataset)
}

#[cfg(target_arch = "wasm32")]
async fn read_source(source: &DataSource) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let DataSource::Url(url) = source else {
        return Err(LoadError::UnsupportedSource(source.clone()));
    };
    let fetch_error = |reason: String| LoadError::Fetch {
        source_name: url.clone(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_error("window unavailable".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| fetch_error(format!("{err:?}")))?
        .dyn_into()
        .map_err(|_| fetch_error("unexpected fetch result".into()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let text_promise = response
        .text()
        .map_err(|err| fetch_error(format!("{err:?}")))?;
    JsFuture::from(text_promise)
        .await
        .map_err(|err| fetch_error(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| fetch_error("response body is not text".into()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
        DataSource::Url(_) => Err(LoadError::UnsupportedSource(source.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::play::PassResult;
    use futures::executor::block_on;

    const SAMPLE: &str = r#"[
        {"possession_team": "KC", "down": 3, "pass_length": 15, "yards_gained": 12,
         "offense_formation": "SHOTGUN", "coverage_type": "ZONE_2", "is_red_zone": true,
         "play_action": false, "pass_result": "C", "epa": 0.8,
         "play_description": "pass deep middle"},
        {"possession_team": "BUF", "down": 1, "yards_gained": 0,
         "offense_formation": "EMPTY", "coverage_type": "MAN_1", "pass_result": "I",
         "epa": null, "play_description": "incomplete"},
        {"possession_team": "DAL", "yards_gained": 4,
         "offense_formation": "EMPTY", "coverage_type": "MAN_1"}
    ]"#;

    #[test]
    fn parses_and_drops_incomplete_records() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected(), 1);

        let first = &dataset.plays()[0];
        assert_eq!(first.pass_length, Some(15.0));
        assert_eq!(first.pass_result, Some(PassResult::Complete));
        assert!(first.is_red_zone);

        let second = &dataset.plays()[1];
        assert_eq!(second.pass_length, None);
        assert_eq!(second.epa, None);
    }

    #[test]
    fn mistyped_record_is_rejected_not_fatal() {
        let json = r#"[
            {"possession_team": "KC", "down": 2, "yards_gained": 7,
             "offense_formation": "SHOTGUN", "coverage_type": "COVER_3_ZONE"},
            {"possession_team": "BUF", "down": "2", "yards_gained": 3,
             "offense_formation": "EMPTY", "coverage_type": "MAN_1"},
            {"possession_team": "DAL", "down": 3.0, "yards_gained": 1,
             "offense_formation": "EMPTY", "coverage_type": "MAN_1"},
            "not a play"
        ]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rejected(), 3);
        assert_eq!(dataset.plays()[0].possession_team, "KC");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Dataset::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));

        let err = Dataset::from_json(r#"{"plays": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let options = dataset.options();
        assert_eq!(options.coverages, ["MAN_1", "ZONE_2"]);
        assert_eq!(options.downs, [1, 3]);
        assert_eq!(options.formations, ["EMPTY", "SHOTGUN"]);
    }

    #[test]
    fn equality_is_handle_identity() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let copy = dataset.clone();
        let reparsed = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset, copy);
        assert_ne!(dataset, reparsed);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = DataSource::File(PathBuf::from("/definitely/not/here/plays.json"));
        let err = block_on(load(&source)).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("plays.json"));
    }

    #[test]
    fn url_source_is_unsupported_natively() {
        let source = DataSource::Url("/assets/plays.json".into());
        let err = block_on(load(&source)).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedSource(_)));
    }
}
