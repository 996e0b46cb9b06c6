use super::MatchEngine;
use crate::{context::ScanContext, error::BoxError, result::MatchResult};

/// Replays a fixed list of matches for every text.
///
/// Useful when matches were located elsewhere (another service, an earlier
/// pass) and only the splicing is needed here. The list is returned exactly
/// as given, including its order and any duplicates, so the caller is
/// responsible for the offsets being valid for the text being processed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrecomputedEngine {
    matches: Vec<MatchResult>,
}

impl PrecomputedEngine {
    pub fn new<I>(matches: I) -> Self
    where
        I: IntoIterator<Item = MatchResult>,
    {
        Self {
            matches: matches.into_iter().collect(),
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }
}

impl MatchEngine for PrecomputedEngine {
    fn locate(&self, _text: &str, _context: &ScanContext) -> Result<Vec<MatchResult>, BoxError> {
        Ok(self.matches.clone())
    }
}
