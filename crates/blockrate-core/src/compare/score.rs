//! Similarity scores and change classification.

use serde::{Deserialize, Serialize};

/// A similarity percentage, or the absence of one
///
/// `NotApplicable` is used when one side of a pair is absent: an added or
/// removed element has contents worth listing but no meaningful similarity.
/// On the wire it is encoded as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Score {
    NotApplicable,
    /// Always within `0..=100`
    Percent(u8),
}

impl Score {
    pub const FULL: Score = Score::Percent(100);
    pub const ZERO: Score = Score::Percent(0);

    /// Build a percentage, clamping into `0..=100`
    pub fn clamped(value: u64) -> Self {
        Score::Percent(value.min(100) as u8)
    }

    /// Numeric percentage, if applicable
    pub fn value(self) -> Option<u8> {
        match self {
            Score::NotApplicable => None,
            Score::Percent(v) => Some(v),
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Score::Percent(_))
    }

    /// Integer encoding with `-1` for `NotApplicable`
    pub fn as_i32(self) -> i32 {
        match self {
            Score::NotApplicable => -1,
            Score::Percent(v) => i32::from(v),
        }
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.as_i32()
    }
}

impl TryFrom<i32> for Score {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Score::NotApplicable),
            0..=100 => Ok(Score::Percent(value as u8)),
            other => Err(format!("score {} is outside -1..=100", other)),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::NotApplicable => write!(f, "n/a"),
            Score::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Classification of a compared pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Unchanged,
    /// Present only on the right
    Added,
    /// Present only on the left
    Removed,
    Changed,
    #[default]
    None,
}

impl Status {
    /// Classify from side presence and the pair's score
    ///
    /// A pair present on both sides is `Unchanged` only at a full score.
    pub fn classify(has_left: bool, has_right: bool, score: Score) -> Self {
        match (has_left, has_right) {
            (true, true) if score == Score::FULL => Status::Unchanged,
            (true, true) => Status::Changed,
            (true, false) => Status::Removed,
            (false, true) => Status::Added,
            (false, false) => Status::None,
        }
    }
}

/// Category score over the item scores of one itemized list
///
/// An empty list scores 100: there is nothing to differ on. Otherwise the
/// sum of positive item scores is floor-divided by the number of items, so
/// `NotApplicable` items count as zero.
pub fn average_rate<I>(rates: I) -> Score
where
    I: IntoIterator<Item = Score>,
{
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for rate in rates {
        count += 1;
        if let Score::Percent(v) = rate {
            sum += u64::from(v);
        }
    }
    if count == 0 {
        return Score::FULL;
    }
    Score::clamped(sum / count)
}

/// Equal-weight floor average of category scores
///
/// Returns `NotApplicable` if any category is not applicable.
pub fn aggregate_rate(categories: &[Score]) -> Score {
    let mut sum: u64 = 0;
    for score in categories {
        match score.value() {
            Some(v) => sum += u64::from(v),
            None => return Score::NotApplicable,
        }
    }
    if categories.is_empty() {
        return Score::NotApplicable;
    }
    Score::clamped(sum / categories.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_full_agreement() {
        assert_eq!(average_rate(Vec::new()), Score::FULL);
    }

    #[test]
    fn test_average_floors() {
        let rates = [Score::FULL, Score::ZERO, Score::FULL];
        // 200 / 3 = 66.67
        assert_eq!(average_rate(rates), Score::Percent(66));
    }

    #[test]
    fn test_not_applicable_counts_in_denominator() {
        let rates = [Score::FULL, Score::NotApplicable];
        assert_eq!(average_rate(rates), Score::Percent(50));
    }

    #[test]
    fn test_aggregate_excludes_nothing_it_is_given() {
        let categories = [Score::Percent(50), Score::FULL, Score::FULL, Score::FULL];
        assert_eq!(aggregate_rate(&categories), Score::Percent(87));
        assert_eq!(
            aggregate_rate(&[Score::FULL, Score::NotApplicable]),
            Score::NotApplicable
        );
    }

    #[test]
    fn test_wire_encoding_uses_sentinel() {
        assert_eq!(serde_json::to_string(&Score::NotApplicable).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Score::Percent(42)).unwrap(), "42");
        let parsed: Score = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, Score::NotApplicable);
        assert!(serde_json::from_str::<Score>("101").is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(Status::classify(true, true, Score::FULL), Status::Unchanged);
        assert_eq!(Status::classify(true, true, Score::Percent(99)), Status::Changed);
        assert_eq!(
            Status::classify(true, false, Score::NotApplicable),
            Status::Removed
        );
        assert_eq!(
            Status::classify(false, true, Score::NotApplicable),
            Status::Added
        );
    }
}
