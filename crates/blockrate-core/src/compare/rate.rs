//! The comparable-pair contract and the leaf pair type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compare::comparators::LeafComparator;
use crate::compare::score::{Score, Status};
use crate::errors::{CompareError, ExError, Result};
use crate::options::CompareOptions;

/// Contract shared by every comparable pair
///
/// A pair holds a left and a right model, at least one of them present, and
/// exposes the score and classification computed for them.
pub trait Rate {
    type Model: ?Sized;

    fn left(&self) -> Option<&Self::Model>;

    fn right(&self) -> Option<&Self::Model>;

    fn total_rate(&self) -> Score;

    fn status(&self) -> Status;

    /// Named score lookup; leaf pairs only have a total
    fn rate_value(&self, _name: &str) -> Score {
        self.total_rate()
    }
}

/// A scored pair of two leaf items (property, event, permission, artifact)
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRate<T> {
    left: Option<T>,
    right: Option<T>,
    total_rate: Score,
    status: Status,
}

impl<T: Clone> ItemRate<T> {
    /// Score one aligned pair with a leaf comparator
    ///
    /// # Errors
    ///
    /// - `EmptyPair`: both sides are absent
    /// - any error returned by the comparator, unchanged
    pub fn compute<C>(
        left: Option<&T>,
        right: Option<&T>,
        comparator: &C,
        options: &CompareOptions,
    ) -> Result<Self>
    where
        C: LeafComparator<T> + ?Sized,
    {
        if left.is_none() && right.is_none() {
            return Err(ExError::from(CompareError::EmptyPair {
                what: comparator.name().to_string(),
            }));
        }
        let total_rate = comparator.score(left, right, options)?;
        Ok(Self {
            left: left.cloned(),
            right: right.cloned(),
            total_rate,
            status: Status::classify(left.is_some(), right.is_some(), total_rate),
        })
    }
}

impl<T: Serialize> ItemRate<T> {
    /// Plain record for reporting layers
    ///
    /// # Errors
    ///
    /// - `Serialization`: an item could not be encoded as JSON
    pub fn to_record(&self) -> Result<ItemRateRecord> {
        Ok(ItemRateRecord {
            left: self.left.as_ref().map(to_value).transpose()?,
            right: self.right.as_ref().map(to_value).transpose()?,
            total_rate: self.total_rate,
            status: self.status,
        })
    }
}

fn to_value<T: Serialize>(item: &T) -> Result<Value> {
    serde_json::to_value(item).map_err(|e| ExError::from(CompareError::from(e)))
}

impl<T> Rate for ItemRate<T> {
    type Model = T;

    fn left(&self) -> Option<&T> {
        self.left.as_ref()
    }

    fn right(&self) -> Option<&T> {
        self.right.as_ref()
    }

    fn total_rate(&self) -> Score {
        self.total_rate
    }

    fn status(&self) -> Status {
        self.status
    }
}

/// Serializable form of an [`ItemRate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRateRecord {
    pub left: Option<Value>,
    pub right: Option<Value>,
    pub total_rate: Score,
    pub status: Status,
}
