//! Node comparator.
//!
//! Rates one pair of sibling-aligned blocks: the four itemized category lists,
//! a score per category, the index check and the aggregate. Pairing blocks
//! across two policy trees is the caller's job; the caller attaches child
//! rates with [`BlockRate::attach_child`].

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::compare::aligner::align_with;
use crate::compare::comparators::{Comparators, LeafComparator};
use crate::compare::rate::{ItemRate, ItemRateRecord, Rate};
use crate::compare::score::{aggregate_rate, average_rate, Score, Status};
use crate::errors::{CompareError, ExError, ExErrorKind, Result};
use crate::model::{Artifact, BlockModel, Event, PermissionId, Property};
use crate::options::CompareOptions;
use crate::{log_op_end, log_op_error, log_op_start};

/// Node-level scores; all `NotApplicable` when a side is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockScores {
    pub index: Score,
    pub properties: Score,
    pub events: Score,
    pub permissions: Score,
    pub artifacts: Score,
    pub total: Score,
}

impl BlockScores {
    const NOT_APPLICABLE: BlockScores = BlockScores {
        index: Score::NotApplicable,
        properties: Score::NotApplicable,
        events: Score::NotApplicable,
        permissions: Score::NotApplicable,
        artifacts: Score::NotApplicable,
        total: Score::NotApplicable,
    };
}

/// Rated pair of blocks
#[derive(Debug)]
pub struct BlockRate<'a, B: ?Sized> {
    block_type: String,
    left: Option<&'a B>,
    right: Option<&'a B>,
    scores: BlockScores,
    status: Status,
    properties: Vec<ItemRate<Property>>,
    events: Vec<ItemRate<Event>>,
    permissions: Vec<ItemRate<PermissionId>>,
    artifacts: Vec<ItemRate<Artifact>>,
    children: Vec<BlockRate<'a, B>>,
}

impl<'a, B> BlockRate<'a, B>
where
    B: BlockModel + ?Sized,
{
    /// Rate a block pair with the default leaf comparators
    ///
    /// See [`compute_block_rate`].
    pub fn compute(
        left: Option<&'a B>,
        right: Option<&'a B>,
        options: &CompareOptions,
    ) -> Result<Self> {
        compute_block_rate(left, right, options, &Comparators::default())
    }

    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    pub fn scores(&self) -> BlockScores {
        self.scores
    }

    pub fn properties(&self) -> &[ItemRate<Property>] {
        &self.properties
    }

    pub fn events(&self) -> &[ItemRate<Event>] {
        &self.events
    }

    pub fn permissions(&self) -> &[ItemRate<PermissionId>] {
        &self.permissions
    }

    pub fn artifacts(&self) -> &[ItemRate<Artifact>] {
        &self.artifacts
    }

    /// Child rates attached by the tree walker, in sibling order
    pub fn children(&self) -> &[BlockRate<'a, B>] {
        &self.children
    }

    /// Append a child rate; the walker must attach in sibling order
    pub fn attach_child(&mut self, child: BlockRate<'a, B>) {
        self.children.push(child);
    }

    /// Itemized records of one category by name
    ///
    /// Returns `Ok(None)` for an unknown category name.
    ///
    /// # Errors
    ///
    /// - `Serialization`: an item could not be encoded as JSON
    pub fn sub_rate(&self, name: &str) -> Result<Option<Vec<ItemRateRecord>>> {
        let records = match name {
            "properties" => records(&self.properties)?,
            "events" => records(&self.events)?,
            "permissions" => records(&self.permissions)?,
            "artifacts" => records(&self.artifacts)?,
            _ => return Ok(None),
        };
        Ok(Some(records))
    }

    /// Plain serializable record of this rate and its attached children
    ///
    /// # Errors
    ///
    /// - `Serialization`: an item could not be encoded as JSON
    /// - `DeterminismViolation`: the record does not survive a JSON round-trip
    pub fn to_record(&self) -> Result<BlockRateRecord> {
        let record = self.build_record()?;

        let serialized = serde_json::to_string(&record).map_err(|e| {
            ExError::new(ExErrorKind::DeterminismViolation)
                .with_op("block_rate_to_record")
                .with_block_type(&self.block_type)
                .with_message(format!("failed to serialize record: {}", e))
        })?;
        let reparsed: BlockRateRecord = serde_json::from_str(&serialized).map_err(|e| {
            ExError::new(ExErrorKind::DeterminismViolation)
                .with_op("block_rate_to_record")
                .with_block_type(&self.block_type)
                .with_message(format!("failed to re-parse record: {}", e))
        })?;
        if reparsed != record {
            return Err(ExError::new(ExErrorKind::DeterminismViolation)
                .with_op("block_rate_to_record")
                .with_block_type(&self.block_type)
                .with_message("record is not deterministic: round-trip produced different record"));
        }

        Ok(record)
    }

    fn build_record(&self) -> Result<BlockRateRecord> {
        Ok(BlockRateRecord {
            block_type: self.block_type.clone(),
            status: self.status,
            index_rate: self.scores.index,
            properties_rate: self.scores.properties,
            events_rate: self.scores.events,
            permissions_rate: self.scores.permissions,
            artifacts_rate: self.scores.artifacts,
            total_rate: self.scores.total,
            properties: records(&self.properties)?,
            events: records(&self.events)?,
            permissions: records(&self.permissions)?,
            artifacts: records(&self.artifacts)?,
            children: self
                .children
                .iter()
                .map(BlockRate::build_record)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl<B: ?Sized> Rate for BlockRate<'_, B> {
    type Model = B;

    fn left(&self) -> Option<&B> {
        self.left
    }

    fn right(&self) -> Option<&B> {
        self.right
    }

    fn total_rate(&self) -> Score {
        self.scores.total
    }

    fn status(&self) -> Status {
        self.status
    }

    /// `index`, `properties`, `events`, `permissions`, `artifacts`;
    /// anything else is the aggregate
    fn rate_value(&self, name: &str) -> Score {
        match name {
            "index" => self.scores.index,
            "properties" => self.scores.properties,
            "events" => self.scores.events,
            "permissions" => self.scores.permissions,
            "artifacts" => self.scores.artifacts,
            _ => self.scores.total,
        }
    }
}

fn records<T: serde::Serialize>(items: &[ItemRate<T>]) -> Result<Vec<ItemRateRecord>> {
    items.iter().map(ItemRate::to_record).collect()
}

/// Rate a pair of sibling-aligned blocks
///
/// The itemized lists are always built, so an added or removed block still
/// lists its full contents. Scores are only computed when both sides are
/// present; otherwise they stay `NotApplicable`.
///
/// The caller guarantees that two present blocks share a block type; the
/// left side's type is reported.
///
/// # Errors
///
/// - `EmptyPair`: both sides are absent
/// - any leaf comparator error, unchanged
pub fn compute_block_rate<'a, B>(
    left: Option<&'a B>,
    right: Option<&'a B>,
    options: &CompareOptions,
    comparators: &Comparators,
) -> Result<BlockRate<'a, B>>
where
    B: BlockModel + ?Sized,
{
    let block_type = match left.or(right) {
        Some(block) => block.block_type().to_string(),
        None => {
            return Err(ExError::from(CompareError::EmptyPair {
                what: "block".to_string(),
            })
            .with_op("compute_block_rate"))
        }
    };

    let start = Instant::now();
    log_op_start!("compute_block_rate", block_type = block_type.as_str());

    match rate_block(block_type.clone(), left, right, options, comparators) {
        Ok(rate) => {
            log_op_end!(
                "compute_block_rate",
                duration_ms = start.elapsed().as_millis() as u64,
                block_type = block_type.as_str(),
                total_rate = rate.scores.total.as_i32(),
                index_rate = rate.scores.index.as_i32(),
                properties_len = rate.properties.len() as u64,
                events_len = rate.events.len() as u64,
                permissions_len = rate.permissions.len() as u64,
                artifacts_len = rate.artifacts.len() as u64
            );
            Ok(rate)
        }
        Err(err) => {
            let err = match err.op() {
                Some(_) => err,
                None => err.with_op("compute_block_rate"),
            }
            .with_block_type(block_type.as_str());
            log_op_error!(
                "compute_block_rate",
                &err,
                duration_ms = start.elapsed().as_millis() as u64,
                block_type = block_type.as_str()
            );
            Err(err)
        }
    }
}

fn rate_block<'a, B>(
    block_type: String,
    left: Option<&'a B>,
    right: Option<&'a B>,
    options: &CompareOptions,
    comparators: &Comparators,
) -> Result<BlockRate<'a, B>>
where
    B: BlockModel + ?Sized,
{
    let properties = compare_properties(left, right, options, comparators)?;
    let events = compare_aligned(
        left.map(|b| b.events()),
        right.map(|b| b.events()),
        comparators.events.as_ref(),
        options,
    )?;
    let permissions = compare_aligned(
        left.map(|b| b.permissions()),
        right.map(|b| b.permissions()),
        comparators.permissions.as_ref(),
        options,
    )?;
    let artifacts = compare_aligned(
        left.map(|b| b.artifacts()),
        right.map(|b| b.artifacts()),
        comparators.artifacts.as_ref(),
        options,
    )?;

    let scores = match (left, right) {
        (Some(l), Some(r)) => {
            let properties_rate = average_rate(properties.iter().map(Rate::total_rate));
            let events_rate = average_rate(events.iter().map(Rate::total_rate));
            let permissions_rate = average_rate(permissions.iter().map(Rate::total_rate));
            let artifacts_rate = average_rate(artifacts.iter().map(Rate::total_rate));
            BlockScores {
                index: if l.index() == r.index() {
                    Score::FULL
                } else {
                    Score::ZERO
                },
                properties: properties_rate,
                events: events_rate,
                permissions: permissions_rate,
                artifacts: artifacts_rate,
                total: aggregate_rate(&[
                    properties_rate,
                    events_rate,
                    permissions_rate,
                    artifacts_rate,
                ]),
            }
        }
        _ => {
            tracing::debug!(
                block_type = block_type.as_str(),
                has_left = left.is_some(),
                has_right = right.is_some(),
                "one side absent, scores not applicable"
            );
            BlockScores::NOT_APPLICABLE
        }
    };

    Ok(BlockRate {
        status: Status::classify(left.is_some(), right.is_some(), scores.total),
        block_type,
        left,
        right,
        scores,
        properties,
        events,
        permissions,
        artifacts,
        children: Vec::new(),
    })
}

/// Union of property paths, sorted, behind the synthetic tag pair
fn compare_properties<B>(
    left: Option<&B>,
    right: Option<&B>,
    options: &CompareOptions,
    comparators: &Comparators,
) -> Result<Vec<ItemRate<Property>>>
where
    B: BlockModel + ?Sized,
{
    let mut by_path: BTreeMap<&str, (Option<&Property>, Option<&Property>)> = BTreeMap::new();
    if let Some(block) = left {
        for property in block.properties() {
            let slot = &mut by_path.entry(property.path.as_str()).or_default().0;
            claim_path(slot, property, "left")?;
        }
    }
    if let Some(block) = right {
        for property in block.properties() {
            let slot = &mut by_path.entry(property.path.as_str()).or_default().1;
            claim_path(slot, property, "right")?;
        }
    }

    let left_tag = left.map(|b| Property::tag(b.tag()));
    let right_tag = right.map(|b| Property::tag(b.tag()));
    let comparator = comparators.properties.as_ref();

    let mut rates = Vec::with_capacity(by_path.len() + 1);
    rates.push(ItemRate::compute(
        left_tag.as_ref(),
        right_tag.as_ref(),
        comparator,
        options,
    )?);
    for (l, r) in by_path.into_values() {
        rates.push(ItemRate::compute(l, r, comparator, options)?);
    }
    Ok(rates)
}

/// Property paths are keys: one property per path per side
fn claim_path<'p>(
    slot: &mut Option<&'p Property>,
    property: &'p Property,
    side: &str,
) -> Result<()> {
    if slot.is_some() {
        return Err(ExError::from(CompareError::InvalidProperty {
            path: property.path.clone(),
            reason: format!("duplicate property path on the {} block", side),
        }));
    }
    *slot = Some(property);
    Ok(())
}

/// Align two item lists with the comparator's equality, then score each pair
fn compare_aligned<T, C>(
    left: Option<&[T]>,
    right: Option<&[T]>,
    comparator: &C,
    options: &CompareOptions,
) -> Result<Vec<ItemRate<T>>>
where
    T: Clone,
    C: LeafComparator<T> + ?Sized,
{
    let aligned = align_with(left.unwrap_or_default(), right.unwrap_or_default(), |a, b| {
        comparator.equal(a, b, options)
    });
    aligned
        .into_iter()
        .map(|pair| ItemRate::compute(pair.left, pair.right, comparator, options))
        .collect()
}

/// Serializable form of a [`BlockRate`] tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRateRecord {
    pub block_type: String,
    pub status: Status,
    pub index_rate: Score,
    pub properties_rate: Score,
    pub events_rate: Score,
    pub permissions_rate: Score,
    pub artifacts_rate: Score,
    pub total_rate: Score,
    pub properties: Vec<ItemRateRecord>,
    pub events: Vec<ItemRateRecord>,
    pub permissions: Vec<ItemRateRecord>,
    pub artifacts: Vec<ItemRateRecord>,
    pub children: Vec<BlockRateRecord>,
}
