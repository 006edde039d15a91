//! Leaf comparators.
//!
//! The node comparator depends on these only through [`LeafComparator`]: an
//! equality predicate used for alignment and a scoring function for each
//! aligned pair. The defaults honour [`CompareOptions`]; hosts may inject
//! their own through [`Comparators`].

use crate::compare::aligner::Equatable;
use crate::compare::score::Score;
use crate::errors::{CompareError, ExError, Result};
use crate::model::{Artifact, Event, PermissionId, Property};
use crate::options::{ArtifactLevel, CompareOptions, EventLevel, IdLevel, PropertyLevel};

/// Equality and scoring for one leaf category
pub trait LeafComparator<T> {
    /// Short name used in error context
    fn name(&self) -> &'static str;

    /// Whether two items are the same element for alignment purposes
    fn equal(&self, left: &T, right: &T, options: &CompareOptions) -> bool;

    /// Score one aligned pair
    ///
    /// The default gives 100 for equal items, 0 for unequal ones, and
    /// `NotApplicable` when a side is absent.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the node comparator propagates the error.
    fn score(
        &self,
        left: Option<&T>,
        right: Option<&T>,
        options: &CompareOptions,
    ) -> Result<Score> {
        Ok(equality_score(self, left, right, options))
    }
}

fn equality_score<T, C>(
    comparator: &C,
    left: Option<&T>,
    right: Option<&T>,
    options: &CompareOptions,
) -> Score
where
    C: LeafComparator<T> + ?Sized,
{
    match (left, right) {
        (Some(l), Some(r)) if comparator.equal(l, r, options) => Score::FULL,
        (Some(_), Some(_)) => Score::ZERO,
        _ => Score::NotApplicable,
    }
}

/// Compares property values according to `property_level` and `id_level`
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyComparator;

impl PropertyComparator {
    fn check_path(property: &Property) -> Result<()> {
        if property.path.is_empty() {
            return Err(ExError::from(CompareError::InvalidProperty {
                path: String::new(),
                reason: format!("property '{}' has an empty path", property.name),
            }));
        }
        Ok(())
    }
}

impl LeafComparator<Property> for PropertyComparator {
    fn name(&self) -> &'static str {
        "property"
    }

    fn equal(&self, left: &Property, right: &Property, options: &CompareOptions) -> bool {
        if left.is_tag() || right.is_tag() {
            return options.id_level == IdLevel::None || left.value == right.value;
        }
        match options.property_level {
            PropertyLevel::None => true,
            PropertyLevel::Simple => left.level > 1 || left.value == right.value,
            PropertyLevel::All => left.value == right.value,
        }
    }

    fn score(
        &self,
        left: Option<&Property>,
        right: Option<&Property>,
        options: &CompareOptions,
    ) -> Result<Score> {
        for property in left.iter().chain(right.iter()) {
            Self::check_path(property)?;
        }
        if let (Some(l), Some(r)) = (left, right) {
            if l.path != r.path {
                return Err(ExError::from(CompareError::KeyMismatch {
                    left: l.path.clone(),
                    right: r.path.clone(),
                }));
            }
        }
        Ok(equality_score(self, left, right, options))
    }
}

/// Structural event comparison, relaxed by `event_level`
#[derive(Debug, Clone, Copy, Default)]
pub struct EventComparator;

impl LeafComparator<Event> for EventComparator {
    fn name(&self) -> &'static str {
        "event"
    }

    fn equal(&self, left: &Event, right: &Event, options: &CompareOptions) -> bool {
        match options.event_level {
            EventLevel::None => true,
            EventLevel::All => left.equal(right),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionComparator;

impl LeafComparator<PermissionId> for PermissionComparator {
    fn name(&self) -> &'static str {
        "permission"
    }

    fn equal(
        &self,
        left: &PermissionId,
        right: &PermissionId,
        _options: &CompareOptions,
    ) -> bool {
        left.equal(right)
    }
}

/// Artifact comparison at the depth chosen by `artifact_level`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactComparator;

impl LeafComparator<Artifact> for ArtifactComparator {
    fn name(&self) -> &'static str {
        "artifact"
    }

    fn equal(&self, left: &Artifact, right: &Artifact, options: &CompareOptions) -> bool {
        match options.artifact_level {
            ArtifactLevel::None => true,
            ArtifactLevel::Name => left.same_descriptor(right),
            ArtifactLevel::Content => left.equal(right),
        }
    }
}

type Boxed<T> = Box<dyn LeafComparator<T> + Send + Sync>;

/// The four leaf comparators used by the node comparator
pub struct Comparators {
    pub properties: Boxed<Property>,
    pub events: Boxed<Event>,
    pub permissions: Boxed<PermissionId>,
    pub artifacts: Boxed<Artifact>,
}

impl Comparators {
    pub fn with_properties<C>(mut self, comparator: C) -> Self
    where
        C: LeafComparator<Property> + Send + Sync + 'static,
    {
        self.properties = Box::new(comparator);
        self
    }

    pub fn with_events<C>(mut self, comparator: C) -> Self
    where
        C: LeafComparator<Event> + Send + Sync + 'static,
    {
        self.events = Box::new(comparator);
        self
    }

    pub fn with_permissions<C>(mut self, comparator: C) -> Self
    where
        C: LeafComparator<PermissionId> + Send + Sync + 'static,
    {
        self.permissions = Box::new(comparator);
        self
    }

    pub fn with_artifacts<C>(mut self, comparator: C) -> Self
    where
        C: LeafComparator<Artifact> + Send + Sync + 'static,
    {
        self.artifacts = Box::new(comparator);
        self
    }
}

impl Default for Comparators {
    fn default() -> Self {
        Self {
            properties: Box::new(PropertyComparator),
            events: Box::new(EventComparator),
            permissions: Box::new(PermissionComparator),
            artifacts: Box::new(ArtifactComparator),
        }
    }
}

impl std::fmt::Debug for Comparators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparators")
            .field("properties", &self.properties.name())
            .field("events", &self.events.name())
            .field("permissions", &self.permissions.name())
            .field("artifacts", &self.artifacts.name())
            .finish()
    }
}
