//! FILENAME: core/engine/src/record.rs
//! PURPOSE: One joined transaction row.
//! CONTEXT: Categorical fields are stored as interned ids into the owning
//! `Dataset`'s value stores; measures are stored inline. Records are built
//! only by `DatasetBuilder` and never change afterwards.

use crate::dimension::{Dimension, Measure};
use crate::intern::ValueId;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) order: ValueId,
    pub(crate) categories: [ValueId; Dimension::COUNT],
    pub(crate) measures: [f64; Measure::COUNT],
}

impl Record {
    /// Interned order identifier.
    pub fn order_id(&self) -> ValueId {
        self.order
    }

    /// Interned category for a dimension.
    pub fn category_id(&self, dimension: Dimension) -> ValueId {
        self.categories[dimension.index()]
    }

    pub fn measure(&self, measure: Measure) -> f64 {
        self.measures[measure.index()]
    }
}
