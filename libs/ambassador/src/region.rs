//! Routing space regions held by the federate
//!
//! A [`Region`] is a local working copy: bounds are edited in place and only
//! reach the coordinator on `notify_about_region_modification`.

use hla_core::{DimensionHandle, Exception, ExceptionKind, Extent, RegionHandle, Result, SpaceHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    handle: RegionHandle,
    space: SpaceHandle,
    extents: Vec<Extent>,
    /// Extents as last acknowledged by the coordinator
    committed: Vec<Extent>,
}

impl Region {
    pub(crate) fn new(handle: RegionHandle, space: SpaceHandle, extents: Vec<Extent>) -> Self {
        Self {
            handle,
            space,
            committed: extents.clone(),
            extents,
        }
    }

    pub fn handle(&self) -> RegionHandle {
        self.handle
    }

    pub fn space_handle(&self) -> SpaceHandle {
        self.space
    }

    pub fn number_of_extents(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }

    /// Whether local edits are waiting to be sent
    pub fn is_modified(&self) -> bool {
        self.extents != self.committed
    }

    pub fn range_lower_bound(&self, extent: usize, dimension: DimensionHandle) -> Result<u64> {
        Ok(self
            .extent(extent)?
            .range(dimension)
            .map_or(0, |range| range.lower))
    }

    pub fn range_upper_bound(&self, extent: usize, dimension: DimensionHandle) -> Result<u64> {
        Ok(self
            .extent(extent)?
            .range(dimension)
            .map_or(u64::MAX, |range| range.upper))
    }

    pub fn set_range_lower_bound(&mut self, extent: usize, dimension: DimensionHandle, bound: u64) -> Result<()> {
        self.extent_mut(extent)?.range_mut(dimension).lower = bound;
        Ok(())
    }

    pub fn set_range_upper_bound(&mut self, extent: usize, dimension: DimensionHandle, bound: u64) -> Result<()> {
        self.extent_mut(extent)?.range_mut(dimension).upper = bound;
        Ok(())
    }

    pub(crate) fn commit(&mut self) {
        self.committed = self.extents.clone();
    }

    fn extent(&self, index: usize) -> Result<&Extent> {
        let count = self.extents.len();
        self.extents.get(index).ok_or_else(|| out_of_bounds(index, count))
    }

    fn extent_mut(&mut self, index: usize) -> Result<&mut Extent> {
        let count = self.extents.len();
        self.extents
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(index, count))
    }
}

fn out_of_bounds(index: usize, count: usize) -> Exception {
    Exception::new(
        ExceptionKind::ArrayIndexOutOfBounds,
        format!("extent {} of a region with {} extents", index, count),
    )
}
