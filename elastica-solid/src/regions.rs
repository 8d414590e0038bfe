//! Assignment of materials to tagged regions of a domain.
//!
//! Meshes for composite bodies typically tag each cell with the physical region it belongs
//! to, for example an inclusion and the surrounding matrix. [`RegionMaterials`] maps such
//! tags to the material that governs the region.
use crate::LinearElasticMaterial;
use elastica::nalgebra::Vector6;
use elastica::Real;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::error::Error;
use std::fmt;

/// Integer tag identifying a physical region.
pub type RegionTag = i32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnknownRegionError {
    tag: RegionTag,
}

impl UnknownRegionError {
    pub fn tag(&self) -> RegionTag {
        self.tag
    }
}

impl fmt::Display for UnknownRegionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No material assigned to region {}", self.tag)
    }
}

impl Error for UnknownRegionError {}

/// A table of materials indexed by region tag.
#[derive(Debug, Clone)]
pub struct RegionMaterials<M> {
    materials: FxHashMap<RegionTag, M>,
}

impl<M> Default for RegionMaterials<M> {
    fn default() -> Self {
        Self {
            materials: FxHashMap::default(),
        }
    }
}

impl<M> RegionMaterials<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `material` assigned to the region `tag`.
    pub fn with_region(mut self, tag: RegionTag, material: M) -> Self {
        self.insert(tag, material);
        self
    }

    /// Assigns `material` to the region `tag`, returning the previously assigned material.
    pub fn insert(&mut self, tag: RegionTag, material: M) -> Option<M> {
        self.materials.insert(tag, material)
    }

    pub fn get(&self, tag: RegionTag) -> Option<&M> {
        self.materials.get(&tag)
    }

    pub fn material_for(&self, tag: RegionTag) -> Result<&M, UnknownRegionError> {
        self.get(tag).ok_or(UnknownRegionError { tag })
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// The tags of all regions with an assigned material, in increasing order.
    pub fn tags(&self) -> Vec<RegionTag> {
        let mut tags: Vec<_> = self.materials.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Compute the stress at each point with the material of the region the point belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the tags has no assigned material.
    ///
    /// # Panics
    ///
    /// Panics if `tags` and `strains` have different lengths.
    pub fn compute_stresses_par<T>(
        &self,
        tags: &[RegionTag],
        strains: &[Vector6<T>],
    ) -> Result<Vec<Vector6<T>>, UnknownRegionError>
    where
        T: Real,
        M: LinearElasticMaterial<T> + Sync,
    {
        assert_eq!(tags.len(), strains.len(), "Number of tags must match number of strains");
        tags.par_iter()
            .zip(strains.par_iter())
            .map(|(&tag, strain)| {
                self.material_for(tag)
                    .map(|material| material.compute_stress(strain))
            })
            .collect()
    }
}

impl<M> FromIterator<(RegionTag, M)> for RegionMaterials<M> {
    fn from_iter<I: IntoIterator<Item = (RegionTag, M)>>(iter: I) -> Self {
        Self {
            materials: iter.into_iter().collect(),
        }
    }
}
