use std::{
    any::{type_name, Any},
    cmp::Ordering,
};

use log::trace;
use rayon::slice::ParallelSliceMut;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::resource::ResourceRef,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Named resources first, by name; unnamed ones after, by id.
    #[default]
    Name,
    Id,
}

/// Comparator for [`ResourceRef`] collections.
///
/// The mode is captured by value, so two sorts running on different threads
/// with different modes never observe each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceOrder {
    pub mode: SortMode,
}

impl ResourceOrder {
    pub fn new(mode: SortMode) -> Self {
        Self { mode }
    }

    pub fn by_name() -> Self {
        Self::new(SortMode::Name)
    }

    pub fn by_id() -> Self {
        Self::new(SortMode::Id)
    }

    pub fn compare(&self, a: &ResourceRef, b: &ResourceRef) -> Ordering {
        if self.mode == SortMode::Id {
            return a.resource_id.cmp(&b.resource_id);
        }

        match (a.name(), b.name()) {
            (None, None) => a.resource_id.cmp(&b.resource_id),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a_name), Some(b_name)) => a_name.cmp(b_name),
        }
    }

    /// Stable sort; entries that compare equal keep their input order.
    pub fn sort(&self, resources: &mut [ResourceRef]) {
        trace!("sorting {} resources by {:?}", resources.len(), self.mode);
        resources.sort_by(|a, b| self.compare(a, b));
    }

    pub fn par_sort(&self, resources: &mut [ResourceRef]) {
        trace!(
            "sorting {} resources by {:?} in parallel",
            resources.len(),
            self.mode
        );
        resources.par_sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted<I>(&self, resources: I) -> Vec<ResourceRef>
    where
        I: IntoIterator<Item = ResourceRef>,
    {
        let mut resources: Vec<ResourceRef> = resources.into_iter().collect();
        self.sort(&mut resources);
        resources
    }
}

/// Adapter behind the untyped `compare_any` entry points.
///
/// `None` compares as less than any value. A value of another type is a
/// caller bug and is reported as [`Error::TypeMismatch`].
pub fn compare_any<T, F>(other: Option<&dyn Any>, typed: F) -> Result<Ordering>
where
    T: Any,
    F: FnOnce(&T) -> Ordering,
{
    let Some(other) = other else {
        return Ok(Ordering::Greater);
    };

    other
        .downcast_ref::<T>()
        .map(typed)
        .ok_or(Error::TypeMismatch {
            expected: type_name::<T>(),
        })
}
