use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    order::{compare_any, ResourceOrder},
    style::{PlainStyler, Styler, Tone},
};

/// How a [`ResourceRef`] is laid out when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFormat {
    /// Id right-aligned to the resource's alignment, then `| name` as a hint.
    #[default]
    Hint,
    Id,
    /// Name, or the id when the resource has no name.
    Name,
    /// `id [name]`.
    IdAndName,
}

/// A cloud resource referenced by its id, with the display name the
/// provider reports for it, if any.
///
/// Two references are equal when their ids are; the name and the alignment
/// are display data.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ResourceRef {
    pub resource_id: String,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub resource_name: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub alignment: usize,
}

impl ResourceRef {
    pub fn new(
        resource_id: impl Into<String>,
        resource_name: impl Into<String>,
        alignment: usize,
    ) -> Self {
        Self::from_parts(resource_id, Some(resource_name.into()), alignment)
    }

    pub fn from_parts(
        resource_id: impl Into<String>,
        resource_name: Option<String>,
        alignment: usize,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_name,
            alignment,
        }
    }

    pub fn id(&self) -> &str {
        &self.resource_id
    }

    /// The display name; an empty name counts as no name.
    pub fn name(&self) -> Option<&str> {
        self.resource_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn has_name(&self) -> bool {
        self.name().is_some()
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Untyped comparison under `order`. Any reference compares greater
    /// than a missing one.
    pub fn compare_any(&self, other: Option<&dyn Any>, order: ResourceOrder) -> Result<Ordering> {
        compare_any(other, |that: &Self| order.compare(self, that))
    }

    pub fn render(&self, format: ResourceFormat, styler: &dyn Styler) -> String {
        let Some(name) = self.name() else {
            return self.resource_id.clone();
        };

        match format {
            ResourceFormat::Hint => format!(
                "{:>width$} {} ",
                self.resource_id,
                styler.paint(Tone::Hint, &format!("| {name}")),
                width = self.alignment
            ),
            ResourceFormat::Id => self.resource_id.clone(),
            ResourceFormat::Name => name.to_string(),
            ResourceFormat::IdAndName => format!(
                "{} {}",
                self.resource_id,
                styler.paint(Tone::Name, &format!("[{name}]"))
            ),
        }
    }
}

impl PartialEq for ResourceRef {
    fn eq(&self, other: &Self) -> bool {
        self.resource_id == other.resource_id
    }
}

impl Eq for ResourceRef {}

impl Hash for ResourceRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_id.hash(state);
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ResourceFormat::Hint, &PlainStyler))
    }
}
