//! Catalog samples and the filterable catalog view.

use std::{borrow::Cow, collections::BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::{Filterable, Predicates, distinct_values, filter_by_equality};

/// A product sample shown on the catalog page. Static, descriptive data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
  pub name:     String,
  /// Path or URL of the sample photo.
  pub image:    String,
  pub color:    String,
  pub material: String,
  pub finish:   String,
}

/// Sample fields addressable by equality filters.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Display,
  EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SampleAttribute {
  Name,
  Color,
  Material,
  Finish,
}

impl Filterable for Sample {
  type Attribute = SampleAttribute;

  fn attribute(&self, attr: SampleAttribute) -> Option<Cow<'_, str>> {
    let value = match attr {
      SampleAttribute::Name => &self.name,
      SampleAttribute::Color => &self.color,
      SampleAttribute::Material => &self.material,
      SampleAttribute::Finish => &self.finish,
    };
    Some(Cow::Borrowed(value))
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Distinct values per facet attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
  pub color:    BTreeSet<String>,
  pub material: BTreeSet<String>,
  pub finish:   BTreeSet<String>,
}

/// The fixed set of samples offered on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
  samples: Vec<Sample>,
}

impl Catalog {
  pub fn new(samples: Vec<Sample>) -> Self { Self { samples } }

  pub fn samples(&self) -> &[Sample] { &self.samples }

  pub fn facets(&self) -> Facets {
    Facets {
      color:    distinct_values(&self.samples, SampleAttribute::Color),
      material: distinct_values(&self.samples, SampleAttribute::Material),
      finish:   distinct_values(&self.samples, SampleAttribute::Finish),
    }
  }

  /// A fresh, unfiltered view over the samples.
  pub fn view(&self) -> CatalogView<'_> {
    CatalogView { samples: &self.samples, matches: None }
  }
}

/// One reader's view of the catalog.
///
/// `matches` is `None` until a filter is applied; `Some(vec![])` means a
/// filter was applied and nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
  samples: &'a [Sample],
  matches: Option<Vec<Sample>>,
}

impl CatalogView<'_> {
  /// Filter the samples and keep the result as this view's selection.
  pub fn apply(&mut self, predicates: &Predicates<SampleAttribute>) -> &[Sample] {
    self
      .matches
      .insert(filter_by_equality(self.samples, predicates))
  }

  pub fn is_filtered(&self) -> bool { self.matches.is_some() }

  /// The current selection, or every sample when nothing has been applied.
  pub fn visible(&self) -> &[Sample] {
    self.matches.as_deref().unwrap_or(self.samples)
  }
}
