//! Step outputs derived from a package descriptor.

use toml::Table;

use crate::domain::descriptor::{DEFAULT_TARGETS_KEY, PackageDescriptor};
use crate::domain::AppError;

pub const NAME_OUTPUT: &str = "name";
pub const DEFAULT_TARGETS_OUTPUT: &str = "default_targets";
pub const DOCS_FACETS_OUTPUT: &str = "docs_facets";

const DOCS_FACET_SUFFIX: &str = ":docs";

/// The three outputs published for a package.
///
/// All values are computed before any of them is written, so a failure leaves
/// the output channel untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorOutputs {
    pub name: String,
    pub default_targets: String,
    pub docs_facets: String,
}

impl DescriptorOutputs {
    /// Derive outputs from a parsed `lakefile.toml` document.
    ///
    /// An absent `name` yields an empty string. An absent `defaultTargets`, or
    /// either field having the wrong type, is an error.
    pub fn derive(document: &Table) -> Result<Self, AppError> {
        let descriptor = PackageDescriptor::from_document(document)?;
        let targets = descriptor
            .default_targets
            .as_deref()
            .ok_or_else(|| AppError::missing_field(DEFAULT_TARGETS_KEY, "is missing"))?;

        if descriptor.name.is_none() {
            tracing::warn!("lakefile has no `name`; publishing an empty `name` output");
        }

        Ok(Self {
            name: descriptor.name.clone().unwrap_or_default(),
            default_targets: serde_json::to_string(targets)?,
            docs_facets: docs_facets(targets),
        })
    }

    /// Outputs as `(key, value)` pairs in publication order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (NAME_OUTPUT, self.name.as_str()),
            (DEFAULT_TARGETS_OUTPUT, self.default_targets.as_str()),
            (DOCS_FACETS_OUTPUT, self.docs_facets.as_str()),
        ]
    }
}

/// Documentation-build variant of a target.
pub fn docs_facet(target: &str) -> String {
    format!("{target}{DOCS_FACET_SUFFIX}")
}

/// Space-joined docs facets for every target, in order.
pub fn docs_facets<S: AsRef<str>>(targets: &[S]) -> String {
    targets.iter().map(|t| docs_facet(t.as_ref())).collect::<Vec<_>>().join(" ")
}
