use serde::{Deserialize, Serialize};
use std::fmt;

/// The family an element is classified under in the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementGroup {
    #[serde(rename = "Nonmetal")]
    Nonmetal,
    #[serde(rename = "Noble Gas")]
    NobleGas,
    #[serde(rename = "Alkali Metal")]
    AlkaliMetal,
    #[serde(rename = "Alkaline Earth Metal")]
    AlkalineEarthMetal,
    #[serde(rename = "Metalloid")]
    Metalloid,
    #[serde(rename = "Halogen")]
    Halogen,
    #[serde(rename = "Post-transition Metal")]
    PostTransitionMetal,
    #[serde(rename = "Transition Metal")]
    TransitionMetal,
    #[serde(rename = "Lanthanide")]
    Lanthanide,
    #[serde(rename = "Actinide")]
    Actinide,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ElementGroup {
    pub const fn label(&self) -> &'static str {
        match self {
            ElementGroup::Nonmetal => "Nonmetal",
            ElementGroup::NobleGas => "Noble Gas",
            ElementGroup::AlkaliMetal => "Alkali Metal",
            ElementGroup::AlkalineEarthMetal => "Alkaline Earth Metal",
            ElementGroup::Metalloid => "Metalloid",
            ElementGroup::Halogen => "Halogen",
            ElementGroup::PostTransitionMetal => "Post-transition Metal",
            ElementGroup::TransitionMetal => "Transition Metal",
            ElementGroup::Lanthanide => "Lanthanide",
            ElementGroup::Actinide => "Actinide",
            ElementGroup::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the element reference dataset.
///
/// Field order matches the serialized layout of the dataset file:
/// `name`, `symbol`, `atomic_number`, `atomic_mass`, `group`, `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    /// 1-based position in the canonical ordering.
    pub atomic_number: u32,
    /// Standard atomic weight in daltons.
    pub atomic_mass: f64,
    pub group: ElementGroup,
    /// URL of the reference the atomic mass was taken from.
    pub source: String,
}
