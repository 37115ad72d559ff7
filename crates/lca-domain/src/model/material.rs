//! Material identity and per-kilogram impact figures

use std::fmt;
use std::str::FromStr;

use lca_types::Error;
use serde::{Deserialize, Serialize};

use super::analysis::ScaledImpact;

/// Base metal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Aluminum,
    Copper,
    Steel,
    Zinc,
    Nickel,
    Tin,
    Lead,
    Gold,
    Silver,
}

impl Metal {
    /// All metals in table order
    pub const ALL: [Metal; 9] = [
        Metal::Aluminum,
        Metal::Copper,
        Metal::Steel,
        Metal::Zinc,
        Metal::Nickel,
        Metal::Tin,
        Metal::Lead,
        Metal::Gold,
        Metal::Silver,
    ];

    /// Identifier fragment (e.g. "aluminum")
    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Aluminum => "aluminum",
            Metal::Copper => "copper",
            Metal::Steel => "steel",
            Metal::Zinc => "zinc",
            Metal::Nickel => "nickel",
            Metal::Tin => "tin",
            Metal::Lead => "lead",
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }

    /// Display label (e.g. "Aluminum")
    pub fn label(&self) -> &'static str {
        match self {
            Metal::Aluminum => "Aluminum",
            Metal::Copper => "Copper",
            Metal::Steel => "Steel",
            Metal::Zinc => "Zinc",
            Metal::Nickel => "Nickel",
            Metal::Tin => "Tin",
            Metal::Lead => "Lead",
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metal::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::MaterialNotFound(s.to_string()))
    }
}

/// Sourcing variant of a metal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Virgin,
    Recycled,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Virgin => "virgin",
            Variant::Recycled => "recycled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Virgin => "Virgin",
            Variant::Recycled => "Recycled",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Variant::Virgin => Variant::Recycled,
            Variant::Recycled => Variant::Virgin,
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virgin" => Ok(Variant::Virgin),
            "recycled" => Ok(Variant::Recycled),
            _ => Err(Error::MaterialNotFound(s.to_string())),
        }
    }
}

/// Material identifier, `<metal>_<virgin|recycled>`
///
/// Parsed once from the raw identifier so that variant and counterpart
/// derivation never depend on substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterialId {
    pub metal: Metal,
    pub variant: Variant,
}

impl MaterialId {
    pub fn new(metal: Metal, variant: Variant) -> Self {
        Self { metal, variant }
    }

    /// Same metal, opposite variant
    pub fn counterpart(&self) -> Self {
        Self::new(self.metal, self.variant.opposite())
    }

    /// Title-cased name with separators as spaces (e.g. "Aluminum Recycled")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.metal.label(), self.variant.label())
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.metal.as_str(), self.variant.as_str())
    }
}

impl FromStr for MaterialId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || Error::MaterialNotFound(s.to_string());
        let (metal, variant) = s.split_once('_').ok_or_else(not_found)?;
        let metal = metal.parse::<Metal>().map_err(|_| not_found())?;
        let variant = variant.parse::<Variant>().map_err(|_| not_found())?;
        Ok(Self::new(metal, variant))
    }
}

impl TryFrom<String> for MaterialId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaterialId> for String {
    fn from(id: MaterialId) -> Self {
        id.to_string()
    }
}

/// Impact per kilogram of material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactFigures {
    /// kg CO2e per kg
    pub carbon: f64,
    /// m³ per kg
    pub water: f64,
    /// kWh per kg
    pub energy: f64,
    /// kg per kg
    pub waste: f64,
}

impl ImpactFigures {
    pub const fn new(carbon: f64, water: f64, energy: f64, waste: f64) -> Self {
        Self {
            carbon,
            water,
            energy,
            waste,
        }
    }

    /// Scale linearly by quantity in kg
    pub fn scaled(&self, quantity: f64) -> ScaledImpact {
        ScaledImpact {
            carbon: self.carbon * quantity,
            water: self.water * quantity,
            energy: self.energy * quantity,
            waste: self.waste * quantity,
        }
    }
}

/// Entry of the impact table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub figures: ImpactFigures,
    /// Sustainability score (0-100)
    pub score: u8,
}

impl MaterialRecord {
    pub fn new(id: MaterialId, figures: ImpactFigures, score: u8) -> Self {
        Self { id, figures, score }
    }

    pub fn display_name(&self) -> String {
        self.id.display_name()
    }
}
