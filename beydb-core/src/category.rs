/// Part categories. Every Beyblade has exactly one part of each category.
///
/// The database stores the display name (e.g. `"Face Bolt"`), so
/// `display_name()` is also the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    FaceBolt,
    EnergyRing,
    FusionWheel,
    SpinTrack,
    PerformanceTip,
}

/// All part categories in slot order (top of the Beyblade to the tip).
const ALL_PART_TYPES: &[PartType] = &[
    PartType::FaceBolt,
    PartType::EnergyRing,
    PartType::FusionWheel,
    PartType::SpinTrack,
    PartType::PerformanceTip,
];

impl PartType {
    /// Name stored in the `parts.part_type` column.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FaceBolt => "Face Bolt",
            Self::EnergyRing => "Energy Ring",
            Self::FusionWheel => "Fusion Wheel",
            Self::SpinTrack => "Spin Track",
            Self::PerformanceTip => "Performance Tip",
        }
    }

    /// Lowercase aliases accepted when parsing user input.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FaceBolt => &["face bolt", "facebolt", "bolt", "fb"],
            Self::EnergyRing => &["energy ring", "energyring", "clear wheel", "ring", "er"],
            Self::FusionWheel => &["fusion wheel", "fusionwheel", "metal wheel", "wheel", "fw"],
            Self::SpinTrack => &["spin track", "spintrack", "track", "st"],
            Self::PerformanceTip => &["performance tip", "performancetip", "bottom", "tip", "pt"],
        }
    }

    /// All five categories in slot order.
    pub fn all() -> &'static [PartType] {
        ALL_PART_TYPES
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for PartType {
    type Err = crate::ParseError;

    /// Parse a part category from its display name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PART_TYPES
            .iter()
            .copied()
            .find(|t| t.aliases().contains(&lower.as_str()))
            .ok_or_else(|| crate::ParseError::UnknownPartType(s.to_string()))
    }
}

/// Battle style of an assembled Beyblade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeybladeType {
    Attack,
    Defense,
    Stamina,
    Balance,
}

const ALL_BEYBLADE_TYPES: &[BeybladeType] = &[
    BeybladeType::Attack,
    BeybladeType::Defense,
    BeybladeType::Stamina,
    BeybladeType::Balance,
];

impl BeybladeType {
    /// Name stored in the `beyblades.type` column.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Stamina => "Stamina",
            Self::Balance => "Balance",
        }
    }

    /// Comma-separated list of display names, for prompts and error messages.
    pub fn choices() -> String {
        ALL_BEYBLADE_TYPES
            .iter()
            .map(|t| t.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for BeybladeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for BeybladeType {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_BEYBLADE_TYPES
            .iter()
            .copied()
            .find(|t| t.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| crate::ParseError::UnknownBeybladeType(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
