//! Supported fluid substances.

use std::fmt;
use std::str::FromStr;

/// Fluids exposed to the user, all backed by CoolProp pure or pseudo-pure
/// equations of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Water (H₂O)
    Water,
    /// Air (pseudo-pure backend fluid)
    Air,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Hydrogen (H₂)
    H2,
    /// Helium (He)
    He,
    /// Argon (Ar)
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Methane (CH₄)
    CH4,
    /// Ethane
    Ethane,
    /// Propane
    Propane,
    /// n-Butane
    NButane,
    /// Isobutane
    Isobutane,
    /// Ammonia (NH₃)
    Ammonia,
    /// Nitrous oxide (N₂O)
    NitrousOxide,
    /// Refrigerant R32
    R32,
    /// Refrigerant R134a
    R134a,
    /// Refrigerant R245fa
    R245fa,
    /// Refrigerant R1234yf
    R1234yf,
}

impl Species {
    pub const ALL: [Species; 20] = [
        Species::Water,
        Species::Air,
        Species::N2,
        Species::O2,
        Species::H2,
        Species::He,
        Species::Ar,
        Species::CO2,
        Species::CO,
        Species::CH4,
        Species::Ethane,
        Species::Propane,
        Species::NButane,
        Species::Isobutane,
        Species::Ammonia,
        Species::NitrousOxide,
        Species::R32,
        Species::R134a,
        Species::R245fa,
        Species::R1234yf,
    ];

    /// Stable identifier used in CLI arguments and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Species::Water => "H2O",
            Species::Air => "Air",
            Species::N2 => "N2",
            Species::O2 => "O2",
            Species::H2 => "H2",
            Species::He => "He",
            Species::Ar => "Ar",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::CH4 => "CH4",
            Species::Ethane => "Ethane",
            Species::Propane => "Propane",
            Species::NButane => "nButane",
            Species::Isobutane => "Isobutane",
            Species::Ammonia => "NH3",
            Species::NitrousOxide => "N2O",
            Species::R32 => "R32",
            Species::R134a => "R134a",
            Species::R245fa => "R245fa",
            Species::R1234yf => "R1234yf",
        }
    }

    /// Human-readable name for pickers and listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Water => "Water",
            Species::Air => "Air",
            Species::N2 => "Nitrogen",
            Species::O2 => "Oxygen",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CO2 => "Carbon Dioxide",
            Species::CO => "Carbon Monoxide",
            Species::CH4 => "Methane",
            Species::Ethane => "Ethane",
            Species::Propane => "Propane",
            Species::NButane => "n-Butane",
            Species::Isobutane => "Isobutane",
            Species::Ammonia => "Ammonia",
            Species::NitrousOxide => "Nitrous Oxide",
            Species::R32 => "R32",
            Species::R134a => "R134a",
            Species::R245fa => "R245fa",
            Species::R1234yf => "R1234yf",
        }
    }

    /// Fluid name understood by the CoolProp HEOS backend.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Species::Water => "Water",
            Species::Air => "Air",
            Species::N2 => "Nitrogen",
            Species::O2 => "Oxygen",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CO2 => "CarbonDioxide",
            Species::CO => "CarbonMonoxide",
            Species::CH4 => "Methane",
            Species::Ethane => "Ethane",
            Species::Propane => "n-Propane",
            Species::NButane => "n-Butane",
            Species::Isobutane => "IsoButane",
            Species::Ammonia => "Ammonia",
            Species::NitrousOxide => "NitrousOxide",
            Species::R32 => "R32",
            Species::R134a => "R134a",
            Species::R245fa => "R245fa",
            Species::R1234yf => "R1234yf",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Species {
    type Err = String;

    /// Accepts the stable key or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        Species::ALL
            .into_iter()
            .find(|sp| {
                sp.key().eq_ignore_ascii_case(query)
                    || sp.display_name().eq_ignore_ascii_case(query)
            })
            .ok_or_else(|| format!("unknown fluid '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for species in Species::ALL {
            assert!(seen.insert(species.key()), "duplicate key: {}", species.key());
        }
    }

    #[test]
    fn parse_by_key_and_display_name() {
        assert_eq!("H2O".parse::<Species>().unwrap(), Species::Water);
        assert_eq!("water".parse::<Species>().unwrap(), Species::Water);
        assert_eq!("n2o".parse::<Species>().unwrap(), Species::NitrousOxide);
        assert!("unobtainium".parse::<Species>().is_err());
    }

    #[test]
    fn every_species_has_a_backend_name() {
        for species in Species::ALL {
            assert!(!species.coolprop_name().is_empty());
        }
    }
}
