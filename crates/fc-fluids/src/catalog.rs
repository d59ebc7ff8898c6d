use crate::Species;

/// One row of the user-facing fluid catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub species: Species,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const fn entry(
    species: Species,
    canonical_id: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
) -> FluidCatalogEntry {
    FluidCatalogEntry {
        species,
        canonical_id,
        display_name,
        aliases,
    }
}

const FLUID_CATALOG: [FluidCatalogEntry; 20] = [
    entry(Species::Water, "H2O", "Water", &["water", "steam"]),
    entry(Species::Air, "Air", "Air", &["atmosphere"]),
    entry(Species::N2, "N2", "Nitrogen", &["nitrogen"]),
    entry(Species::O2, "O2", "Oxygen", &["oxygen"]),
    entry(Species::H2, "H2", "Hydrogen", &["hydrogen"]),
    entry(Species::He, "He", "Helium", &["helium"]),
    entry(Species::Ar, "Ar", "Argon", &["argon"]),
    entry(Species::CO2, "CO2", "Carbon Dioxide", &["carbon dioxide"]),
    entry(Species::CO, "CO", "Carbon Monoxide", &["carbon monoxide"]),
    entry(Species::CH4, "CH4", "Methane", &["methane"]),
    entry(Species::Ethane, "Ethane", "Ethane", &["c2h6"]),
    entry(Species::Propane, "Propane", "Propane", &["c3h8", "n-propane"]),
    entry(Species::NButane, "nButane", "n-Butane", &["butane", "n-butane"]),
    entry(Species::Isobutane, "Isobutane", "Isobutane", &["i-butane"]),
    entry(Species::Ammonia, "NH3", "Ammonia", &["ammonia"]),
    entry(
        Species::NitrousOxide,
        "N2O",
        "Nitrous Oxide",
        &["nitrous oxide"],
    ),
    entry(Species::R32, "R32", "R32", &[]),
    entry(Species::R134a, "R134a", "R134a", &[]),
    entry(Species::R245fa, "R245fa", "R245fa", &[]),
    entry(Species::R1234yf, "R1234yf", "R1234yf", &[]),
];

/// The full fixed catalog. Never empty.
pub fn available_fluids() -> &'static [FluidCatalogEntry] {
    &FLUID_CATALOG
}

/// Catalog entries matching a free-text search query.
pub fn filter_fluids(query: &str) -> Vec<FluidCatalogEntry> {
    available_fluids()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
