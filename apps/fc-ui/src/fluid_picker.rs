use fc_fluids::{FluidCatalogEntry, Species, available_fluids};

/// Drop-down fluid selector with free-text filtering over display names,
/// canonical ids, and aliases.
#[derive(Default)]
pub struct FluidPicker {
    query: String,
}

impl FluidPicker {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        selected: &mut Species,
    ) -> bool {
        let mut changed = false;

        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected_text(*selected))
            .width(280.0)
            .show_ui(ui, |ui| {
                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .hint_text("Search name, id, or alias"),
                );
                search.request_focus();
                ui.separator();

                let matches: Vec<&FluidCatalogEntry> = available_fluids()
                    .iter()
                    .filter(|entry| entry.matches_query(&self.query))
                    .collect();

                if matches.is_empty() {
                    ui.weak(format!("Nothing matches '{}'", self.query.trim()));
                    return;
                }

                egui::ScrollArea::vertical()
                    .min_scrolled_height(120.0)
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for entry in matches {
                            let label = row_label(entry, &self.query);
                            if ui
                                .selectable_value(selected, entry.species, label)
                                .changed()
                            {
                                changed = true;
                                // Next open starts with the full list.
                                self.query.clear();
                            }
                        }
                    });
            });

        changed
    }
}

fn selected_text(species: Species) -> String {
    format!("{} ({})", species.display_name(), species.key())
}

/// Row text, surfacing the alias when that is what the query hit.
fn row_label(entry: &FluidCatalogEntry, query: &str) -> String {
    match matched_alias(entry, query) {
        Some(alias) => format!(
            "{} ({}) [{alias}]",
            entry.display_name, entry.canonical_id
        ),
        None => format!("{} ({})", entry.display_name, entry.canonical_id),
    }
}

/// The alias a query matched through, if it matched neither name nor id.
fn matched_alias(entry: &FluidCatalogEntry, query: &str) -> Option<&'static str> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty()
        || entry.display_name.to_ascii_lowercase().contains(&query)
        || entry.canonical_id.to_ascii_lowercase().contains(&query)
    {
        return None;
    }
    entry
        .aliases
        .iter()
        .copied()
        .find(|alias| alias.to_ascii_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> &'static FluidCatalogEntry {
        available_fluids()
            .iter()
            .find(|entry| entry.species == Species::Water)
            .unwrap()
    }

    #[test]
    fn alias_hit_is_surfaced_in_the_row() {
        assert_eq!(matched_alias(water(), "steam"), Some("steam"));
        assert_eq!(row_label(water(), "steam"), "Water (H2O) [steam]");
    }

    #[test]
    fn name_and_id_hits_show_the_plain_row() {
        assert_eq!(matched_alias(water(), "water"), None);
        assert_eq!(matched_alias(water(), "h2o"), None);
        assert_eq!(row_label(water(), ""), "Water (H2O)");
    }

    #[test]
    fn selected_text_combines_name_and_key() {
        assert_eq!(selected_text(Species::NitrousOxide), "Nitrous Oxide (N2O)");
    }
}
