use fc_app::{AppResult, ComputeOutcome, CyclePhase, Session};
use fc_fluids::{
    CoolPropProvider, FluidState, ParamKind, ParamPair, Quantity, Species, StateParam,
    parse_quantity,
};

use crate::fluid_picker::FluidPicker;

pub struct FluidCalcApp {
    session: Session,
    picker: FluidPicker,
    species: Species,
    first_kind: ParamKind,
    second_kind: ParamKind,
    first_text: String,
    second_text: String,
    quality: f64,
    result: Option<FluidState>,
    error: Option<String>,
}

impl FluidCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Session::new(Box::new(CoolPropProvider::new())),
            picker: FluidPicker::default(),
            species: Species::Water,
            first_kind: ParamKind::Pressure,
            second_kind: ParamKind::Temperature,
            first_text: "1 atm".to_string(),
            second_text: "25C".to_string(),
            quality: 0.5,
            result: None,
            error: None,
        }
    }

    fn parse_param(&self, kind: ParamKind, text: &str) -> AppResult<StateParam> {
        let value = parse_quantity(text, Quantity::for_param(kind))?;
        Ok(StateParam::new(kind, value))
    }

    fn calculate(&mut self) {
        self.result = None;
        self.error = None;

        let first = match self.parse_param(self.first_kind, &self.first_text) {
            Ok(param) => param,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        let second = match self.parse_param(self.second_kind, &self.second_text) {
            Ok(param) => param,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        let pair = match ParamPair::new(first, second) {
            Ok(pair) => pair,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.session.begin(self.species, pair);
        match self.session.compute() {
            Ok(ComputeOutcome::Ready) => {
                self.result = self.session.render_properties().ok();
            }
            Ok(ComputeOutcome::NeedsQuality) => {
                // Quality input is shown below; nothing to render yet.
            }
            Err(e) => {
                self.error = Some(
                    self.session
                        .last_error()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string()),
                );
            }
        }
    }

    fn apply_quality(&mut self) {
        match self.session.resolve_quality(self.quality) {
            Ok(()) => {
                self.result = self.session.render_properties().ok();
                self.error = None;
            }
            Err(e) => {
                self.error = Some(
                    self.session
                        .last_error()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string()),
                );
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("input_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Fluid:");
                self.picker.show(ui, "fluid_picker", &mut self.species);
                ui.end_row();

                ui.label("First parameter:");
                egui::ComboBox::from_id_salt("first_kind")
                    .selected_text(self.first_kind.label())
                    .show_ui(ui, |ui| {
                        for kind in ParamKind::ALL {
                            ui.selectable_value(&mut self.first_kind, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label(format!("Value [{}]:", self.first_kind.si_unit()));
                ui.text_edit_singleline(&mut self.first_text);
                ui.end_row();

                // The second kind must stay distinct from the first.
                if self.second_kind == self.first_kind {
                    if let Some(kind) = self.first_kind.complement().next() {
                        self.second_kind = kind;
                    }
                }

                ui.label("Second parameter:");
                egui::ComboBox::from_id_salt("second_kind")
                    .selected_text(self.second_kind.label())
                    .show_ui(ui, |ui| {
                        for kind in self.first_kind.complement() {
                            ui.selectable_value(&mut self.second_kind, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label(format!("Value [{}]:", self.second_kind.si_unit()));
                ui.text_edit_singleline(&mut self.second_text);
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Calculate").clicked() {
            self.calculate();
        }
    }

    fn show_quality_prompt(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label("The state is two-phase. Specify the vapor quality:");
        ui.horizontal(|ui| {
            ui.add(
                egui::DragValue::new(&mut self.quality)
                    .range(0.0..=1.0)
                    .speed(0.01)
                    .fixed_decimals(2),
            );
            if ui.button("Apply quality").clicked() {
                self.apply_quality();
            }
        });
    }

    fn show_result(&self, ui: &mut egui::Ui, state: &FluidState) {
        use egui_extras::{Column, TableBuilder};

        ui.separator();
        ui.horizontal(|ui| {
            ui.strong("Phase:");
            ui.label(state.phase().label());
        });
        ui.add_space(4.0);

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(160.0).at_least(120.0)) // Property
            .column(Column::initial(140.0).at_least(100.0)) // Value
            .column(Column::remainder()) // Unit
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Property");
                });
                header.col(|ui| {
                    ui.strong("Value");
                });
                header.col(|ui| {
                    ui.strong("Unit");
                });
            })
            .body(|mut body| {
                for row in state.properties() {
                    body.row(20.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(row.name);
                        });
                        table_row.col(|ui| {
                            ui.monospace(fmt_value(row.value));
                        });
                        table_row.col(|ui| {
                            ui.label(row.unit);
                        });
                    });
                }
            });
    }
}

impl eframe::App for FluidCalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Fluid State Calculator");
            ui.label("Pick a fluid and two state parameters, then calculate.");
            ui.separator();

            self.show_form(ui);

            if self.session.phase() == CyclePhase::TwoPhaseNeedsQuality {
                self.show_quality_prompt(ui);
            }

            if let Some(error) = &self.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }

            if let Some(state) = &self.result {
                self.show_result(ui, state);
            }
        });
    }
}

/// Compact numeric formatting for the results grid.
fn fmt_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude >= 1.0e6 || magnitude < 1.0e-3) {
        format!("{value:.5e}")
    } else {
        format!("{value:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_and_small_values_use_scientific_notation() {
        assert_eq!(fmt_value(2.5e7), "2.50000e7");
        assert_eq!(fmt_value(1.2e-5), "1.20000e-5");
    }

    #[test]
    fn moderate_values_use_fixed_notation() {
        assert_eq!(fmt_value(997.047), "997.0470");
        assert_eq!(fmt_value(0.0), "0.0000");
    }
}
