use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use donor_core::DonorState;
use shared::{
    domain::{BloodGroupFilter, Donor, DonorId},
    error::FetchFailure,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub const APP_TITLE: &str = "Community Blood Donor Finder";

const CARD_WIDTH: f32 = 240.0;
const AVAILABLE_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const NOT_AVAILABLE_COLOR: egui::Color32 = egui::Color32::from_rgb(218, 54, 51);

pub struct DonorFinderApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: DonorState,
}

impl DonorFinderApp {
    /// Builds the window state and queues the one startup load.
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: DonorState::new(),
        };
        if let Err(err) = dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadDonors) {
            app.state
                .apply_load_outcome(Err(FetchFailure::Transport(err.to_string())));
        }
        app
    }

    #[cfg(test)]
    fn state(&self) -> &DonorState {
        &self.state
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => tracing::debug!("{message}"),
                UiEvent::DonorsLoaded(outcome) => self.state.apply_load_outcome(outcome),
            }
        }
    }

    fn show_filters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut selected = self.state.criteria.blood_group;
            egui::ComboBox::from_id_salt("blood_group_filter")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for option in BloodGroupFilter::options() {
                        ui.selectable_value(&mut selected, option, option.label());
                    }
                });
            if selected != self.state.criteria.blood_group {
                self.state.set_blood_group(selected);
            }

            ui.add(
                egui::TextEdit::singleline(&mut self.state.criteria.search_city)
                    .hint_text("Search by city...")
                    .desired_width(220.0),
            );
        });
    }

    fn show_summary(&self, ui: &mut egui::Ui) {
        let summary = self.state.summary();
        ui.label(format!("Total donors: {}", summary.total));
        ui.label(format!("Available donors: {}", summary.available));
    }

    fn show_donor_grid(&mut self, ui: &mut egui::Ui) {
        let mut requested: Option<DonorId> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.style_mut().spacing.item_spacing = egui::vec2(12.0, 12.0);
                    for donor in self.state.filtered_donors() {
                        if donor_card(ui, donor) {
                            requested = Some(donor.id);
                        }
                    }
                });
            });

        if let Some(id) = requested {
            self.state.handle_request(id);
        }
    }
}

/// Renders one donor card; returns true when "Request Help" was clicked.
fn donor_card(ui: &mut egui::Ui, donor: &Donor) -> bool {
    let mut clicked = false;
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.heading(&donor.name);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Blood Group:").strong());
                    ui.label(donor.blood_group.label());
                });
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("City:").strong());
                    ui.label(&donor.city);
                });
                ui.label(
                    egui::RichText::new(donor.availability_label())
                        .color(availability_color(donor)),
                );
                let button = egui::Button::new(donor.request_label());
                clicked = ui.add_enabled(donor.can_request(), button).clicked();
            });
        });
    clicked
}

fn availability_color(donor: &Donor) -> egui::Color32 {
    if donor.available {
        AVAILABLE_COLOR
    } else {
        NOT_AVAILABLE_COLOR
    }
}

impl eframe::App for DonorFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.add_space(8.0);

            self.show_filters(ui);
            ui.add_space(6.0);
            self.show_summary(ui);

            if self.state.is_loading() {
                ui.label(egui::RichText::new("Loading donors...").italics());
            }

            if self.state.shows_empty_state() {
                ui.label("No donors found");
            }

            if !self.state.is_loading() {
                ui.add_space(8.0);
                self.show_donor_grid(ui);
            }
        });

        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
