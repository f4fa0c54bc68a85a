use eframe::egui;

use crate::core::PuppyError;

struct ShownError {
    title: String,
    message: String,
    hint: Option<String>,
    note: Option<String>,
}

impl ShownError {
    fn hint_for(error: &PuppyError) -> Option<String> {
        match error {
            PuppyError::Validation { field, .. } => Some(format!("Check the {field} field.")),
            PuppyError::NotFound(_) => {
                Some("The puppy may already have been removed.".to_string())
            }
            PuppyError::Json(_) | PuppyError::DuplicateId(_) => {
                Some("The kennel file is not in a shape this app can read.".to_string())
            }
            _ => None,
        }
    }
}

/// One error at a time; a newer error replaces the one on screen.
#[derive(Default)]
pub struct ErrorModal {
    shown: Option<ShownError>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, title: &str, error: &PuppyError, note: Option<String>) {
        self.shown = Some(ShownError {
            title: title.to_string(),
            message: error.to_string(),
            hint: ShownError::hint_for(error),
            note,
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(shown) = &self.shown else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&shown.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&shown.message);
            for extra in [&shown.hint, &shown.note].into_iter().flatten() {
                ui.label(egui::RichText::new(extra).weak());
            }
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.shown = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuppyId;

    #[test]
    fn test_show_error_picks_hint_and_keeps_note() {
        let mut modal = ErrorModal::new();
        modal.show_error(
            "Could not delete puppy",
            &PuppyError::NotFound(PuppyId::new("p9")),
            Some("Nothing was changed.".to_string()),
        );

        let shown = modal.shown.as_ref().unwrap();
        assert_eq!(shown.title, "Could not delete puppy");
        assert_eq!(shown.message, PuppyError::NotFound(PuppyId::new("p9")).to_string());
        assert_eq!(shown.hint.as_deref(), Some("The puppy may already have been removed."));
        assert_eq!(shown.note.as_deref(), Some("Nothing was changed."));
    }

    #[test]
    fn test_newer_error_replaces_shown_one() {
        let mut modal = ErrorModal::new();
        modal.show_error("First", &PuppyError::Custom("one".to_string()), None);
        modal.show_error("Second", &PuppyError::validation("name", "is required"), None);

        let shown = modal.shown.as_ref().unwrap();
        assert_eq!(shown.title, "Second");
        assert_eq!(shown.hint.as_deref(), Some("Check the name field."));
        assert!(shown.note.is_none());
    }
}
