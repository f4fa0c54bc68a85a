use eframe::egui::{
    self,
    Ui,
};

use super::{
    actions::UiAction,
    navigation::Route,
    theme::Theme,
};
use crate::core::{
    Age,
    Puppy,
    PuppyDraft,
    PuppyError,
    PuppyId,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    New,
    Edit(PuppyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Submit,
    Cancel,
}

/// Form backing both the new and edit views. The edit view starts from the
/// puppy attached to the route rather than looking it up again.
#[derive(Debug, Clone, PartialEq)]
pub struct PuppyForm {
    mode: FormMode,
    // Age as stored, kept when the age text is left untouched.
    stored_age: Option<Age>,
    pub draft: PuppyDraft,
}

impl PuppyForm {
    pub fn new_puppy() -> Self {
        Self { mode: FormMode::New, stored_age: None, draft: PuppyDraft::default() }
    }

    pub fn edit(puppy: &Puppy) -> Self {
        Self {
            mode: FormMode::Edit(puppy.id.clone()),
            stored_age: Some(puppy.age.clone()),
            draft: PuppyDraft::from_puppy(puppy),
        }
    }

    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::List => None,
            Route::New => Some(Self::new_puppy()),
            Route::Edit(puppy) => Some(Self::edit(puppy)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::New => "New puppy",
            FormMode::Edit(_) => "Edit puppy",
        }
    }

    /// Turns the current draft into the store action it stands for.
    pub fn submit(&self) -> Result<UiAction, PuppyError> {
        match &self.mode {
            FormMode::New => {
                self.draft.validate()?;
                Ok(UiAction::AddPuppy(self.draft.clone()))
            }
            FormMode::Edit(id) => {
                let mut valid = self.draft.validate()?;
                if let Some(stored) = &self.stored_age {
                    if stored.to_string() == self.draft.age.trim() {
                        valid.age = stored.clone();
                    }
                }
                Ok(UiAction::SavePuppy(valid.into_puppy(id.clone())))
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &Theme) -> Option<FormOutcome> {
        let ctx = ui.ctx().clone();
        ui.heading(theme.heading(&ctx, self.title()));
        ui.add_space(8.0);

        egui::Grid::new("puppy_form").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut self.draft.name);
            ui.end_row();

            ui.label("Breed");
            ui.text_edit_singleline(&mut self.draft.breed);
            ui.end_row();

            ui.label("Age");
            ui.add(egui::TextEdit::singleline(&mut self.draft.age).hint_text("3 or \"8 weeks\""));
            ui.end_row();
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                Some(FormOutcome::Submit)
            } else if ui.button("Cancel").clicked() {
                Some(FormOutcome::Cancel)
            } else {
                None
            }
        })
        .inner
    }
}
