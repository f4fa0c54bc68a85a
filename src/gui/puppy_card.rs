//! The card shown for each puppy in the list view.
//!
//! Rendering is a projection of a `&Puppy`: the card keeps no state between
//! frames and never touches the store. The two controls hand their intent to
//! the caller, EDIT as a navigation intent and DELETE as a call to the
//! caller's delete callback with the puppy's id.

use eframe::egui::{
    self,
    Margin,
    RichText,
    Ui,
};

use super::{
    navigation::{
        NavigationIntent,
        Navigator,
    },
    theme::Theme,
};
use crate::core::{
    Puppy,
    PuppyId,
};

pub const EDIT_LABEL: &str = "EDIT";
pub const DELETE_LABEL: &str = "DELETE";
pub const BREED_LABEL: &str = "Breed";
pub const AGE_LABEL: &str = "Age";

const CARD_WIDTH: f32 = 220.0;

/// Everything the card displays, already turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub fields: [(&'static str, String); 2],
}

impl CardView {
    pub fn of(puppy: &Puppy) -> Self {
        CardView {
            title: puppy.name.clone(),
            fields: [(BREED_LABEL, puppy.breed.clone()), (AGE_LABEL, puppy.age.to_string())],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
}

/// Carries out a card action on behalf of `puppy`.
pub fn activate<F>(
    action: CardAction,
    puppy: &Puppy,
    navigator: &mut dyn Navigator,
    on_delete_requested: F,
) where
    F: FnOnce(&PuppyId),
{
    match action {
        CardAction::Edit => navigator.navigate(NavigationIntent::edit(puppy.clone())),
        CardAction::Delete => on_delete_requested(&puppy.id),
    }
}

pub struct PuppyCard<'a> {
    puppy: &'a Puppy,
    theme: &'a Theme,
}

impl<'a> PuppyCard<'a> {
    pub fn new(puppy: &'a Puppy, theme: &'a Theme) -> Self {
        Self { puppy, theme }
    }

    /// Draws the card and reports which control, if any, was clicked.
    pub fn render(&self, ui: &mut Ui) -> Option<CardAction> {
        let view = CardView::of(self.puppy);
        let ctx = ui.ctx().clone();
        let theme = self.theme;

        egui::Frame::group(ui.style())
            .fill(theme.card_fill(&ctx))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);

                ui.label(theme.heading(&ctx, &view.title).size(18.0));
                ui.separator();

                egui::Grid::new(("puppy_card_fields", self.puppy.id.as_str()))
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in &view.fields {
                            ui.label(theme.label(&ctx, label));
                            ui.label(value.as_str());
                            ui.end_row();
                        }
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    let on_fill = theme.on_fill(&ctx);
                    let edit = ui.add(
                        egui::Button::new(RichText::new(EDIT_LABEL).small().color(on_fill))
                            .fill(theme.warning(&ctx)),
                    );
                    ui.add_space(10.0);
                    let delete = ui.add(
                        egui::Button::new(RichText::new(DELETE_LABEL).small().color(on_fill))
                            .fill(theme.danger(&ctx)),
                    );

                    if edit.clicked() {
                        Some(CardAction::Edit)
                    } else if delete.clicked() {
                        Some(CardAction::Delete)
                    } else {
                        None
                    }
                })
                .inner
            })
            .inner
    }

    /// Draws the card and dispatches a clicked control straight away.
    pub fn show<F>(
        self,
        ui: &mut Ui,
        navigator: &mut dyn Navigator,
        on_delete_requested: F,
    ) -> Option<CardAction>
    where
        F: FnOnce(&PuppyId),
    {
        let action = self.render(ui);
        if let Some(action) = action {
            activate(action, self.puppy, navigator, on_delete_requested);
        }
        action
    }
}
