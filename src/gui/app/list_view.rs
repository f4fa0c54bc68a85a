use eframe::egui::{
    self,
    Ui,
};

use crate::{
    core::PuppyStore,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        navigation::{
            NavigationIntent,
            Navigator,
            NEW_PATH,
        },
        puppy_card::PuppyCard,
        theme::Theme,
    },
};

pub fn list_view(
    ui: &mut Ui,
    store: &PuppyStore,
    theme: &Theme,
    navigator: &mut dyn Navigator,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.heading(theme.heading(&ctx, "Puppies"));
        ui.add_space(12.0);
        if ui.button("➕ Add puppy").clicked() {
            navigator.navigate(NavigationIntent::to(NEW_PATH));
        }
    });
    ui.add_space(8.0);

    if store.is_empty() {
        ui.label(theme.label(&ctx, "No puppies yet."));
        return;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
            for puppy in store.list() {
                PuppyCard::new(puppy, theme).show(ui, navigator, |id| {
                    actions.push(UiAction::DeletePuppy(id.clone()))
                });
            }
        });
    });
}
