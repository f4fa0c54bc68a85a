mod list_view;

use std::path::PathBuf;

use eframe::egui;
use list_view::list_view;
use tracing::{
    error,
    info,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    edit_form::{
        FormOutcome,
        PuppyForm,
    },
    error_modal::ErrorModal,
    navigation::{
        NavigationIntent,
        Navigator,
        Route,
        Router,
    },
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        settings::SETTINGS_FILE,
        AppSettings,
        PuppyError,
        PuppyStore,
    },
    persistence::{
        get_data_file_path,
        load_json_or_default,
        save_json,
    },
};

/// The container: owns the puppies, the route and every mutation. Cards and
/// forms only ever hand it actions and navigation intents.
pub struct PuppyApp {
    // Data
    store: PuppyStore,
    data_path: Option<PathBuf>,

    // Configuration
    settings: AppSettings,

    // UI State
    router: Router,
    form: Option<PuppyForm>,
    actions: ActionQueue,
    theme: Theme,
    error_modal: ErrorModal,
}

impl PuppyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<AppSettings>(SETTINGS_FILE);
        let mut app = Self::open(get_data_file_path(&settings.data_file));

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.set_zoom_factor(settings.zoom);

        app.settings = settings;
        app
    }

    /// Loads the kennel at `data_path`. If it cannot be read the session
    /// starts empty and read-only, so the unreadable file is left alone.
    pub fn open(data_path: PathBuf) -> Self {
        match PuppyStore::load(&data_path) {
            Ok(store) => {
                info!(count = store.len(), path = %data_path.display(), "Loaded kennel");
                Self::with_store(store, Some(data_path))
            }
            Err(e) => {
                error!("Failed to load {}: {}", data_path.display(), e);
                let mut app = Self::with_store(PuppyStore::new(), None);
                app.error_modal.show_error(
                    "Could not load puppies",
                    &e,
                    Some(format!(
                        "{} was left untouched. Changes made now will not be saved.",
                        data_path.display()
                    )),
                );
                app
            }
        }
    }

    /// An app over `store` that writes to `data_path` when given, and
    /// otherwise keeps everything in memory.
    pub fn with_store(store: PuppyStore, data_path: Option<PathBuf>) -> Self {
        Self {
            store,
            data_path,
            settings: AppSettings::default(),
            router: Router::new(),
            form: None,
            actions: ActionQueue::new(),
            theme: Theme::kennel(),
            error_modal: ErrorModal::new(),
        }
    }

    pub fn store(&self) -> &PuppyStore {
        &self.store
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn is_read_only(&self) -> bool {
        self.data_path.is_none()
    }

    pub fn form_mut(&mut self) -> Option<&mut PuppyForm> {
        self.form.as_mut()
    }

    pub fn navigator(&mut self) -> &mut dyn Navigator {
        &mut self.router
    }

    pub fn push_action(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    /// Applies the frame's actions and route changes. Returns whatever went
    /// wrong; the caller decides how to show it.
    pub fn process_frame(&mut self) -> Vec<PuppyError> {
        let mut errors = self.apply_actions();
        errors.extend(self.sync_route());
        errors
    }

    fn apply_actions(&mut self) -> Vec<PuppyError> {
        let mut errors = Vec::new();
        if self.actions.is_empty() {
            return errors;
        }

        for action in self.actions.take_all() {
            if let Err(e) = self.apply_action(action) {
                errors.push(e);
            }
        }

        errors
    }

    fn apply_action(&mut self, action: UiAction) -> Result<(), PuppyError> {
        match action {
            UiAction::DeletePuppy(id) => {
                self.store.delete(&id)?;
                self.persist()?;
            }
            UiAction::SavePuppy(puppy) => {
                self.store.update(puppy)?;
                self.persist()?;
                self.router.navigate(NavigationIntent::list());
            }
            UiAction::AddPuppy(draft) => {
                self.store.add(&draft)?;
                self.persist()?;
                self.router.navigate(NavigationIntent::list());
            }
            UiAction::ToggleTheme => {
                self.settings.dark_mode = !self.settings.dark_mode;
                save_json(&self.settings, SETTINGS_FILE)?;
            }
        }
        Ok(())
    }

    fn sync_route(&mut self) -> Vec<PuppyError> {
        if !self.router.has_pending() {
            return Vec::new();
        }
        let errors = self.router.resolve();
        self.form = PuppyForm::for_route(self.router.current());
        errors
    }

    fn persist(&self) -> Result<(), PuppyError> {
        match &self.data_path {
            Some(path) => self.store.save(path),
            None => Ok(()),
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        let read_only = self.is_read_only();
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::containers::menu::Bar::new().ui(ui, |ui| {
                ui.label(self.theme.heading(ctx, "🐶 Kennel"));
                if read_only {
                    ui.label(self.theme.label(ctx, "read-only"))
                        .on_hover_text("Changes in this session are not saved");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.settings.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        self.actions.push(UiAction::ToggleTheme);
                    }
                });
            });
        });
    }

    fn form_view(&mut self, ui: &mut egui::Ui) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match form.show(ui, &self.theme) {
            Some(FormOutcome::Submit) => match form.submit() {
                Ok(action) => self.actions.push(action),
                Err(e) => self.error_modal.show_error("Cannot save puppy", &e, None),
            },
            Some(FormOutcome::Cancel) => self.router.navigate(NavigationIntent::list()),
            None => {}
        }
    }
}

impl eframe::App for PuppyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.top_bar(ctx);

        let on_list = matches!(self.router.current(), Route::List);
        egui::CentralPanel::default().show(ctx, |ui| {
            if on_list {
                list_view(ui, &self.store, &self.theme, &mut self.router, &mut self.actions);
            } else {
                self.form_view(ui);
            }
        });

        let was_dark = self.settings.dark_mode;
        for e in self.process_frame() {
            error!("{}", e);
            self.error_modal.show_error("Something went wrong", &e, None);
        }
        if was_dark != self.settings.dark_mode {
            ctx.set_theme(if self.settings.dark_mode {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            });
        }

        self.error_modal.show(ctx);
    }
}
