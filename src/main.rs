use eframe::egui;
use puppies::{
    gui::PuppyApp,
    logging::{
        init_logging,
        Verbosity,
    },
};

fn main() -> eframe::Result<()> {
    init_logging(Verbosity::from_env());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Puppies")
            .with_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native("Puppies", options, Box::new(|cc| Ok(Box::new(PuppyApp::new(cc)))))
}
