pub mod actions;
pub mod app;
pub mod edit_form;
pub mod error_modal;
pub mod navigation;
pub mod puppy_card;
pub mod theme;

pub use app::PuppyApp;
pub use navigation::{
    NavigationIntent,
    Navigator,
    Route,
    Router,
};
pub use puppy_card::{
    CardAction,
    CardView,
    PuppyCard,
};
