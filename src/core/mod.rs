pub mod errors;
pub mod models;
pub mod settings;
pub mod store;

pub use errors::PuppyError;
pub use models::{
    Age,
    Puppy,
    PuppyDraft,
    PuppyId,
};
pub use settings::AppSettings;
pub use store::PuppyStore;
