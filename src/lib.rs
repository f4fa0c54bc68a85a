pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;

pub use crate::core::{
    Age,
    Puppy,
    PuppyDraft,
    PuppyError,
    PuppyId,
    PuppyStore,
};
