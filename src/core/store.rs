use std::{
    collections::HashSet,
    path::Path,
};

use tracing::info;

use super::{
    errors::PuppyError,
    models::{
        Puppy,
        PuppyDraft,
        PuppyId,
    },
};
use crate::persistence::{
    load_json_from,
    save_json_to,
};

/// The container's collection of puppies, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct PuppyStore {
    puppies: Vec<Puppy>,
}

impl PuppyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_puppies(puppies: Vec<Puppy>) -> Result<Self, PuppyError> {
        let mut seen = HashSet::new();
        for puppy in &puppies {
            if !seen.insert(&puppy.id) {
                return Err(PuppyError::DuplicateId(puppy.id.clone()));
            }
        }
        Ok(Self { puppies })
    }

    pub fn list(&self) -> &[Puppy] {
        &self.puppies
    }

    pub fn len(&self) -> usize {
        self.puppies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puppies.is_empty()
    }

    pub fn add(&mut self, draft: &PuppyDraft) -> Result<Puppy, PuppyError> {
        let puppy = draft.validate()?.into_puppy(PuppyId::generate());
        info!(id = %puppy.id, name = %puppy.name, "Added puppy");
        self.puppies.push(puppy.clone());
        Ok(puppy)
    }

    pub fn update(&mut self, puppy: Puppy) -> Result<(), PuppyError> {
        let slot = self
            .puppies
            .iter_mut()
            .find(|p| p.id == puppy.id)
            .ok_or_else(|| PuppyError::NotFound(puppy.id.clone()))?;
        info!(id = %puppy.id, "Updated puppy");
        *slot = puppy;
        Ok(())
    }

    pub fn delete(&mut self, id: &PuppyId) -> Result<Puppy, PuppyError> {
        let index = self
            .puppies
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| PuppyError::NotFound(id.clone()))?;
        let removed = self.puppies.remove(index);
        info!(id = %removed.id, name = %removed.name, "Deleted puppy");
        Ok(removed)
    }

    /// Loads a kennel file. A missing file is an empty kennel.
    pub fn load(path: &Path) -> Result<Self, PuppyError> {
        let puppies: Vec<Puppy> = load_json_from(path)?;
        Self::from_puppies(puppies)
    }

    pub fn save(&self, path: &Path) -> Result<(), PuppyError> {
        save_json_to(&self.puppies, path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::models::Age;

    fn kennel() -> PuppyStore {
        PuppyStore::from_puppies(vec![
            Puppy::new("p1", "Rex", "Labrador", 3u32),
            Puppy::new("p2", "Bo", "Pug", "10 weeks"),
        ])
        .unwrap()
    }

    fn draft(name: &str, breed: &str, age: &str) -> PuppyDraft {
        PuppyDraft { name: name.to_string(), breed: breed.to_string(), age: age.to_string() }
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut store = PuppyStore::new();
        let a = store.add(&draft("Rex", "Labrador", "3")).unwrap();
        let b = store.add(&draft("Rex", "Labrador", "3")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list(), &[a, b][..]);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut store = PuppyStore::new();
        assert!(matches!(
            store.add(&draft("Rex", "", "3")),
            Err(PuppyError::Validation { field: "breed", .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = kennel();
        let mut rex = store.list()[0].clone();
        rex.age = Age::from(4u32);
        store.update(rex).unwrap();

        assert_eq!(store.list()[0].age, Age::from(4u32));
        assert_eq!(store.list()[1].name, "Bo");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = kennel();
        let ghost = Puppy::new("nope", "Ghost", "Husky", 1u32);
        assert!(matches!(store.update(ghost), Err(PuppyError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let mut store = kennel();
        let removed = store.delete(&PuppyId::new("p1")).unwrap();
        assert_eq!(removed.name, "Rex");
        assert_eq!(store.len(), 1);
        assert!(matches!(store.delete(&PuppyId::new("p1")), Err(PuppyError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = PuppyStore::from_puppies(vec![
            Puppy::new("p1", "Rex", "Labrador", 3u32),
            Puppy::new("p1", "Max", "Beagle", 2u32),
        ]);
        assert!(matches!(result, Err(PuppyError::DuplicateId(id)) if id.as_str() == "p1"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("puppies_store_test_{}.json", uuid::Uuid::new_v4()));

        let store = kennel();
        store.save(&path).unwrap();
        let loaded = PuppyStore::load(&path).unwrap();
        assert_eq!(loaded.list(), store.list());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let path = std::env::temp_dir()
            .join(format!("puppies_missing_{}.json", uuid::Uuid::new_v4()));
        assert!(PuppyStore::load(&path).unwrap().is_empty());
    }
}
