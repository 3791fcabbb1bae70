//! # Antenna Repository
//!
//! Owns the ordered antenna collection. Every write validates its draft first,
//! so a failed call never changes the collection.

use log::debug;

use crate::core::error::{Entity, FieldError, StoreError};
use crate::core::model::{Antenna, AntennaDraft, AntennaType, Location, next_id};

#[derive(Debug, Clone, Default)]
pub struct AntennaRepository {
    antennas: Vec<Antenna>,
}

impl AntennaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing collection (seed data, tests). Ids are taken as given.
    pub fn from_antennas(antennas: Vec<Antenna>) -> Self {
        Self { antennas }
    }

    pub fn list(&self) -> &[Antenna] {
        &self.antennas
    }

    pub fn get(&self, id: u32) -> Option<&Antenna> {
        self.antennas.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    pub fn create(&mut self, draft: AntennaDraft) -> Result<&Antenna, StoreError> {
        let (antenna_type, location) = validate(&draft)?;
        let id = next_id(&self.antennas)
            .ok_or(StoreError::IdsExhausted { entity: Entity::Antenna })?;
        debug!("Assigning antenna id {id} to {:?}", draft.name);
        self.antennas.push(Antenna {
            id,
            name: draft.name,
            antenna_type,
            frequency: draft.frequency,
            location,
            status: draft.status,
            description: draft.description,
            features: draft.features,
            last_maintenance: draft.last_maintenance,
        });
        Ok(&self.antennas[self.antennas.len() - 1])
    }

    /// Replace every field except `id`.
    pub fn update(&mut self, id: u32, draft: AntennaDraft) -> Result<&Antenna, StoreError> {
        let (antenna_type, location) = validate(&draft)?;
        let antenna = self
            .antennas
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound { entity: Entity::Antenna, id })?;
        *antenna = Antenna {
            id,
            name: draft.name,
            antenna_type,
            frequency: draft.frequency,
            location,
            status: draft.status,
            description: draft.description,
            features: draft.features,
            last_maintenance: draft.last_maintenance,
        };
        Ok(&*antenna)
    }

    /// Remove and return the antenna. Bookings naming it are left untouched.
    pub fn remove(&mut self, id: u32) -> Result<Antenna, StoreError> {
        let index = self
            .antennas
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound { entity: Entity::Antenna, id })?;
        Ok(self.antennas.remove(index))
    }
}

/// Name, type, frequency and location are mandatory.
fn validate(draft: &AntennaDraft) -> Result<(AntennaType, Location), StoreError> {
    let mut errors = Vec::new();
    if draft.name.trim().is_empty() {
        errors.push(FieldError::missing("name"));
    }
    if draft.antenna_type.is_none() {
        errors.push(FieldError::missing("type"));
    }
    if draft.frequency.trim().is_empty() {
        errors.push(FieldError::missing("frequency"));
    }
    if draft.location.is_none() {
        errors.push(FieldError::missing("location"));
    }
    match (draft.antenna_type, draft.location) {
        (Some(antenna_type), Some(location)) if errors.is_empty() => Ok((antenna_type, location)),
        _ => Err(StoreError::Validation(errors)),
    }
}
