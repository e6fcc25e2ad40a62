//! The speed-dial slot contract.
//!
//! Readers always get slot 1 (voicemail) first, followed by the persisted
//! bindings in ascending key order. Unbound keys are absent from the list;
//! screens that need a fixed grid rebuild it with [`grid_cells`].
//!
//! The store never asks for confirmation and never caches. Callers re-read
//! with [`SpeedDialStore::list_bindings`] after every write.
//!
//! [`grid_cells`]: crate::models::grid_cells

use tracing::warn;

use crate::error::StoreResult;
use crate::models::{AssignOutcome, SpeedDialSlot};

pub trait SpeedDialStore {
    /// Voicemail first, then every binding ordered by key
    fn list_bindings(&self) -> StoreResult<Vec<SpeedDialSlot>>;

    /// Bind `phone_id` to `key_id`, replacing whatever was there.
    fn assign(&self, key_id: u8, phone_id: i64) -> StoreResult<AssignOutcome>;

    /// Remove the binding for `key_id`. Succeeds when nothing is bound.
    fn unassign(&self, key_id: u8) -> StoreResult<()>;

    /// Remove every persisted binding and return how many were removed.
    fn clear_all(&self) -> StoreResult<usize>;

    fn binding_for_key(&self, key_id: u8) -> StoreResult<Option<SpeedDialSlot>> {
        Ok(self
            .list_bindings()?
            .into_iter()
            .find(|slot| slot.key_id == key_id))
    }

    fn is_phone_bound(&self, phone_id: i64) -> StoreResult<bool> {
        Ok(self
            .list_bindings()?
            .iter()
            .any(|slot| slot.phone_id == Some(phone_id)))
    }
}

/// Read the bindings for display. An unavailable store renders as the
/// voicemail-only list instead of an error.
pub fn load_bindings<S: SpeedDialStore + ?Sized>(store: &S) -> Vec<SpeedDialSlot> {
    match store.list_bindings() {
        Ok(slots) => slots,
        Err(e) => {
            warn!(error = %e, "speed dial store unavailable, showing empty list");
            vec![SpeedDialSlot::voicemail()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::PhoneType;

    struct Unreachable;

    impl SpeedDialStore for Unreachable {
        fn list_bindings(&self) -> StoreResult<Vec<SpeedDialSlot>> {
            Err(StoreError::StoreUnavailable(rusqlite::Error::QueryReturnedNoRows))
        }

        fn assign(&self, _key_id: u8, _phone_id: i64) -> StoreResult<AssignOutcome> {
            Err(StoreError::StoreUnavailable(rusqlite::Error::QueryReturnedNoRows))
        }

        fn unassign(&self, _key_id: u8) -> StoreResult<()> {
            Ok(())
        }

        fn clear_all(&self) -> StoreResult<usize> {
            Ok(0)
        }
    }

    struct Fixed(Vec<SpeedDialSlot>);

    impl SpeedDialStore for Fixed {
        fn list_bindings(&self) -> StoreResult<Vec<SpeedDialSlot>> {
            Ok(self.0.clone())
        }

        fn assign(&self, _key_id: u8, _phone_id: i64) -> StoreResult<AssignOutcome> {
            Ok(AssignOutcome::Inserted)
        }

        fn unassign(&self, _key_id: u8) -> StoreResult<()> {
            Ok(())
        }

        fn clear_all(&self) -> StoreResult<usize> {
            Ok(0)
        }
    }

    fn fixed() -> Fixed {
        Fixed(vec![
            SpeedDialSlot::voicemail(),
            SpeedDialSlot {
                key_id: 4,
                phone_id: Some(7),
                contact_id: Some(1),
                display_name: Some("Bea".to_string()),
                photo_id: None,
                phone_type: Some(PhoneType::Work),
                phone_number: Some("555-0104".to_string()),
            },
        ])
    }

    #[test]
    fn test_unavailable_store_degrades_to_voicemail_only() {
        let slots = load_bindings(&Unreachable);
        assert_eq!(slots, vec![SpeedDialSlot::voicemail()]);
    }

    #[test]
    fn test_default_lookups() {
        let store = fixed();
        assert_eq!(store.binding_for_key(4).unwrap().unwrap().name(), "Bea");
        assert!(store.binding_for_key(5).unwrap().is_none());
        assert!(store.is_phone_bound(7).unwrap());
        assert!(!store.is_phone_bound(8).unwrap());
    }

    #[test]
    fn test_unavailable_lookup_is_an_error() {
        assert!(matches!(
            Unreachable.binding_for_key(2),
            Err(StoreError::StoreUnavailable(_))
        ));
    }
}
