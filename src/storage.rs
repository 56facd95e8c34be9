use web_sys::Storage;

use crate::model::{Expense, User};

const SESSION_KEY: &str = "expenseTracker_user";

fn expenses_key(user_id: &str) -> String {
    format!("expenseTracker_expenses_{}", user_id)
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn report_decode_error(slot: &str, err: &serde_json::Error) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("failed to parse stored {}: {}", slot, err).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (slot, err);
}

/// Turns a raw stored payload into an expense sequence. Anything that
/// is missing or does not parse becomes the empty sequence.
pub fn decode_expenses(raw: Option<String>) -> Vec<Expense> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Vec::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(expenses) => expenses,
        Err(err) => {
            report_decode_error("expenses", &err);
            Vec::new()
        }
    }
}

pub fn decode_session(raw: Option<String>) -> Option<User> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            report_decode_error("session", &err);
            None
        }
    }
}

pub fn load_expenses(user_id: &str) -> Vec<Expense> {
    let storage = match local_storage() {
        Some(storage) => storage,
        None => return Vec::new(),
    };
    decode_expenses(storage.get_item(&expenses_key(user_id)).ok().flatten())
}

pub fn save_expenses(user_id: &str, expenses: &[Expense]) {
    if let Some(storage) = local_storage() {
        if let Ok(raw) = serde_json::to_string(expenses) {
            let _ = storage.set_item(&expenses_key(user_id), &raw);
        }
    }
}

/// Restores a persisted session if one exists. A payload that does not
/// parse is dropped from storage so it cannot break later loads.
pub fn load_session() -> Option<User> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten();
    let had_raw = raw.is_some();
    let user = decode_session(raw);
    if user.is_none() && had_raw {
        let _ = storage.remove_item(SESSION_KEY);
    }
    user
}

pub fn save_session(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, user_id: &str) -> Expense {
        Expense {
            id: id.to_string(),
            title: "Lunch".to_string(),
            amount: 12.5,
            category: "Food & Dining".to_string(),
            date: "2024-03-01".to_string(),
            user_id: user_id.to_string(),
        }
    }

    #[test]
    fn expenses_round_trip_field_for_field() {
        let expenses = vec![expense("1", "u1"), expense("2", "u1")];
        let raw = serde_json::to_string(&expenses).expect("encode");
        assert_eq!(decode_expenses(Some(raw)), expenses);
    }

    #[test]
    fn stored_expenses_use_the_original_field_names() {
        let raw = serde_json::to_string(&expense("1", "u1")).expect("encode");
        assert!(raw.contains("\"userId\":\"u1\""));
        assert!(raw.contains("\"id\":\"1\""));
        assert!(raw.contains("\"title\":\"Lunch\""));
    }

    #[test]
    fn missing_or_malformed_expenses_decode_to_empty() {
        assert!(decode_expenses(None).is_empty());
        assert!(decode_expenses(Some("not json".to_string())).is_empty());
        assert!(decode_expenses(Some("{\"id\":1}".to_string())).is_empty());
    }

    #[test]
    fn session_round_trip() {
        let user = User {
            id: "1700000000000".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let raw = serde_json::to_string(&user).expect("encode");
        assert_eq!(decode_session(Some(raw)), Some(user));
    }

    #[test]
    fn missing_or_malformed_session_decodes_to_none() {
        assert_eq!(decode_session(None), None);
        assert_eq!(decode_session(Some("{".to_string())), None);
    }

    #[test]
    fn expense_slots_are_scoped_per_user() {
        assert_eq!(expenses_key("a"), "expenseTracker_expenses_a");
        assert_ne!(expenses_key("a"), expenses_key("b"));
    }
}
