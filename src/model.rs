use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The closed category set. Both the form's category picker and the
/// category breakdown iterate this same list.
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid amount")]
    InvalidAmount,
}

/// Raw text-field state as it comes out of the form inputs.
#[derive(Clone, PartialEq, Default)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

// Millisecond timestamps are unique enough for records created one
// click at a time on a single machine.
pub fn timestamp_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Validates a draft and builds the record that goes into the store.
/// Field-presence problems are reported before amount problems; an
/// unlisted category counts as "not selected".
pub fn build_expense(draft: &ExpenseDraft, user_id: &str) -> Result<Expense, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty()
        || draft.amount.trim().is_empty()
        || !EXPENSE_CATEGORIES.contains(&draft.category.as_str())
    {
        return Err(ValidationError::MissingField);
    }

    let amount = draft.amount.trim().parse::<f64>().unwrap_or(0.0);
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(Expense {
        id: timestamp_id(),
        title: title.to_string(),
        amount,
        category: draft.category.clone(),
        date: draft.date.clone(),
        user_id: user_id.to_string(),
    })
}

pub fn add_expense(expenses: &[Expense], expense: Expense) -> Vec<Expense> {
    let mut next = expenses.to_vec();
    next.insert(0, expense);
    next
}

pub fn remove_expense(expenses: &[Expense], id: &str) -> Vec<Expense> {
    expenses.iter().filter(|e| e.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, title: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            title: title.to_string(),
            amount,
            category: "Other".to_string(),
            date: "2024-03-01".to_string(),
            user_id: "u1".to_string(),
        }
    }

    fn draft(title: &str, amount: &str, category: &str) -> ExpenseDraft {
        ExpenseDraft {
            title: title.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn add_prepends_and_grows_by_one() {
        let existing = vec![expense("1", "Coffee", 3.5)];
        let next = add_expense(&existing, expense("2", "Lunch", 12.5));
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, "2");
        assert_eq!(next[1].id, "1");
    }

    #[test]
    fn remove_drops_only_the_matching_record() {
        let existing = vec![expense("1", "Coffee", 3.5), expense("2", "Lunch", 12.5)];
        let next = remove_expense(&existing, "1");
        assert_eq!(next.len(), 1);
        assert!(next.iter().all(|e| e.id != "1"));
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let existing = vec![expense("1", "Coffee", 3.5)];
        let next = remove_expense(&existing, "nope");
        assert_eq!(next, existing);
    }

    #[test]
    fn build_trims_title_and_parses_amount() {
        let built = build_expense(&draft("  Lunch  ", "12.50", "Food & Dining"), "u1")
            .expect("valid draft");
        assert_eq!(built.title, "Lunch");
        assert_eq!(built.amount, 12.5);
        assert_eq!(built.category, "Food & Dining");
        assert_eq!(built.date, "2024-03-01");
        assert_eq!(built.user_id, "u1");
        assert!(!built.id.is_empty());
    }

    #[test]
    fn rejects_empty_title_as_missing_field() {
        let err = build_expense(&draft("", "12.50", "Food & Dining"), "u1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn rejects_whitespace_title_as_missing_field() {
        let err = build_expense(&draft("   ", "12.50", "Food & Dining"), "u1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn rejects_unselected_category_as_missing_field() {
        let err = build_expense(&draft("Lunch", "12.50", ""), "u1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
        let err = build_expense(&draft("Lunch", "12.50", "Groceries"), "u1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn rejects_negative_amount() {
        let err = build_expense(&draft("Lunch", "-5", "Food & Dining"), "u1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);
    }

    #[test]
    fn rejects_zero_and_unparseable_amounts() {
        for bad in ["0", "abc", "NaN", "inf"] {
            let err = build_expense(&draft("Lunch", bad, "Food & Dining"), "u1").unwrap_err();
            assert_eq!(err, ValidationError::InvalidAmount, "amount {bad:?}");
        }
    }

    #[test]
    fn missing_field_is_reported_before_bad_amount() {
        let err = build_expense(&draft("", "-5", "Food & Dining"), "u1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }
}
