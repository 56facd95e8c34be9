use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::{Expense, EXPENSE_CATEGORIES};

#[derive(Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: &'static str,
    pub total: f64,
    pub count: usize,
}

#[derive(Clone, PartialEq)]
pub struct MonthlyTotal {
    pub key: String,
    pub label: String,
    pub total: f64,
    pub count: usize,
}

pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        0.0
    } else {
        total(expenses) / expenses.len() as f64
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn in_month(raw: &str, today: NaiveDate) -> bool {
    match parse_date(raw) {
        Some(date) => date.year() == today.year() && date.month() == today.month(),
        None => false,
    }
}

pub fn this_month_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| in_month(&e.date, today))
        .map(|e| e.amount)
        .sum()
}

pub fn this_month_count(expenses: &[Expense], today: NaiveDate) -> usize {
    expenses.iter().filter(|e| in_month(&e.date, today)).count()
}

/// Per-category totals in declaration order of the category set.
/// Categories nothing was spent on are left out.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    EXPENSE_CATEGORIES
        .iter()
        .copied()
        .filter_map(|name| {
            let mut sum = 0.0;
            let mut count = 0;
            for e in expenses {
                if e.category == name {
                    sum += e.amount;
                    count += 1;
                }
            }
            if count == 0 {
                None
            } else {
                Some(CategoryTotal {
                    name,
                    total: sum,
                    count,
                })
            }
        })
        .collect()
}

/// Totals grouped by calendar month, oldest month first. The "YYYY-MM"
/// key sorts lexicographically, which is also chronological order.
/// Records whose date does not parse are skipped.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut months: HashMap<String, MonthlyTotal> = HashMap::new();
    for e in expenses {
        let date = match parse_date(&e.date) {
            Some(date) => date,
            None => continue,
        };
        let key = date.format("%Y-%m").to_string();
        let entry = months.entry(key.clone()).or_insert_with(|| MonthlyTotal {
            key,
            label: date.format("%b %Y").to_string(),
            total: 0.0,
            count: 0,
        });
        entry.total += e.amount;
        entry.count += 1;
    }

    let mut out: Vec<MonthlyTotal> = months.into_values().collect();
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, category: &str, date: &str) -> Expense {
        Expense {
            id: date.to_string(),
            title: "x".to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn average_of_empty_sequence_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn total_matches_sum_of_category_totals() {
        let expenses = vec![
            expense(12.5, "Food & Dining", "2024-03-01"),
            expense(40.0, "Travel", "2024-03-05"),
            expense(7.25, "Food & Dining", "2024-04-02"),
            expense(3.0, "Other", "2024-04-09"),
        ];
        let by_category: f64 = category_totals(&expenses).iter().map(|c| c.total).sum();
        assert!((total(&expenses) - by_category).abs() < 1e-9);
    }

    #[test]
    fn category_totals_skip_empty_categories_and_keep_declaration_order() {
        let expenses = vec![
            expense(3.0, "Other", "2024-04-09"),
            expense(12.5, "Food & Dining", "2024-03-01"),
            expense(7.25, "Food & Dining", "2024-04-02"),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, "Food & Dining");
        assert_eq!(totals[0].count, 2);
        assert!((totals[0].total - 19.75).abs() < 1e-9);
        assert_eq!(totals[1].name, "Other");
        assert_eq!(totals[1].count, 1);
    }

    #[test]
    fn monthly_totals_group_by_month_in_ascending_key_order() {
        let expenses = vec![
            expense(7.25, "Food & Dining", "2024-04-02"),
            expense(12.5, "Food & Dining", "2024-03-01"),
            expense(40.0, "Travel", "2024-03-05"),
            expense(5.0, "Other", "2023-12-31"),
        ];
        let months = monthly_totals(&expenses);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].key, "2023-12");
        assert_eq!(months[1].key, "2024-03");
        assert_eq!(months[2].key, "2024-04");
        assert_eq!(months[1].count, 2);
        assert!((months[1].total - 52.5).abs() < 1e-9);
        assert_eq!(months[0].label, "Dec 2023");
    }

    #[test]
    fn monthly_totals_skip_unparseable_dates() {
        let expenses = vec![
            expense(12.5, "Food & Dining", "2024-03-01"),
            expense(99.0, "Other", "not-a-date"),
        ];
        let months = monthly_totals(&expenses);
        assert_eq!(months.len(), 1);
        assert!((months[0].total - 12.5).abs() < 1e-9);
    }

    #[test]
    fn this_month_covers_only_the_current_calendar_month() {
        let expenses = vec![
            expense(12.5, "Food & Dining", "2024-03-01"),
            expense(40.0, "Travel", "2024-03-29"),
            expense(7.25, "Food & Dining", "2024-04-02"),
            expense(99.0, "Other", "2023-03-15"),
        ];
        let march = NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date");
        assert!((this_month_total(&expenses, march) - 52.5).abs() < 1e-9);
        assert_eq!(this_month_count(&expenses, march), 2);

        let may = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert_eq!(this_month_total(&expenses, may), 0.0);
        assert_eq!(this_month_count(&expenses, may), 0);
    }

    #[test]
    fn lunch_scenario_matches_expected_breakdown() {
        let expenses = vec![expense(12.5, "Food & Dining", "2024-03-01")];
        assert!((total(&expenses) - 12.5).abs() < 1e-9);
        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, "Food & Dining");
        assert_eq!(totals[0].count, 1);
        let march = NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date");
        assert!((this_month_total(&expenses, march) - 12.5).abs() < 1e-9);
    }
}
