//! Payroll table rendering.

use std::cmp::Ordering;

use dioxus::prelude::*;
use store::{EmployeePayroll, PayrollRowView};

/// Column the payroll table is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayrollSort {
    #[default]
    Name,
    HoursDesc,
    GrossPayDesc,
}

impl PayrollSort {
    pub const ALL: [PayrollSort; 3] = [
        PayrollSort::Name,
        PayrollSort::HoursDesc,
        PayrollSort::GrossPayDesc,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PayrollSort::Name => "name",
            PayrollSort::HoursDesc => "hours",
            PayrollSort::GrossPayDesc => "gross",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PayrollSort::Name => "Name",
            PayrollSort::HoursDesc => "Most hours",
            PayrollSort::GrossPayDesc => "Highest gross pay",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

/// Rows to display: defaults applied, optionally without zero-hour employees, sorted.
pub fn payroll_rows(
    records: &[EmployeePayroll],
    sort: PayrollSort,
    hide_idle: bool,
) -> Vec<(usize, PayrollRowView)> {
    let mut rows: Vec<(usize, PayrollRowView)> = records
        .iter()
        .map(PayrollRowView::from)
        .enumerate()
        .filter(|(_, row)| !hide_idle || row.hours > 0.0)
        .collect();

    rows.sort_by(|(_, a), (_, b)| match sort {
        PayrollSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        PayrollSort::HoursDesc => b.hours.partial_cmp(&a.hours).unwrap_or(Ordering::Equal),
        PayrollSort::GrossPayDesc => b
            .gross_pay
            .partial_cmp(&a.gross_pay)
            .unwrap_or(Ordering::Equal),
    });
    rows
}

/// One employee as a table row. Missing fields show their defaults.
#[component]
pub fn PayrollRow(record: EmployeePayroll) -> Element {
    let row = PayrollRowView::from(&record);
    rsx! {
        tr {
            class: "border-b border-neutral-200 dark:border-neutral-700",
            td { class: "px-4 py-2", "{row.name}" }
            td { class: "px-4 py-2 text-right tabular-nums", "{row.hours}" }
            td { class: "px-4 py-2 text-right tabular-nums", "{row.gross_pay}" }
        }
    }
}

#[component]
pub fn PayrollTable(
    employees: Vec<EmployeePayroll>,
    #[props(default)] sort: PayrollSort,
    #[props(default)] hide_idle: bool,
) -> Element {
    let rows = payroll_rows(&employees, sort, hide_idle);

    rsx! {
        table {
            class: "w-full text-sm text-neutral-800 dark:text-neutral-100",
            thead {
                tr {
                    class: "border-b border-neutral-300 text-left text-xs uppercase text-neutral-500",
                    th { class: "px-4 py-2", "Employee" }
                    th { class: "px-4 py-2 text-right", "Hours" }
                    th { class: "px-4 py-2 text-right", "Gross pay" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            class: "px-4 py-6 text-center text-neutral-500",
                            colspan: "3",
                            "No employees to show."
                        }
                    }
                }
                for (index, _) in rows {
                    PayrollRow { key: "{index}", record: employees[index].clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, hours: Option<f64>, gross: Option<f64>) -> EmployeePayroll {
        EmployeePayroll {
            id: None,
            name: name.map(str::to_string),
            hours,
            gross_pay: gross,
        }
    }

    #[test]
    fn test_rows_apply_defaults() {
        let rows = payroll_rows(&[EmployeePayroll::default()], PayrollSort::Name, false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.name, "Employee");
        assert_eq!(rows[0].1.hours, 0.0);
        assert_eq!(rows[0].1.gross_pay, 0.0);
    }

    #[test]
    fn test_sorting() {
        let records = vec![
            record(Some("bob"), Some(10.0), Some(300.0)),
            record(Some("Alice"), Some(40.0), Some(900.0)),
            record(None, None, Some(1200.0)),
        ];

        let by_name: Vec<String> = payroll_rows(&records, PayrollSort::Name, false)
            .into_iter()
            .map(|(_, r)| r.name)
            .collect();
        assert_eq!(by_name, vec!["Alice", "bob", "Employee"]);

        let by_hours: Vec<usize> = payroll_rows(&records, PayrollSort::HoursDesc, false)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(by_hours, vec![1, 0, 2]);

        let by_gross: Vec<usize> = payroll_rows(&records, PayrollSort::GrossPayDesc, false)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(by_gross, vec![2, 1, 0]);
    }

    #[test]
    fn test_hide_idle() {
        let records = vec![
            record(Some("Jane"), Some(40.0), Some(1200.0)),
            record(Some("Idle"), None, None),
        ];
        let rows = payroll_rows(&records, PayrollSort::Name, true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.name, "Jane");
    }

    #[test]
    fn test_sort_keys() {
        for sort in PayrollSort::ALL {
            assert_eq!(PayrollSort::from_key(sort.key()), sort);
        }
        assert_eq!(PayrollSort::from_key("bogus"), PayrollSort::Name);
    }
}
