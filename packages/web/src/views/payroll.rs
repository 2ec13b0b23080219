use dioxus::prelude::*;
use store::{EmployeePayroll, Role};
use ui::components::{Select, SelectOption, Switch};
use ui::{use_api, PayrollSort, PayrollTable, RoleGate};

#[component]
pub fn Payroll() -> Element {
    rsx! {
        RoleGate {
            allowed: vec![Role::Admin, Role::Manager],
            PayrollBody {}
        }
    }
}

#[component]
fn PayrollBody() -> Element {
    let client = use_api();
    let mut employees = use_signal(Vec::<EmployeePayroll>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut sort = use_signal(PayrollSort::default);
    let mut hide_idle = use_signal(|| false);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.payroll_employees().await {
                Ok(list) => {
                    employees.set(list);
                    error.set(None);
                }
                // Already on the way to the login page.
                Err(api::FetchError::SessionExpired) => {}
                Err(e) => {
                    tracing::error!("Failed to load payroll: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let sort_options: Vec<SelectOption> = PayrollSort::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.key(), s.label()))
        .collect();

    rsx! {
        div {
            class: "p-8",

            div {
                class: "mb-4 flex items-center justify-between gap-4",
                h1 { class: "text-xl font-semibold text-neutral-800 dark:text-neutral-100", "Payroll" }

                div {
                    class: "flex items-center gap-4",
                    label {
                        class: "flex items-center gap-2 text-sm text-neutral-600",
                        Switch {
                            checked: hide_idle(),
                            label: "Hide employees without hours".to_string(),
                            on_checked_change: move |value| hide_idle.set(value),
                        }
                        "Hide idle"
                    }
                    Select {
                        value: sort().key().to_string(),
                        options: sort_options,
                        on_change: move |key: String| sort.set(PayrollSort::from_key(&key)),
                    }
                }
            }

            if let Some(err) = error() {
                div {
                    role: "alert",
                    class: "mb-4 rounded border border-red-200 bg-red-50 px-2.5 py-2.5 text-[0.8125rem] text-red-600",
                    "{err}"
                }
            }

            if loading() {
                p { class: "text-sm text-neutral-500", "Loading payroll..." }
            } else {
                PayrollTable {
                    employees: employees(),
                    sort: sort(),
                    hide_idle: hide_idle(),
                }
            }
        }
    }
}
