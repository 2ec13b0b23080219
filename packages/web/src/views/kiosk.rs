//! Clock-in kiosk. Punches go through the bearer-token client.

use dioxus::prelude::*;
use store::{ClockAction, ClockPunch};
use ui::components::Tooltip;
use ui::icons::FaCircleInfo;
use ui::{use_api, Icon};

#[derive(Clone, Debug, PartialEq)]
enum PunchStatus {
    Idle,
    Sending,
    Recorded(ClockPunch),
    Failed(String),
}

#[component]
pub fn Kiosk() -> Element {
    let client = use_api();
    let mut employee_id = use_signal(String::new);
    let mut status = use_signal(|| PunchStatus::Idle);

    let punch = move |action: ClockAction| {
        let client = client.clone();
        spawn(async move {
            let id = employee_id().trim().to_string();
            if id.is_empty() {
                status.set(PunchStatus::Failed("Enter your employee ID".to_string()));
                return;
            }

            status.set(PunchStatus::Sending);
            match client.punch(&id, action).await {
                Ok(recorded) => {
                    tracing::info!("Recorded {:?} for {}", recorded.action, recorded.employee_id);
                    employee_id.set(String::new());
                    status.set(PunchStatus::Recorded(recorded));
                }
                Err(api::FetchError::Unauthenticated) => {
                    status.set(PunchStatus::Failed(
                        "This kiosk is not signed in. Ask a manager to sign it in.".to_string(),
                    ));
                }
                Err(e) => {
                    tracing::error!("Punch failed: {e}");
                    status.set(PunchStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let sending = status() == PunchStatus::Sending;

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center gap-6 bg-neutral-50 p-8",

            div {
                class: "flex items-center gap-2",
                h1 { class: "text-2xl font-bold text-neutral-800", "Clock in / out" }
                Tooltip {
                    content: "Use the ID printed on your badge",
                    Icon { icon: FaCircleInfo, width: 14, height: 14 }
                }
            }

            input {
                class: "h-12 w-full max-w-[320px] rounded-md border border-neutral-300 px-4 text-center text-lg tracking-widest",
                r#type: "text",
                inputmode: "numeric",
                placeholder: "Employee ID",
                value: employee_id(),
                oninput: move |evt| employee_id.set(evt.value()),
            }

            div {
                class: "flex gap-3",
                for action in [ClockAction::ClockIn, ClockAction::ClockOut] {
                    button {
                        key: "{action.label()}",
                        class: "h-12 w-36 rounded-md bg-emerald-600 font-medium text-white hover:bg-emerald-700 disabled:opacity-50",
                        disabled: sending,
                        onclick: {
                            let punch = punch.clone();
                            move |_| punch(action)
                        },
                        "{action.label()}"
                    }
                }
            }

            {
                match status() {
                    PunchStatus::Idle | PunchStatus::Sending => rsx! {},
                    PunchStatus::Recorded(recorded) => {
                        let who = recorded.employee_name.clone().unwrap_or(recorded.employee_id.clone());
                        rsx! {
                            p {
                                class: "text-sm text-emerald-700",
                                "{recorded.action.label()} recorded for {who} at {recorded.recorded_at}"
                            }
                        }
                    }
                    PunchStatus::Failed(message) => rsx! {
                        p {
                            role: "alert",
                            class: "text-sm text-red-600",
                            "{message}"
                        }
                    },
                }
            }
        }
    }
}
