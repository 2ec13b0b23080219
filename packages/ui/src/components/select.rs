use dioxus::prelude::*;
use dioxus_primitives::select as primitive;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Value currently shown by a select; an empty string means nothing is chosen.
fn selected_value(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Dropdown styled for the app. Controlled: `value` comes from the owner and
/// changes are reported through `on_change`.
#[component]
pub fn Select(
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        primitive::Select::<String> {
            class: "relative {class}",
            value: Some(selected_value(&value)),
            placeholder: placeholder,
            on_value_change: move |choice: Option<String>| {
                if let Some(choice) = choice {
                    on_change.call(choice);
                }
            },
            primitive::SelectTrigger {
                class: "flex h-9 items-center justify-between gap-2 rounded-md border border-neutral-300 bg-white px-3 text-sm text-neutral-800 focus:outline-none focus:ring-2 focus:ring-emerald-500 dark:border-neutral-600 dark:bg-neutral-800 dark:text-neutral-100",
                primitive::SelectValue {}
            }
            primitive::SelectList {
                class: "absolute z-50 mt-1 min-w-full rounded-md border border-neutral-200 bg-white py-1 text-sm shadow dark:border-neutral-700 dark:bg-neutral-800",
                for (index, opt) in options.into_iter().enumerate() {
                    primitive::SelectOption::<String> {
                        key: "{opt.value}",
                        index: index,
                        value: opt.value.clone(),
                        text_value: opt.label.clone(),
                        class: "flex cursor-pointer items-center justify-between px-3 py-1.5 hover:bg-neutral-100 dark:hover:bg-neutral-700",
                        "{opt.label}"
                        primitive::SelectItemIndicator { "\u{2713}" }
                    }
                }
            }
        }
    }
}
