use dioxus::prelude::*;
use dioxus_primitives::switch as primitive;

/// A controlled on/off switch.
///
/// The switch shows `checked` as given and reports the flipped value through
/// `on_checked_change`. It keeps no state of its own; the owner decides whether
/// the new value sticks.
#[component]
pub fn Switch(
    checked: bool,
    on_checked_change: EventHandler<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] label: Option<String>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let track = if checked {
        "bg-emerald-600"
    } else {
        "bg-neutral-300 dark:bg-neutral-600"
    };
    let thumb = if checked { "translate-x-5" } else { "translate-x-0" };

    rsx! {
        primitive::Switch {
            class: "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors disabled:cursor-not-allowed disabled:opacity-50 {track} {class}",
            checked: Some(checked),
            disabled: disabled,
            aria_label: label,
            on_checked_change: move |value: bool| on_checked_change.call(value),
            primitive::SwitchThumb {
                class: "pointer-events-none block h-5 w-5 rounded-full bg-white shadow transition-transform {thumb}",
            }
        }
    }
}
