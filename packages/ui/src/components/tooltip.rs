use dioxus::prelude::*;
use dioxus_primitives::tooltip as primitive;
use dioxus_primitives::ContentSide;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TooltipSide {
    #[default]
    Top,
    Bottom,
    Right,
}

impl TooltipSide {
    fn content_side(self) -> ContentSide {
        match self {
            TooltipSide::Top => ContentSide::Top,
            TooltipSide::Bottom => ContentSide::Bottom,
            TooltipSide::Right => ContentSide::Right,
        }
    }

    fn class(self) -> &'static str {
        match self {
            TooltipSide::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            TooltipSide::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            TooltipSide::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
        }
    }
}

/// Shows `content` while the pointer (or focus) is on the children.
#[component]
pub fn Tooltip(
    content: String,
    #[props(default)] side: TooltipSide,
    children: Element,
) -> Element {
    let placement = side.class();

    rsx! {
        primitive::Tooltip {
            class: "relative inline-flex",
            primitive::TooltipTrigger {
                class: "inline-flex",
                {children}
            }
            primitive::TooltipContent {
                side: side.content_side(),
                class: "absolute z-50 whitespace-nowrap rounded bg-neutral-900 px-2 py-1 text-xs text-white shadow {placement}",
                "{content}"
            }
        }
    }
}
