//! Presentation-only controls: styled wrappers over `dioxus-primitives`, which
//! supplies keyboard handling and ARIA wiring. None of them fetch data.

mod select;
pub use select::{Select, SelectOption};

mod switch;
pub use switch::Switch;

mod tooltip;
pub use tooltip::{Tooltip, TooltipSide};
