// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_widgets --heading-base-level=0

//! Overstory Widgets: an accessible, themeable component catalog.
//!
//! Every component here follows the same shape:
//!
//! - a props struct with builder-style setters and a public
//!   [`AppearanceRequest`](understory_appearance::AppearanceRequest),
//! - a [`Widget`] implementation naming its
//!   [`ComponentSchema`](understory_appearance::ComponentSchema) (base token
//!   and custom-color roles) and the kind tokens and state flags its props
//!   imply,
//! - a declarative [`Widget::view`] that returns a [`Node`] tree carrying ARIA
//!   attributes, resolved class tokens and inline overrides,
//! - interaction methods that update the component and return a typed event
//!   for the host to route to its own callbacks.
//!
//! Components never reach outside themselves. Hosts feed in interactions
//! (and, for [`Tooltip`], the current time and geometry), render the returned
//! tree, and react to events.
//!
//! ## Minimal example
//!
//! ```rust
//! use overstory_widgets::{Checkbox, CheckboxEvent, Widget};
//! use understory_appearance::{AppearanceRequest, Variant};
//!
//! let mut terms = Checkbox::new("terms", "I agree")
//!     .with_appearance(AppearanceRequest::new().variant(Variant::Success))
//!     .indeterminate(true);
//!
//! assert_eq!(terms.toggle(), Some(CheckboxEvent::Changed(true)));
//! assert_eq!(
//!     terms.appearance().class_string(),
//!     "checkbox success md checked"
//! );
//!
//! let html = terms.view().to_html();
//! assert!(html.contains("aria-checked=\"true\""));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the small option enums
//!   and [`Choice`], and enables `serde` in the kernel crates.

mod alert;
mod breadcrumb;
mod button;
mod checkbox;
mod input;
mod node;
mod pagination;
mod radiogroup;
mod select;
mod slider;
mod spinner;
mod textarea;
mod toggle;
mod tooltip;
mod widget;

pub use alert::{Alert, AlertEvent, AlertRole, AlertType};
pub use breadcrumb::{Breadcrumb, BreadcrumbEvent, Crumb, CrumbSlot};
pub use button::{Button, ButtonEvent, ButtonType};
pub use checkbox::{Checkbox, CheckboxEvent};
pub use input::{Input, InputEvent, InputKind};
pub use node::{Element, Node};
pub use pagination::{PageItem, Pagination, PaginationEvent};
pub use radiogroup::{RadioEvent, Radiogroup};
pub use select::{Choice, Select, SelectEvent};
pub use slider::{Slider, SliderEvent};
pub use spinner::{Speed, Spinner, SpinnerStyle};
pub use textarea::{Resize, Textarea, TextareaEvent};
pub use toggle::{Toggle, ToggleEvent};
pub use tooltip::{Tooltip, TooltipEvent};
pub use widget::{Orientation, Widget};
