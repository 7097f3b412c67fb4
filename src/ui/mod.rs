//! Prop-driven rendering primitives shared by the page sections.

mod card;
mod controls;
pub mod icons;
mod modal;

pub use card::Card;
pub use controls::{Avatar, Badge, Button, ButtonVariant, ProgressBar, TextArea, TextInput, Toggle};
pub use modal::Modal;
