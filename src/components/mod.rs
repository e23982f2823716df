//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `button`: Configurable button and link-button components
//! - `alert`: Alert messages and the page message area
//! - `card`: Public and admin video cards and grids
//! - `form`: Form elements and input components

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::{Alert, AlertVariant, MessageArea};
pub use button::{Button, ButtonVariant};
pub use card::{AdminVideoCard, AdminVideoList, EmptyState, VideoCard, VideoGrid};
pub use form::{Form, FormGroup, Input};
pub use layout::BaseLayout;
