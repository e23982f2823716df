//! Alert components for displaying messages and notifications.

use maud::{html, Markup, Render};

use crate::notice::Notice;

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// An alert message component.
///
/// Renders as a styled article element with success or error styling.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self { variant, message }
    }

    /// Create a success alert.
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }
}

impl<'a> From<&'a Notice> for Alert<'a> {
    fn from(notice: &'a Notice) -> Self {
        match notice {
            Notice::Success(message) => Self::success(message),
            Notice::Error(message) => Self::error(message),
        }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.article_class();

        html! {
            article class=(class) role=[(self.variant == AlertVariant::Error).then_some("alert")] {
                (self.message)
            }
        }
    }
}

/// The message area of a page.
///
/// Always rendered so the element exists even when there is nothing to say.
#[derive(Debug, Clone, Copy)]
pub struct MessageArea<'a> {
    pub id: &'a str,
    pub notice: Option<&'a Notice>,
}

impl<'a> MessageArea<'a> {
    #[must_use]
    pub const fn new(id: &'a str, notice: Option<&'a Notice>) -> Self {
        Self { id, notice }
    }
}

impl Render for MessageArea<'_> {
    fn render(&self) -> Markup {
        html! {
            div id=(self.id) class="message-area" aria-live="polite" {
                @if let Some(notice) = self.notice {
                    (Alert::from(notice))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_variants() {
        let html = Alert::success("Saved").render().into_string();
        assert!(html.contains(r#"class="success""#));
        assert!(!html.contains("role"));

        let html = Alert::error("Broken").render().into_string();
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_message_area_from_notice() {
        let notice = Notice::error("Failed to delete video");
        let html = MessageArea::new("formMessage", Some(&notice))
            .render()
            .into_string();
        assert!(html.contains(r#"id="formMessage""#));
        assert!(html.contains("Failed to delete video"));
    }

    #[test]
    fn test_empty_message_area() {
        let html = MessageArea::new("formMessage", None).render().into_string();
        assert!(html.contains("message-area"));
        assert!(!html.contains("article"));
    }
}
