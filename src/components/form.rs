//! Form components for maud templates.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
    /// Optional form ID
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a new form with the given action and method.
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            id: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    /// Create a GET form.
    #[must_use]
    pub fn get(action: &'a str, content: Markup) -> Self {
        Self::new(action, "get", content)
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the form ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] id=[self.id] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: Option<&'a str>,
    /// Input type ("text", "url", "search", "hidden", ...)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Readonly attribute
    pub readonly: bool,
    /// Autofocus attribute
    pub autofocus: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
    /// Optional CSS class
    pub class: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create a new input of the given type.
    #[must_use]
    pub fn new(r#type: &'a str) -> Self {
        Self {
            name: None,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            readonly: false,
            autofocus: false,
            id: None,
            class: None,
        }
    }

    /// Create a text input.
    #[must_use]
    pub fn text() -> Self {
        Self::new("text")
    }

    /// Create a URL input.
    #[must_use]
    pub fn url() -> Self {
        Self::new("url")
    }

    /// Create a search input.
    #[must_use]
    pub fn search() -> Self {
        Self::new("search")
    }

    /// Create a hidden input.
    #[must_use]
    pub fn hidden(name: &'a str, value: &'a str) -> Self {
        Self::new("hidden").name(name).value(value)
    }

    /// Set the name attribute.
    #[must_use]
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as readonly.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Focus this input when the page loads.
    #[must_use]
    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }

    /// Set the ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=[self.name]
                id=[self.id]
                class=[self.class]
                value=[self.value]
                placeholder=[self.placeholder]
                required[self.required]
                readonly[self.readonly]
                autofocus[self.autofocus];
        }
    }
}

/// A label wrapping its input, as the stylesheet expects.
#[derive(Debug)]
pub struct FormGroup<'a> {
    pub label: &'a str,
    pub input: Input<'a>,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub const fn new(label: &'a str, input: Input<'a>) -> Self {
        Self { label, input }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            label {
                (self.label)
                (self.input)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readonly_input() {
        let html = Input::text()
            .id("title-1")
            .class("locked")
            .value("Hello")
            .readonly()
            .render()
            .into_string();
        assert!(html.contains(r#"id="title-1""#));
        assert!(html.contains(r#"class="locked""#));
        assert!(html.contains(r#"value="Hello""#));
        assert!(html.contains("readonly"));
        assert!(!html.contains("autofocus"));
    }

    #[test]
    fn test_value_is_escaped() {
        let html = Input::text().value(r#""><script>"#).render().into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_form_group_wraps_input() {
        let group = FormGroup::new("Title", Input::text().name("title").required());
        let html = group.render().into_string();
        assert!(html.starts_with("<label>Title<input"));
        assert!(html.contains("required"));
    }

    #[test]
    fn test_post_form() {
        let form = Form::post("/admin/videos", html! { "x" }).id("videoForm");
        let html = form.render().into_string();
        assert!(html.contains(r#"action="/admin/videos""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"id="videoForm""#));
    }
}
