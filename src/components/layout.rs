//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, DOCTYPE};

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("Videos", "Video Gallery").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    site_title: &'a str,
    scripts: Vec<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page and site titles.
    #[must_use]
    pub fn new(title: &'a str, site_title: &'a str) -> Self {
        Self {
            title,
            site_title,
            scripts: Vec::new(),
        }
    }

    /// Load an extra script at the end of the body.
    #[must_use]
    pub fn with_script(mut self, src: &'a str) -> Self {
        self.scripts.push(src);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - " (self.site_title) }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (self.render_footer())
                    @for src in &self.scripts {
                        script src=(src) {}
                    }
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { (self.site_title) }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Videos" } }
                        li { a href="/watch" { "Latest" } }
                        li { a href="/admin" { "Admin" } }
                    }
                }
            }
        }
    }

    fn render_footer(&self) -> Markup {
        html! {
            footer class="container" {
                small { (self.site_title) }
            }
        }
    }
}
