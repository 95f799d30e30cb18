//! Renderable handler output.

use std::fmt;

/// Content type of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    /// `text/html`.
    Html,
    /// `application/json`.
    Json,
    /// `text/plain`.
    Text,
}

impl MimeType {
    /// Returns the MIME string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything the handler can send back.
pub trait Renderable {
    /// Returns the response body.
    fn content(&self) -> &str;

    /// Returns the body's content type.
    fn mime_type(&self) -> MimeType;
}

/// A rendered HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOutput {
    title: String,
    content: String,
}

impl HtmlOutput {
    /// Creates a page from a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Renderable for HtmlOutput {
    fn content(&self) -> &str {
        &self.content
    }

    fn mime_type(&self) -> MimeType {
        MimeType::Html
    }
}

/// A text body with an explicit content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutput {
    content: String,
    mime_type: MimeType,
}

impl TextOutput {
    /// Creates a plain-text body.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            mime_type: MimeType::Text,
        }
    }

    /// Sets the content type.
    #[must_use]
    pub const fn with_mime_type(mut self, mime_type: MimeType) -> Self {
        self.mime_type = mime_type;
        self
    }
}

impl Renderable for TextOutput {
    fn content(&self) -> &str {
        &self.content
    }

    fn mime_type(&self) -> MimeType {
        self.mime_type
    }
}

/// Output of [`crate::Handler::handle_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The application page.
    Html(HtmlOutput),
    /// A serialized report.
    Text(TextOutput),
}

impl Output {
    /// Returns the page, if this is one.
    #[must_use]
    pub const fn as_html(&self) -> Option<&HtmlOutput> {
        match self {
            Self::Html(page) => Some(page),
            Self::Text(_) => None,
        }
    }
}

impl Renderable for Output {
    fn content(&self) -> &str {
        match self {
            Self::Html(page) => page.content(),
            Self::Text(text) => text.content(),
        }
    }

    fn mime_type(&self) -> MimeType {
        match self {
            Self::Html(page) => page.mime_type(),
            Self::Text(text) => text.mime_type(),
        }
    }
}
