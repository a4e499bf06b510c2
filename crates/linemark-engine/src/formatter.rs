use crate::{
    parsing::{ParsedDoc, parse_document},
    render::{HtmlRenderer, RenderOptions},
    reply::ServiceReply,
};

/// Converts raw reply text into safe HTML.
///
/// Holds only render options, so one formatter can be shared across threads
/// and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    options: RenderOptions,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parses raw text into a document. Absent text is an empty document.
    pub fn parse<'a>(&self, raw: impl Into<Option<&'a str>>) -> ParsedDoc {
        let raw: Option<&str> = raw.into();
        raw.map(parse_document).unwrap_or_default()
    }

    /// Formats raw text as an HTML fragment.
    ///
    /// Never fails: empty or absent input yields an empty string, and no `<`
    /// or `>` from the input survives unescaped.
    pub fn format<'a>(&self, raw: impl Into<Option<&'a str>>) -> String {
        let doc = self.parse(raw);
        log::debug!("formatting {} blocks", doc.blocks.len());
        HtmlRenderer::new(&self.options).render(&doc.blocks)
    }

    /// Renders an error message without classifying it.
    pub fn render_error(&self, message: &str) -> String {
        HtmlRenderer::new(&self.options).render_error(message)
    }

    /// Renders a service reply: formatted output on success, an error block
    /// on failure.
    pub fn render_reply(&self, reply: &ServiceReply) -> String {
        match reply {
            ServiceReply::Success { result } => self.format(result.as_deref()),
            ServiceReply::Failure { error } => {
                log::warn!("service reply carried an error: {error}");
                HtmlRenderer::new(&self.options).render_failure(error)
            }
        }
    }
}

/// Formats raw text with the default render options.
pub fn format<'a>(raw: impl Into<Option<&'a str>>) -> String {
    LineFormatter::new().format(raw)
}
