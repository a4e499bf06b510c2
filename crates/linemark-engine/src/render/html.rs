use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    blocks::{BlockNode, ListItem},
    inline::Inline,
};

use super::RenderOptions;

/// Writes block nodes as an HTML fragment.
///
/// Block and inline text is already escaped by the parser and is written
/// verbatim. Class names come from configuration and are attribute-escaped.
pub struct HtmlRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, blocks: &[BlockNode]) -> String {
        let mut out = String::new();
        for b in blocks {
            self.render_block(&mut out, b);
        }
        out
    }

    fn render_block(&self, out: &mut String, b: &BlockNode) {
        match b {
            BlockNode::Heading { text } => {
                out.push_str("<h3 class=\"");
                out.push_str(&encode_double_quoted_attribute(&self.options.heading_class));
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</h3>");
            }
            BlockNode::List { items } => {
                out.push_str("<ul>");
                for ListItem(content) in items {
                    out.push_str("<li>");
                    render_inlines(out, content);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            BlockNode::Separator => out.push_str("<hr>"),
            BlockNode::Disclaimer { content } => {
                out.push_str("<div class=\"");
                out.push_str(&encode_double_quoted_attribute(
                    &self.options.disclaimer_class,
                ));
                out.push_str("\">");
                render_inlines(out, content);
                out.push_str("</div>");
            }
            BlockNode::Paragraph { content } => {
                out.push_str("<p>");
                render_inlines(out, content);
                out.push_str("</p>");
            }
        }
    }

    /// An error block for text that must never be classified.
    ///
    /// The message is fully HTML-escaped.
    pub fn render_error(&self, message: &str) -> String {
        self.error_block(&encode_text(message))
    }

    /// An error block for a failed service call: a fixed lead-in followed by
    /// the escaped failure detail in small print.
    pub fn render_failure(&self, detail: &str) -> String {
        self.error_block(&format!(
            "Could not get a response. Please check if the backend server is running and try again.<br><small>{}</small>",
            encode_text(detail)
        ))
    }

    fn error_block(&self, inner_html: &str) -> String {
        format!(
            "<div class=\"{}\">{inner_html}</div>",
            encode_double_quoted_attribute(&self.options.error_class)
        )
    }
}

fn render_inlines(out: &mut String, nodes: &[Inline]) {
    for n in nodes {
        match n {
            Inline::Text(s) => out.push_str(s),
            Inline::Strong(s) => {
                out.push_str("<strong>");
                out.push_str(s);
                out.push_str("</strong>");
            }
        }
    }
}
