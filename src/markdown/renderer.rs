//! Markdown rendering through the content component map.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{Arena, Options};
use maud::{Markup, PreEscaped, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::trace;

use super::element::element;
use super::links::{LinkKind, LinkResolver};
use super::slug::Slugger;
use super::{ComponentMap, Props};

/// Renders markdown to HTML, substituting styled components for content tags.
///
/// Parsing is delegated to comrak with GitHub Flavored Markdown extensions
/// (tables, strikethrough, autolinks, task lists). The resulting tree is
/// walked node by node and every element is dispatched through a
/// [`ComponentMap`]. Headings receive unique slug ids so level 2 and 3
/// headings get anchor links. Fenced code blocks are highlighted with
/// syntect using CSS classes.
pub struct MarkdownRenderer {
    options: Options<'static>,
    syntax_set: SyntaxSet,
    components: ComponentMap,
    link_resolver: Option<LinkResolver>,
}

/// Per document rendering state.
struct RenderState {
    slugger: Slugger,
    resolver: Option<LinkResolver>,
}

impl MarkdownRenderer {
    /// Creates renderer using the standard component map.
    pub fn new() -> Self {
        Self::with_components(ComponentMap::standard())
    }

    /// Creates renderer using a custom component map.
    pub fn with_components(components: ComponentMap) -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.parse.smart = true;

        // Content is authored by the site owner
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            components,
            link_resolver: None,
        }
    }

    /// Rewrites root absolute site links relative to a page at `depth`.
    ///
    /// Pages are written as `<route>/index.html`; a post at
    /// `writing/<slug>/index.html` has depth 2.
    pub fn with_link_depth(mut self, depth: usize) -> Self {
        self.link_resolver = Some(LinkResolver::with_depth(depth));
        self
    }

    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Renders markdown content to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting or fallback formatting fails
    pub fn render(&self, content: &str) -> Result<String> {
        self.render_with(content, self.link_resolver)
    }

    /// Renders content for a page `depth` directories below the site root.
    ///
    /// Overrides any depth configured with [`Self::with_link_depth`].
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting or fallback formatting fails
    pub fn render_at_depth(&self, content: &str, depth: usize) -> Result<String> {
        self.render_with(content, Some(LinkResolver::with_depth(depth)))
    }

    fn render_with(&self, content: &str, resolver: Option<LinkResolver>) -> Result<String> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);
        let mut state = RenderState {
            slugger: Slugger::new(),
            resolver,
        };

        let markup = self.render_children(root, &mut state)?;
        Ok(markup.into_string())
    }

    fn render_children<'n>(&self, node: &'n AstNode<'n>, state: &mut RenderState) -> Result<Markup> {
        let mut out = String::new();
        for child in node.children() {
            out.push_str(&self.render_node(child, state)?.into_string());
        }
        Ok(PreEscaped(out))
    }

    fn render_node<'n>(&self, node: &'n AstNode<'n>, state: &mut RenderState) -> Result<Markup> {
        let value = node.data.borrow().value.clone();
        let map = &self.components;

        let markup = match value {
            NodeValue::Document => self.render_children(node, state)?,
            NodeValue::Heading(heading) => {
                let mut props = Props::new();
                if let Some(id) = state.slugger.slug(&collect_text(node)) {
                    props.set_attr("id", id);
                }
                let children = self.render_children(node, state)?;
                map.render(&format!("h{}", heading.level), &props, children)
            }
            NodeValue::Paragraph => {
                let children = self.render_children(node, state)?;
                if in_tight_list(node) {
                    children
                } else {
                    map.render("p", &Props::new(), children)
                }
            }
            NodeValue::List(list) => {
                let children = self.render_children(node, state)?;
                match list.list_type {
                    ListType::Bullet => map.render("ul", &Props::new(), children),
                    ListType::Ordered => {
                        let mut props = Props::new();
                        if list.start != 1 {
                            props.set_attr("start", list.start.to_string());
                        }
                        map.render("ol", &props, children)
                    }
                }
            }
            NodeValue::Item(_) => {
                let children = self.render_children(node, state)?;
                map.render("li", &Props::new(), children)
            }
            NodeValue::TaskItem(symbol) => {
                let mut checkbox = Props::new()
                    .attr("type", "checkbox")
                    .attr("disabled", "");
                if symbol.is_some() {
                    checkbox.set_attr("checked", "");
                }
                let children = self.render_children(node, state)?;
                let content = html! {
                    (element("input", &checkbox, html! {}))
                    " "
                    (children)
                };
                map.render("li", &Props::new().class("task-item"), content)
            }
            NodeValue::Link(link) => {
                let children = self.render_children(node, state)?;
                map.render("a", &link_props(&link.url, &link.title, state.resolver), children)
            }
            NodeValue::Image(link) => {
                let mut props = Props::new()
                    .attr("src", link.url.clone())
                    .attr("alt", collect_text(node));
                if !link.title.is_empty() {
                    props.set_attr("title", link.title.clone());
                }
                map.render("img", &props, html! {})
            }
            NodeValue::BlockQuote => {
                let children = self.render_children(node, state)?;
                map.render("blockquote", &Props::new(), children)
            }
            NodeValue::ThematicBreak => map.render("hr", &Props::new(), html! {}),
            NodeValue::LineBreak => html! {
                (map.render("br", &Props::new(), html! {}))
                "\n"
            },
            NodeValue::SoftBreak => html! { "\n" },
            NodeValue::Text(text) => html! { (text) },
            NodeValue::Code(code) => map.render("inlineCode", &Props::new(), html! { (code.literal) }),
            NodeValue::Emph => {
                let children = self.render_children(node, state)?;
                map.render("em", &Props::new(), children)
            }
            NodeValue::Strong => {
                let children = self.render_children(node, state)?;
                map.render("strong", &Props::new(), children)
            }
            NodeValue::Strikethrough => {
                let children = self.render_children(node, state)?;
                map.render("del", &Props::new(), children)
            }
            NodeValue::Table(..) => self.render_table(node, state)?,
            NodeValue::TableRow(_) => {
                let children = self.render_children(node, state)?;
                map.render("tr", &Props::new(), children)
            }
            NodeValue::TableCell => {
                let tag = if in_header_row(node) { "th" } else { "td" };
                let mut props = Props::new();
                if let Some(align) = cell_alignment(node) {
                    props.set_style("text-align", align);
                }
                let children = self.render_children(node, state)?;
                map.render(tag, &props, children)
            }
            NodeValue::CodeBlock(block) => {
                let language = block.info.split_whitespace().next().unwrap_or("");
                self.render_code_block(&block.literal, language)?
            }
            _ => self.format_fallback(node)?,
        };

        Ok(markup)
    }

    /// Splits rows into `thead` and `tbody` the way comrak does.
    fn render_table<'n>(&self, node: &'n AstNode<'n>, state: &mut RenderState) -> Result<Markup> {
        let mut head = String::new();
        let mut body = String::new();

        for row in node.children() {
            let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
            let rendered = self.render_node(row, state)?.into_string();
            if is_header {
                head.push_str(&rendered);
            } else {
                body.push_str(&rendered);
            }
        }

        let map = &self.components;
        let children = html! {
            @if !head.is_empty() {
                (map.render("thead", &Props::new(), PreEscaped(head)))
            }
            @if !body.is_empty() {
                (map.render("tbody", &Props::new(), PreEscaped(body)))
            }
        };

        Ok(map.render("table", &Props::new(), children))
    }

    fn render_code_block(&self, code: &str, language: &str) -> Result<Markup> {
        if language.is_empty() {
            return Ok(html! {
                pre class="mdx-pre" { code { (code) } }
            });
        }

        let highlighted = self
            .highlight_code(code, language)
            .context("Failed to highlight code block")?;

        Ok(html! {
            pre class="mdx-pre" {
                code class=(format!("language-{}", language)) { (PreEscaped(highlighted)) }
            }
        })
    }

    /// Highlights code with syntect using `hljs-` prefixed CSS classes.
    ///
    /// Unknown languages return escaped plain text.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let syntax = match syntax {
            Some(s) => s,
            None => return Ok(html! { (code) }.into_string()),
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Renders an unmapped node with comrak's own HTML formatter.
    fn format_fallback<'n>(&self, node: &'n AstNode<'n>) -> Result<Markup> {
        trace!("formatting unmapped markdown node with comrak");

        let mut out = Vec::new();
        comrak::format_html(node, &self.options, &mut out)
            .context("Failed to format markdown node")?;
        let html = String::from_utf8(out).context("Formatted markdown is not valid UTF8")?;

        Ok(PreEscaped(html))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds link props, resolving site paths when a resolver is set.
fn link_props(url: &str, title: &str, resolver: Option<LinkResolver>) -> Props {
    let mut props = Props::new();
    if !title.is_empty() {
        props.set_attr("title", title);
    }

    let internal = LinkKind::classify(Some(url)).is_internal();
    match (resolver, internal) {
        (Some(resolver), true) => {
            props.set_attr("href", resolver.resolve_or_keep(url));
            props.set_attr("data-nav", "internal");
        }
        _ => props.set_attr("href", url),
    }

    props
}

/// Concatenates the plain text of a node and its descendants.
fn collect_text<'n>(node: &'n AstNode<'n>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            _ => {}
        }
    }
    text
}

/// Paragraphs directly inside items of tight lists render without `<p>`.
fn in_tight_list<'n>(node: &'n AstNode<'n>) -> bool {
    node.parent()
        .and_then(|item| item.parent())
        .map(|list| matches!(&list.data.borrow().value, NodeValue::List(l) if l.tight))
        .unwrap_or(false)
}

/// Column alignment from the table delimiter row (`:-:`, `--:`, `:--`).
fn cell_alignment<'n>(node: &'n AstNode<'n>) -> Option<&'static str> {
    let column = node.preceding_siblings().count().saturating_sub(1);
    let table = node.parent()?.parent()?;

    match &table.data.borrow().value {
        NodeValue::Table(table) => match table.alignments.get(column)? {
            TableAlignment::Left => Some("left"),
            TableAlignment::Center => Some("center"),
            TableAlignment::Right => Some("right"),
            TableAlignment::None => None,
        },
        _ => None,
    }
}

fn in_header_row<'n>(node: &'n AstNode<'n>) -> bool {
    node.parent()
        .map(|row| matches!(row.data.borrow().value, NodeValue::TableRow(true)))
        .unwrap_or(false)
}
