//! Markdown-to-PDF rasterization backing `Platform::print_to_pdf`. The
//! document is parsed into styled lines and paginated onto A4 pages with the
//! three built-in Type1 fonts, so export works headlessly and produces the
//! same bytes everywhere.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 54.0;
const BODY_SIZE: f32 = 11.0;
const CODE_SIZE: f32 = 9.5;
const LEADING_FACTOR: f32 = 1.4;

const FONT_BODY: Name = Name(b"F1");
const FONT_BOLD: Name = Name(b"F2");
const FONT_MONO: Name = Name(b"F3");

#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    size: f32,
    bold: bool,
    mono: bool,
    /// Extra vertical gap below the line (paragraph and heading spacing).
    space_after: f32,
}

impl Line {
    fn leading(&self) -> f32 {
        self.size * LEADING_FACTOR
    }

    fn font(&self) -> Name<'static> {
        if self.mono {
            FONT_MONO
        } else if self.bold {
            FONT_BOLD
        } else {
            FONT_BODY
        }
    }
}

/// Render a markdown document to a finished PDF byte stream.
pub fn render_markdown_pdf(markdown: &str) -> Vec<u8> {
    write_pdf(&layout_lines(markdown))
}

fn heading_size(level: HeadingLevel) -> f32 {
    match level {
        HeadingLevel::H1 => 20.0,
        HeadingLevel::H2 => 17.0,
        HeadingLevel::H3 => 15.0,
        HeadingLevel::H4 => 13.5,
        HeadingLevel::H5 => 12.5,
        HeadingLevel::H6 => 11.5,
    }
}

struct LineCollector {
    lines: Vec<Line>,
    current: String,
    heading: Option<HeadingLevel>,
    in_code_block: bool,
    /// One entry per open list; `Some` holds the next ordinal.
    list_stack: Vec<Option<u64>>,
}

impl LineCollector {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: String::new(),
            heading: None,
            in_code_block: false,
            list_stack: Vec::new(),
        }
    }

    fn flush(&mut self, space_after: f32) {
        let text = std::mem::take(&mut self.current);
        if text.trim().is_empty() {
            return;
        }
        let (size, bold) = match self.heading {
            Some(level) => (heading_size(level), true),
            None => (if self.in_code_block { CODE_SIZE } else { BODY_SIZE }, false),
        };
        let mono = self.in_code_block;
        let max_chars = max_chars_for(size, mono);
        for wrapped in wrap_words(&text, max_chars) {
            self.lines.push(Line {
                text: wrapped,
                size,
                bold,
                mono,
                space_after: 0.0,
            });
        }
        if let Some(last) = self.lines.last_mut() {
            last.space_after = space_after;
        }
    }

    fn push_code_text(&mut self, text: &str) {
        // Fenced blocks keep their own line structure, no word wrapping loss
        // beyond overlong lines.
        for raw_line in text.lines() {
            self.current.push_str(raw_line);
            self.flush(0.0);
        }
    }
}

fn max_chars_for(size: f32, mono: bool) -> usize {
    let glyph_width = size * if mono { 0.60 } else { 0.50 };
    ((PAGE_WIDTH - 2.0 * MARGIN) / glyph_width) as usize
}

fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(8);
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn layout_lines(markdown: &str) -> Vec<Line> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut collector = LineCollector::new();
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                collector.flush(BODY_SIZE * 0.5);
                collector.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                collector.flush(BODY_SIZE * 0.6);
                collector.heading = None;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                collector.flush(BODY_SIZE * 0.5);
                collector.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                collector.in_code_block = false;
                if let Some(last) = collector.lines.last_mut() {
                    last.space_after = BODY_SIZE * 0.6;
                }
            }
            Event::Start(Tag::List(start)) => {
                collector.flush(0.0);
                collector.list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                collector.list_stack.pop();
                if let Some(last) = collector.lines.last_mut() {
                    last.space_after = BODY_SIZE * 0.5;
                }
            }
            Event::Start(Tag::Item) => {
                let depth = collector.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let marker = match collector.list_stack.last_mut() {
                    Some(Some(ordinal)) => {
                        let text = format!("{ordinal}. ");
                        *ordinal += 1;
                        text
                    }
                    _ => "- ".to_string(),
                };
                collector.current.push_str(&indent);
                collector.current.push_str(&marker);
            }
            Event::End(TagEnd::Item) => collector.flush(0.0),
            Event::End(TagEnd::Paragraph) => collector.flush(BODY_SIZE * 0.5),
            Event::Text(text) => {
                if collector.in_code_block {
                    collector.push_code_text(&text);
                } else {
                    collector.current.push_str(&text);
                }
            }
            Event::Code(code) => collector.current.push_str(&code),
            Event::SoftBreak => collector.current.push(' '),
            Event::HardBreak => collector.flush(0.0),
            Event::Rule => {
                collector.flush(BODY_SIZE * 0.5);
                collector.current.push_str("----------------------------------------");
                collector.flush(BODY_SIZE * 0.5);
            }
            Event::TaskListMarker(checked) => {
                collector.current.push_str(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }
    collector.flush(0.0);
    collector.lines
}

/// Lines per page, split wherever the next baseline would cross the bottom
/// margin.
fn paginate(lines: &[Line]) -> Vec<&[Line]> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut y = PAGE_HEIGHT - MARGIN;
    for (index, line) in lines.iter().enumerate() {
        let advance = line.leading() + line.space_after;
        if y - line.leading() < MARGIN && index > start {
            pages.push(&lines[start..index]);
            start = index;
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= advance;
    }
    pages.push(&lines[start..]);
    pages
}

/// Latin-1 projection for the built-in fonts; anything outside is replaced.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

fn write_pdf(lines: &[Line]) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let body_font_id = alloc.bump();
    let bold_font_id = alloc.bump();
    let mono_font_id = alloc.bump();

    let pages = paginate(lines);
    let mut page_refs = Vec::new();
    for _ in &pages {
        // One page object plus one content stream per page.
        page_refs.push((alloc.bump(), alloc.bump()));
    }

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    {
        let mut page_tree = pdf.pages(page_tree_id);
        page_tree.kids(page_refs.iter().map(|&(page_id, _)| page_id));
        page_tree.count(pages.len() as i32);
    }
    pdf.type1_font(body_font_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));
    pdf.type1_font(mono_font_id).base_font(Name(b"Courier"));

    for (page_lines, &(page_id, content_id)) in pages.iter().zip(&page_refs) {
        {
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(page_tree_id);
            page.contents(content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_BODY, body_font_id);
            fonts.pair(FONT_BOLD, bold_font_id);
            fonts.pair(FONT_MONO, mono_font_id);
        }

        let mut content = Content::new();
        content.begin_text();
        let mut y = PAGE_HEIGHT - MARGIN;
        let mut cursor = 0.0;
        for line in *page_lines {
            y -= line.leading();
            content.set_font(line.font(), line.size);
            // Td offsets are relative to the previous line start.
            content.next_line(if cursor == 0.0 { MARGIN } else { 0.0 }, y - cursor);
            cursor = y;
            let encoded = encode_text(&line.text);
            content.show(Str(&encoded));
            y -= line.space_after;
        }
        content.end_text();
        pdf.stream(content_id, &content.finish());
    }

    pdf.finish()
}
