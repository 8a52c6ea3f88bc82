// Live markdown preview rendering

use eframe::egui;
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

/// Render `text` as markdown into the given `Ui`.
///
/// Total over any input: unknown constructs fall through as plain text.
pub fn render_markdown(ui: &mut egui::Ui, text: &str) {
    let parser = Parser::new(text);
    let mut in_code_block = false;
    let mut in_heading = false;
    let mut heading_level = 1;
    let mut strong = false;
    let mut emphasis = false;
    // Stack of list counters; None for bullet lists
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut pending_item_marker: Option<String> = None;

    for event in parser {
        match event {
            MarkdownEvent::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    in_heading = true;
                    heading_level = match level {
                        HeadingLevel::H1 => 1,
                        HeadingLevel::H2 => 2,
                        HeadingLevel::H3 => 3,
                        HeadingLevel::H4 => 4,
                        HeadingLevel::H5 => 5,
                        HeadingLevel::H6 => 6,
                    };
                }
                Tag::CodeBlock(_) => in_code_block = true,
                Tag::Strong => strong = true,
                Tag::Emphasis => emphasis = true,
                Tag::List(start) => lists.push(start),
                Tag::Item => {
                    let depth = lists.len().saturating_sub(1);
                    let indent = "    ".repeat(depth);
                    pending_item_marker = Some(match lists.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{indent}{n}. ");
                            *n += 1;
                            marker
                        }
                        _ => format!("{indent}• "),
                    });
                }
                _ => {}
            },
            MarkdownEvent::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    in_heading = false;
                    ui.add_space(5.0);
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    ui.add_space(5.0);
                }
                TagEnd::Paragraph => ui.add_space(5.0),
                TagEnd::Strong => strong = false,
                TagEnd::Emphasis => emphasis = false,
                TagEnd::List(_) => {
                    lists.pop();
                    if lists.is_empty() {
                        ui.add_space(5.0);
                    }
                }
                TagEnd::Item => pending_item_marker = None,
                _ => {}
            },
            MarkdownEvent::Text(text) => {
                if in_heading {
                    let size = match heading_level {
                        1 => 24.0,
                        2 => 20.0,
                        3 => 18.0,
                        4 => 16.0,
                        _ => 14.0,
                    };
                    ui.label(egui::RichText::new(text.as_ref()).size(size).strong());
                } else if in_code_block {
                    ui.monospace(text.as_ref());
                } else {
                    let shown = match pending_item_marker.take() {
                        Some(marker) => format!("{marker}{text}"),
                        None => text.to_string(),
                    };
                    let mut rich = egui::RichText::new(shown);
                    if strong {
                        rich = rich.strong();
                    }
                    if emphasis {
                        rich = rich.italics();
                    }
                    ui.label(rich);
                }
            }
            MarkdownEvent::Code(code) => {
                ui.monospace(
                    egui::RichText::new(code.as_ref())
                        .background_color(egui::Color32::from_gray(50)),
                );
            }
            MarkdownEvent::Rule => {
                ui.separator();
            }
            MarkdownEvent::SoftBreak | MarkdownEvent::HardBreak => {
                ui.label("");
            }
            _ => {}
        }
    }
}
