//! TUI rendering
//!
//! Draws the header tabs, the active section's card list, and the help
//! line. Themed surfaces take their colors from the live document (what
//! the applier last wrote); chrome takes them from the current palette.
//! Both change in the same apply pass, so a frame never mixes modes.

use crate::app::{App, AppMode, CARD_ROWS};
use crate::surface::SurfaceCategory;
use crate::theme::palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header with tabs and the toggle
            Constraint::Min(1),    // Active section
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    // Body surface behind everything. Falls back to the palette only
    // before the first apply pass has run.
    let body_bg = app
        .doc
        .find(SurfaceCategory::Body, "body")
        .and_then(|e| e.bg)
        .unwrap_or(palette().body_bg);
    f.render_widget(Block::default().style(Style::default().bg(body_bg)), f.area());

    render_header(f, app, chunks[0]);
    render_section(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

/// Render header with tabs and the theme toggle affordance
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let p = palette();
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {} ", app.catalog.title),
        p.style_tab_active(),
    )];

    for (i, section) in app.catalog.sections.iter().enumerate() {
        let style = if i == app.active_tab {
            p.style_tab_active()
        } else {
            p.style_tab_inactive()
        };
        spans.push(Span::styled(format!(" [{}:{}] ", i + 1, section.title), style));
    }

    // Toggle affordance pinned to the right edge, pulsing briefly after
    // an activation.
    if let Some(icon) = app.toggle_icon() {
        let icon_text = format!(" {icon} ");
        let content_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let filler = area
            .width
            .saturating_sub(content_len as u16 + icon_text.chars().count() as u16);
        spans.push(Span::raw(" ".repeat(filler as usize)));

        let mut icon_style = Style::default().fg(p.accent);
        if app.toggle_feedback_active() {
            icon_style = icon_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(icon_text, icon_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the active section container and its card list
fn render_section(f: &mut Frame, app: &mut App, area: Rect) {
    let p = palette();
    let Some(section) = app.active_section() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  The catalog has no sections.",
            p.style_text_muted(),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(p.style_border()),
        );
        f.render_widget(empty, area);
        return;
    };
    let title = format!(" {} ", section.title);
    let container = app.doc.find(SurfaceCategory::Container, &section.id);
    let container_style = Style::default()
        .fg(container.and_then(|e| e.fg).unwrap_or(p.container_fg))
        .bg(container.and_then(|e| e.bg).unwrap_or(p.container_bg));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(p.style_title())
        .border_style(p.style_border())
        .style(container_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // The search line claims the top row while a query is live.
    let (search_area, list_area) = if app.mode == AppMode::Search || !app.filter.query().is_empty()
    {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);
        (Some(rows[0]), rows[1])
    } else {
        (None, inner)
    };

    if let Some(search_area) = search_area {
        render_search_line(f, app, search_area);
    }

    app.viewport_rows = list_area.height;
    render_cards(f, app, list_area);
}

/// Render the search query line
fn render_search_line(f: &mut Frame, app: &App, area: Rect) {
    let p = palette();
    let line = if app.mode == AppMode::Search {
        Line::from(vec![
            Span::styled(" / ", p.style_key()),
            Span::styled(app.filter.query().to_string(), p.style_input()),
            Span::styled("\u{258c}", p.style_input()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" filter: ", p.style_text_muted()),
            Span::styled(app.filter.query().to_string(), p.style_input()),
            Span::styled("  (Esc clears)", p.style_text_muted()),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Render the visible cards of the active section
fn render_cards(f: &mut Frame, app: &App, area: Rect) {
    let p = palette();
    let cards: Vec<(String, String)> = app
        .visible_cards()
        .iter()
        .map(|c| (c.title.clone(), c.description.clone()))
        .collect();

    if cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No cards match the current filters.",
            p.style_text_muted(),
        )));
        f.render_widget(empty, area);
        return;
    }

    let ids = app.visible_card_ids();
    let now = Instant::now();

    for (i, (title, description)) in cards.iter().enumerate() {
        let Some(&id) = ids.get(i) else { continue };
        let Some(element) = app.doc.get(id) else { continue };

        // Not yet revealed; the reveal animation will fade it in.
        if element.opacity <= 0.0 {
            continue;
        }

        // Vertical slide-in: the remaining offset shifts the card down.
        let slide = (element.offset_y / 15.0).round() as u16;
        let top = (i as u16 * CARD_ROWS + slide).saturating_sub(app.scroll);
        if i as u16 * CARD_ROWS < app.scroll || top >= area.height {
            continue;
        }
        let rect = Rect {
            x: area.x + 1,
            y: area.y + top,
            width: area.width.saturating_sub(2),
            height: (CARD_ROWS - 1).min(area.height - top),
        };
        if rect.height == 0 || rect.width == 0 {
            continue;
        }

        let selected = i == app.selected;
        let mut card_style = Style::default()
            .fg(element.fg.unwrap_or(p.card_fg))
            .bg(element.bg.unwrap_or(p.card_bg));
        if selected {
            // Hover lift: highlighted background and bold title.
            card_style = card_style.patch(p.style_selected());
        }
        if element.opacity < 1.0 {
            card_style = card_style.add_modifier(Modifier::DIM);
        }

        let text_fg = app
            .doc
            .children_of(id)
            .find(|e| e.category == SurfaceCategory::CardText)
            .and_then(|e| e.fg)
            .unwrap_or(p.text_fg);

        let marker = if selected { "\u{25b8} " } else { "  " };
        let mut title_spans = vec![
            Span::raw(marker.to_string()),
            Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(progress) = app.effects.ripple_progress(id, now) {
            let glyph = if progress < 0.5 { "\u{25cb}" } else { "\u{25cc}" };
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled(glyph, Style::default().fg(p.accent)));
        }

        let lines = vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                format!("  {description}"),
                Style::default().fg(text_fg),
            )),
        ];
        f.render_widget(Paragraph::new(lines).style(card_style), rect);
    }
}

/// Render the help line
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let p = palette();
    let shown = app.visible_cards().len();
    let total = app.active_section().map_or(0, |s| s.cards.len());

    let spans = vec![
        Span::styled(" t", p.style_key()),
        Span::styled(":theme ", p.style_key_desc()),
        Span::styled("/", p.style_key()),
        Span::styled(":search ", p.style_key_desc()),
        Span::styled("c", p.style_key()),
        Span::styled(
            format!(":filter({}) ", app.filter.category.label()),
            p.style_key_desc(),
        ),
        Span::styled("\u{21e5}", p.style_key()),
        Span::styled(":section ", p.style_key_desc()),
        Span::styled("q", p.style_key()),
        Span::styled(":quit ", p.style_key_desc()),
        Span::styled(
            format!(" {shown}/{total} cards"),
            p.style_text_secondary(),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
