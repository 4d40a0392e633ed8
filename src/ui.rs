//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## For contributors
//!
//! * The screen is a navigation bar, a body split into the main column and a
//!   sidebar, a footer line, and a status bar.
//! * The main column shows the hero carousel on the home page and a category
//!   header on category pages, with the interleaved feed underneath.
//! * Nothing here decides *what* is shown; it reads [`App::feed`],
//!   [`App::current_slide`] and [`App::current_ad`].
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{Ad, Category, Post};
use crate::feed::DisplayItem;

const BRAND: &str = "ModernBlog";

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  Delegates to helper functions
/// for each screen region.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [nav_area, body_area, footer_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [main_area, sidebar_area] =
        Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
            .areas(body_area);

    let header_height = if app.category.is_some() { 4 } else { 9 };
    let [header_area, feed_area] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(1)])
            .areas(main_area);

    draw_nav_bar(app, frame, nav_area);
    if app.category.is_some() {
        draw_category_header(app, frame, header_area);
    } else {
        draw_hero(app, frame, header_area);
    }
    draw_feed(app, frame, feed_area);
    draw_sidebar(app, frame, sidebar_area);
    draw_footer(frame, footer_area);
    draw_status_bar(app, frame, status_area);
}

/// Logo plus category links; the active page is highlighted.
fn draw_nav_bar(app: &App, frame: &mut Frame, area: Rect) {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::White);

    let mut spans = vec![
        Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for category in &app.categories {
        let style = if app.category.as_deref() == Some(category.slug().as_str()) {
            active
        } else {
            idle
        };
        spans.push(Span::styled(format!(" {} ", category.name), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hero carousel: the current slide, or the sponsored overlay.
fn draw_hero(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = match (app.current_ad(), app.current_slide()) {
        (Some(ad), _) => hero_ad_lines(ad),
        (None, Some(post)) => hero_slide_lines(post),
        (None, None) => vec![Line::from("")],
    };

    lines.push(Line::from(""));
    lines.push(slide_dots(app));

    let title = if app.rotation_state.auto_advance {
        " Featured "
    } else {
        " Featured (paused) "
    };
    let hero = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn hero_slide_lines(post: &Post) -> Vec<Line<'_>> {
    vec![
        Line::from(category_badge(&post.category)),
        Line::from(Span::styled(
            &post.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            &post.excerpt,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("[ Read More ]", Style::default().fg(Color::Cyan))),
    ]
}

fn hero_ad_lines(ad: &Ad) -> Vec<Line<'_>> {
    vec![
        Line::from(sponsored_badge()),
        Line::from(Span::styled(
            &ad.sponsor,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(&ad.link, Style::default().fg(Color::Blue))),
    ]
}

/// One dot per slide, the current one filled.
fn slide_dots(app: &App) -> Line<'static> {
    let dots: Vec<Span> = (0..app.rotation.slide_count())
        .map(|i| {
            if i == app.rotation_state.slide_index {
                Span::styled("● ", Style::default().fg(Color::White))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(dots)
}

fn draw_category_header(app: &App, frame: &mut Frame, area: Rect) {
    let name = app.category_title().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            " Category ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
        Line::from(Span::styled(
            name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Explore our latest articles about {}", name.to_lowercase()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            Category::new(name.as_str()).path(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the scrollable feed of post and ad cards.
fn draw_feed(app: &mut App, frame: &mut Frame, area: Rect) {
    let feed = app.feed();

    if feed.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No posts found in this category",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Check back later for new content or explore other categories",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let list_items: Vec<ListItem> = feed.iter().map(feed_card).collect();

    let list = List::new(list_items)
        .block(Block::default().title(" Latest ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    // The list borrows from `app`, so render against a copy of the selection.
    let mut list_state = app.list_state.clone();
    frame.render_stateful_widget(list, area, &mut list_state);
    app.list_state = list_state;
}

fn feed_card<'a>(item: &DisplayItem<'a>) -> ListItem<'a> {
    match *item {
        DisplayItem::Post(post) => ListItem::new(vec![
            Line::from(vec![
                category_badge(&post.category),
                Span::raw(" "),
                Span::styled(&post.title, Style::default().fg(Color::White)),
            ]),
            Line::from(Span::styled(
                &post.excerpt,
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled(
                    format!("({}) {}", post.initial(), post.author.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", post.date, post.read_time),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
        ]),
        DisplayItem::Ad(ad) => ListItem::new(vec![
            Line::from(vec![
                sponsored_badge(),
                Span::raw(" "),
                Span::styled(&ad.sponsor, Style::default().fg(Color::Yellow)),
            ]),
            Line::from(Span::styled(&ad.link, Style::default().fg(Color::Blue))),
            Line::from(""),
        ]),
    }
}

fn draw_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let popular_height = app.popular.len() as u16 * 2 + 2;
    let [popular_area, newsletter_area, promo_area, author_area] = Layout::vertical([
        Constraint::Length(popular_height),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    let popular: Vec<Line> = app
        .popular
        .iter()
        .flat_map(|post| {
            [
                Line::from(Span::styled(
                    &post.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} • {} views", post.date, post.views),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(popular)
            .block(Block::default().title(" Popular Posts ").borders(Borders::ALL)),
        popular_area,
    );

    let newsletter = Paragraph::new(vec![
        Line::from("Get the latest posts and updates delivered straight to your inbox."),
        Line::from(Span::styled(
            "[ Subscribe ]",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Subscribe to Newsletter ")
            .borders(Borders::ALL),
    );
    frame.render_widget(newsletter, newsletter_area);

    let promo = Paragraph::new(vec![
        Line::from(vec![
            sponsored_badge(),
            Span::styled(
                " Premium Membership",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from("Unlock exclusive content and features with our premium membership."),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(promo, promo_area);

    let author = Paragraph::new(vec![
        Line::from(Span::styled(
            "Alex Brennan",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Senior Editor & Content Strategist",
            Style::default().fg(Color::Gray),
        )),
        Line::from(
            "Writing about technology, design trends, and digital culture for over a decade.",
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(author, author_area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "© {} Modern Blog. All rights reserved.",
            Local::now().year()
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let feed = app.feed();
    let selected = app
        .list_state
        .selected()
        .and_then(|i| feed.get(i))
        .map(|item| format!("  [{}]", item.key()))
        .unwrap_or_default();

    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", feed.len()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(selected, Style::default().fg(Color::DarkGray)),
        Span::raw("  q: quit  ←/→/1-9: slides  r: restart  ↑/↓: scroll  c: category  0: home"),
    ]));
    frame.render_widget(status, area);
}

fn category_badge(category: &str) -> Span<'static> {
    Span::styled(
        format!(" {category} "),
        Style::default()
            .fg(Color::Black)
            .bg(category_color(category)),
    )
}

fn sponsored_badge() -> Span<'static> {
    Span::styled(
        " Sponsored ",
        Style::default().fg(Color::Black).bg(Color::Gray),
    )
}

/// Badge colour per category, so a category reads the same everywhere.
fn category_color(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "technology" => Color::Blue,
        "travel" => Color::LightCyan,
        "food" => Color::LightRed,
        "lifestyle" => Color::LightGreen,
        "health" | "wellness" => Color::Green,
        "work" => Color::Magenta,
        _ => Color::LightYellow,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
