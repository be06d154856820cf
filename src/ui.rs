//! Drawing - turns a `RenderState` into ratatui widgets, plus the plain
//! text rendering used by headless mode.

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;
use crate::models::{Book, LoadState};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Books
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, chunks[0]);
    draw_books(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_details {
        if let Some(book) = state.load.visible(&state.filter).get(state.selected) {
            draw_details_popup(f, book, area);
        }
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!(" v{}", APP_VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_books(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.load {
        LoadState::Loading => {
            let block = Block::default().borders(Borders::ALL).title(" Books ");
            let loading = Paragraph::new("Loading…")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            f.render_widget(loading, area);
        }
        LoadState::Failed(message) => {
            // Shown verbatim, the audience is developers
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ");
            let error = Paragraph::new(format!("Error: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block)
                .wrap(Wrap { trim: false });
            f.render_widget(error, area);
        }
        LoadState::Loaded(books) => {
            let visible = state.load.visible(&state.filter);
            let title = if state.filter.is_empty() {
                format!(" Books ({}) ", books.len())
            } else {
                format!(
                    " Found {} of {} books matching \"{}\" ",
                    visible.len(),
                    books.len(),
                    state.filter
                )
            };
            let block = Block::default().borders(Borders::ALL).title(title);

            if visible.is_empty() {
                let text = if books.is_empty() {
                    String::from("No books found.")
                } else {
                    format!("No books match \"{}\".", state.filter)
                };
                let empty = Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                f.render_widget(empty, area);
                return;
            }

            let items: Vec<ListItem> = visible.iter().copied().map(book_item).collect();
            let list = List::new(items)
                .block(block.border_style(Style::default().fg(Color::Cyan)))
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("▌");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected.min(visible.len() - 1)));

            f.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

/// One list entry per book, keyed by its id
fn book_item(book: &Book) -> ListItem<'static> {
    let heading = Line::from(vec![
        Span::styled(format!("#{} ", book.id), Style::default().fg(Color::DarkGray)),
        Span::styled(book.title.clone(), Style::default().bold()),
        Span::raw(" — "),
        Span::styled(book.author.clone(), Style::default().italic()),
    ]);
    let meta = Line::from(Span::styled(
        format!("ISBN: {} — {}", book.isbn, format_price(book.price)),
        Style::default().fg(Color::Gray),
    ));
    let description = Line::from(book.description.clone());

    ListItem::new(vec![heading, meta, description, Line::default()])
}

/// Target and latency on the left, key hints on the right. The filter
/// prompt takes the left side while it is open.
fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let left = if state.filter_editing {
        Line::from(vec![
            Span::styled(" Filter: ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("{}▏", state.filter)),
        ])
    } else {
        let mut spans = vec![Span::styled(
            format!(" GET {}", state.books_url),
            Style::default().fg(Color::Green),
        )];
        if let Some(ms) = state.time_ms {
            spans.push(Span::styled(
                format!(" | {}ms", ms),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    let hints = if state.filter_editing {
        "Enter:apply  Esc:clear "
    } else {
        match &state.load {
            LoadState::Loading => "q:quit ",
            LoadState::Failed(_) => "?:help  q:quit ",
            LoadState::Loaded(_) => "↑/↓:select  /:filter  Enter:details  ?:help  q:quit ",
        }
    };
    let hints = Line::from(hints).right_aligned();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints.width() as u16)])
        .split(area);

    f.render_widget(Paragraph::new(left), chunks[0]);
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

fn draw_details_popup(f: &mut Frame, book: &Book, area: Rect) {
    let popup_area = centered_rect(70, 60, area);

    let label = Style::default().fg(Color::Cyan);
    let mut lines = vec![
        Line::from(vec![Span::styled("Title:   ", label), Span::raw(book.title.clone())]),
        Line::from(vec![Span::styled("Author:  ", label), Span::raw(book.author.clone())]),
        Line::from(vec![Span::styled("ISBN:    ", label), Span::raw(book.isbn.clone())]),
        Line::from(vec![Span::styled("Price:   ", label), Span::raw(format_price(book.price))]),
    ];
    if let Some(rent) = book.rent_price {
        lines.push(Line::from(vec![
            Span::styled("Rent:    ", label),
            Span::raw(format_price(Some(rent))),
        ]));
    }
    if let Some(stock) = book.stock {
        lines.push(Line::from(vec![
            Span::styled("Stock:   ", label),
            Span::raw(stock.to_string()),
        ]));
    }
    if let Some(created) = book.created_at {
        lines.push(Line::from(vec![
            Span::styled("Added:   ", label),
            Span::raw(created.format(TIMESTAMP_FORMAT).to_string()),
        ]));
    }
    if let Some(updated) = book.updated_at {
        lines.push(Line::from(vec![
            Span::styled("Updated: ", label),
            Span::raw(updated.format(TIMESTAMP_FORMAT).to_string()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(book.description.clone()));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Book #{} ", book.id))
        .style(Style::default().bg(Color::Black));

    let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(details, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    let help_text = format!(
        r#"
 {} {} - Keyboard Shortcuts

   ↑ / k          Previous book
   ↓ / j          Next book
   Home / g       First book
   End / G        Last book
   /              Filter by title, author, ISBN
   Enter          Book details
   ?              Toggle this help
   Esc            Clear filter, then quit
   q              Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Price as shown in the list, e.g. `$9.99`
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${}", p),
        None => String::from("$-"),
    }
}

/// Plain text rendering of a load state, one block per book
pub fn render_plain(load: &LoadState) -> String {
    match load {
        LoadState::Loading => String::from("Loading…"),
        LoadState::Failed(message) => format!("Error: {}", message),
        LoadState::Loaded(books) if books.is_empty() => String::from("No books found."),
        LoadState::Loaded(books) => books
            .iter()
            .map(|b| {
                format!(
                    "[{}] {} — {}\n    ISBN: {} — {}\n    {}",
                    b.id,
                    b.title,
                    b.author,
                    b.isbn,
                    format_price(b.price),
                    b.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
