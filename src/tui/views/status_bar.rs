//! Status bar view
//!
//! Overall balance, the transient status message, and key hints for the
//! active tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::settings::Tab;
use crate::reports::Totals;
use crate::tui::app::{App, InputMode};

fn hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Search {
        return " Enter:Done  Esc:Clear ";
    }
    match app.active_tab {
        Tab::Dashboard => " a:Add  1-5:Tabs  ?:Help  q:Quit ",
        Tab::Transactions => " a:Add  e:Edit  d:Del  /:Search  f:Filter  s/m:Sort  n/p:Page  ?:Help ",
        Tab::Budgets => " a:Add  e:Edit  d:Del  ?:Help  q:Quit ",
        Tab::Savings => " a:Add  e:Edit  c:Contribute  d:Del  ?:Help ",
        Tab::Reports => " h/l:Month  [/]:Year  g:Chart  ?:Help  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = Totals::from_transactions(app.storage.transactions());
    let balance = totals.balance();
    let balance_color = if balance.is_negative() { Color::Red } else { Color::Green };

    let mut spans = vec![
        Span::styled(" Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
