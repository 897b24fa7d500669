//! Interactive terminal dashboard.
//!
//! Keys:
//! - `←`/`→` or `Tab`/`Shift+Tab`: previous/next ticker
//! - `1`/`2`/`3` or `c`: price line, 1-day % line, volume bars (`c` cycles)
//! - `+`/`-`: more/fewer headlines
//! - `↑`/`↓`: scroll headlines
//! - `q`/`Esc`: quit

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs, Wrap,
    },
};

use super::plain::format_value;
use super::{ChartKind, DashboardData, DashboardView, RenderSession, clamp_count};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Raw mode plus alternate screen, undone on drop on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // from here on, dropping the guard restores the terminal
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Terminal UI state: the loaded tables plus the viewer's session.
pub struct DashboardApp {
    data: DashboardData,
    session: RenderSession,
    article_scroll: u16,
}

impl DashboardApp {
    pub fn new(data: DashboardData, session: RenderSession) -> Self {
        Self {
            data,
            session,
            article_scroll: 0,
        }
    }

    /// Current session (after any key presses).
    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    /// Runs the event loop until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        self.run_loop(&mut terminal)
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            let view = self.data.view(&self.session);
            terminal.draw(|f| self.draw(f, &view))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key(key.code, key.modifiers, &view)
            {
                return Ok(());
            }
        }
    }

    /// Applies one key press to the session. Returns `true` to quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, view: &DashboardView) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => self.step_ticker(view, -1),
            KeyCode::BackTab | KeyCode::Left => self.step_ticker(view, -1),
            KeyCode::Tab | KeyCode::Right => self.step_ticker(view, 1),
            KeyCode::Char('1') => self.session.chart = ChartKind::Price,
            KeyCode::Char('2') => self.session.chart = ChartKind::Change1d,
            KeyCode::Char('3') => self.session.chart = ChartKind::Volume,
            KeyCode::Char('c') => {
                self.session.chart = match self.session.chart {
                    ChartKind::Price => ChartKind::Change1d,
                    ChartKind::Change1d => ChartKind::Volume,
                    ChartKind::Volume => ChartKind::Price,
                };
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_articles(view, 1),
            KeyCode::Char('-') => self.step_articles(view, -1),
            KeyCode::Down => self.article_scroll = self.article_scroll.saturating_add(1),
            KeyCode::Up => self.article_scroll = self.article_scroll.saturating_sub(1),
            _ => {}
        }
        false
    }

    fn step_ticker(&mut self, view: &DashboardView, delta: isize) {
        let n = view.tickers.len();
        if n == 0 {
            return;
        }
        let current = view.ticker_index().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(n as isize) as usize;
        self.session.ticker = Some(view.tickers[next].clone());
    }

    fn step_articles(&mut self, view: &DashboardView, delta: isize) {
        let current = view.article_count as isize;
        let requested = (current + delta).max(1) as usize;
        self.session.article_count = Some(clamp_count(Some(requested), view.max_articles));
        self.article_scroll = 0;
    }

    fn draw(&self, frame: &mut Frame, view: &DashboardView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // title
                Constraint::Length(3),      // ticker tabs
                Constraint::Length(3),      // metrics
                Constraint::Percentage(45), // chart
                Constraint::Min(6),         // headlines
                Constraint::Length(1),      // footer
            ])
            .split(frame.area());

        draw_title(frame, chunks[0]);
        draw_tabs(frame, chunks[1], view);
        draw_metrics(frame, chunks[2], view);
        draw_chart(frame, chunks[3], view);
        self.draw_articles(frame, chunks[4], view);
        draw_footer(frame, chunks[5]);
    }

    fn draw_articles(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let mut lines: Vec<Line> = Vec::new();
        for art in &view.articles {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", art.date), Style::default().fg(Color::DarkGray)),
                Span::styled(art.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", art.source), Style::default().fg(Color::Yellow)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", art.url),
                Style::default().fg(Color::Blue),
            )));
            if !art.desc.is_empty() {
                lines.push(Line::from(format!("  {}", art.desc)));
            }
        }
        if lines.is_empty() {
            lines.push(Line::from("No headlines available."));
        }

        let title = format!(
            " Latest AI Headlines ({} of {}) ",
            view.article_count, view.max_articles
        );
        let para = Paragraph::new(lines)
            .block(Block::default().title(title).borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .scroll((self.article_scroll, 0));
        frame.render_widget(para, area);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "AI Market Intelligence Dashboard",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  All your AI market insights. One snap.",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let titles: Vec<Line> = view.tickers.iter().map(|t| Line::from(t.clone())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().title(" Ticker ").borders(Borders::ALL))
        .select(view.ticker_index().unwrap_or(0))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_metrics(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let (d1, d5, close) = match &view.metrics {
        Some(m) => (m.change_1d_text(), m.change_5d_text(), m.close_text()),
        None => ("n/a".into(), "n/a".into(), "n/a".into()),
    };
    let change_style = |v: Option<f64>| match v {
        Some(x) if x > 0.0 => Style::default().fg(Color::Green),
        Some(x) if x < 0.0 => Style::default().fg(Color::Red),
        _ => Style::default(),
    };
    let m = view.metrics.as_ref();

    let cells = [
        ("1-Day %", d1, change_style(m.and_then(|m| m.pct_change_1d))),
        ("5-Day %", d5, change_style(m.and_then(|m| m.pct_change_5d))),
        ("Last Close", close, Style::default().add_modifier(Modifier::BOLD)),
    ];
    for (i, (label, value, style)) in cells.into_iter().enumerate() {
        let p = Paragraph::new(Span::styled(value, style))
            .block(Block::default().title(format!(" {label} ")).borders(Borders::ALL));
        frame.render_widget(p, cols[i]);
    }
}

fn draw_chart(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let toggles: Vec<Span> = ChartKind::ALL
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let style = if *k == view.chart {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {}:{} ", i + 1, k.label()), style)
        })
        .collect();
    let block = Block::default()
        .title(format!(" {} ", view.chart_title))
        .title(Line::from(toggles).right_aligned())
        .borders(Borders::ALL);

    if view.points.is_empty() {
        frame.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }

    if view.chart.is_bar() {
        let labels: Vec<(String, u64)> = view
            .points
            .iter()
            .map(|(d, v)| (d.format("%m-%d").to_string(), v.max(0.0) as u64))
            .collect();
        let data: Vec<(&str, u64)> = labels.iter().map(|(l, v)| (l.as_str(), *v)).collect();
        let bars = BarChart::default()
            .block(block)
            .data(data.as_slice())
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(bars, area);
        return;
    }

    let points: Vec<(f64, f64)> = view
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (i as f64, *v))
        .collect();
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
            (lo.min(*v), hi.max(*v))
        });
    let pad = ((max - min) * 0.05).max(0.01);
    let y_bounds = [min - pad, max + pad];
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let first = view.points.first().map(|(d, _)| d.to_string()).unwrap_or_default();
    let last = view.points.last().map(|(d, _)| d.to_string()).unwrap_or_default();

    let dataset = Dataset::default()
        .name(view.chart.label())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(vec![
                    format_value(view.chart, y_bounds[0]),
                    format_value(view.chart, y_bounds[1]),
                ]),
        );
    frame.render_widget(chart, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " ←/→ ticker   1/2/3 chart   +/- headlines   ↑/↓ scroll   q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
