//! sortscope - Terminal User Interface
//!
//! Animated bar chart of the recorded frames using ratatui.
//! App logic lives in `sortscope::tui::sort_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use sortscope::config::VisConfig;
    use sortscope::tui::SortApp;

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => match VisConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading '{path}': {e}");
                eprintln!("Usage: sort-tui [path/to/config.yaml]");
                std::process::exit(1);
            }
        },
        None => VisConfig::default(),
    };

    let app = match SortApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin sort-tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
        Frame, Terminal,
    };
    use sortscope::tui::SortApp;
    use std::io;
    use std::time::{Duration, Instant};

    /// Key events are polled at least this often so input stays responsive
    /// at slow playback speeds.
    const INPUT_POLL: Duration = Duration::from_millis(50);

    pub fn run(mut app: SortApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = run_main_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut SortApp,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| ui(f, app))?;

            let tick_rate = app.frame_delay();
            let timeout = tick_rate
                .saturating_sub(last_tick.elapsed())
                .min(INPUT_POLL);
            if crossterm::event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.tick();
                last_tick = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn ui(f: &mut Frame, app: &SortApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(8),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_chart(f, chunks[1], app);
        render_description(f, chunks[2], app);
        render_status_bar(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &SortApp) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                app.run().algorithm().display_name(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {} elements", app.run().input().len())),
            Span::styled(
                "  [space] pause  [s] start  [a/A] algorithm  [+/-] speed  [q] quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL).title("sortscope"));

        f.render_widget(title, area);
    }

    /// Bar width that fits `count` bars with a one-cell gap into `width`.
    fn bar_width(width: u16, count: usize) -> (u16, u16) {
        let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
        let inner = width.saturating_sub(2);
        if inner / count >= 2 {
            ((inner / count).saturating_sub(1).max(1), 1)
        } else {
            (1, 0)
        }
    }

    fn render_chart(f: &mut Frame, area: Rect, app: &SortApp) {
        let values = app.bars();
        let data: Vec<Bar> = values
            .iter()
            .map(|bar| {
                let color = if bar.highlighted {
                    Color::Red
                } else {
                    Color::Cyan
                };
                Bar::default()
                    .value(u64::try_from(bar.value).unwrap_or(0))
                    .text_value(String::new())
                    .style(Style::default().fg(color))
            })
            .collect();

        let (width, gap) = bar_width(area.width, data.len());
        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Array"))
            .data(BarGroup::default().bars(&data))
            .bar_width(width)
            .bar_gap(gap);

        f.render_widget(chart, area);
    }

    fn render_description(f: &mut Frame, area: Rect, app: &SortApp) {
        let lines: Vec<Line> = app
            .run()
            .description()
            .iter()
            .map(|line| Line::from(format!("- {line}")))
            .collect();

        let description = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Description"));

        f.render_widget(description, area);
    }

    fn render_status_bar(f: &mut Frame, area: Rect, app: &SortApp) {
        let style = if app.last_error.is_some() {
            Style::default().fg(Color::White).bg(Color::Red)
        } else if app.is_finished() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let text = app
            .last_error
            .clone()
            .unwrap_or_else(|| app.status_line());
        let status_bar = Paragraph::new(Line::from(Span::styled(format!(" {text}"), style)))
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

}
