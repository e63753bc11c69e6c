// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive TUI shell (ratatui + crossterm), including a
//! built-in demo session. The TUI is presentation only: every mutation goes
//! through `ops::apply_ops` and every displayed window is recomputed from the
//! session snapshot.

use std::{collections::BTreeSet, error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::{RowId, Session, SpacingLaw, Window};
use crate::ops::{self, Op};
use crate::query;
use crate::render;

mod theme;

use theme::TuiTheme;

const FOOTER_BRAND: &str = " 🆆 🅴 🅵 🆃 ";
const UI_MAX_INSTANCES: u32 = 20;
const UI_MAX_INTERVAL: i64 = 5;
const STRIP_PREVIEW_WIDTH: usize = 72;
const EXPANDED_VALUE_LINES: usize = 4;

/// Runs the interactive terminal UI against a fresh default session.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_session(Session::new())
}

pub fn run_with_session(session: Session) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(session, theme);

    {
        let mut terminal = TerminalSession::new()?;
        while !app.should_quit {
            terminal.draw(|frame| draw(frame, &mut app))?;

            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    _ => {}
                }
            }
        }
    }

    // Export lines land on the restored terminal, not inside the raw screen.
    for line in &app.exports {
        println!("{line}");
    }

    Ok(())
}

/// A session with varied rows, used by `--demo` and the TUI tests.
pub fn demo_session() -> Session {
    let mut session = Session::new().with_row_count(4);

    for (row, base, instances, interval, law, shift) in [
        (1u32, 1i64, 5u32, 1i64, SpacingLaw::Linear, 0i64),
        (2, 2, 4, 1, SpacingLaw::Quadratic, 0),
        (3, 1, 6, 2, SpacingLaw::Linear, 3),
        (4, 1, 3, 1, SpacingLaw::Cubic, 0),
    ] {
        let row = RowId::new(row).expect("demo row id");
        let mut params = session.params(row);
        params.set_base_value(base).expect("demo base value");
        params.set_instance_count(instances).expect("demo instances");
        params.set_periodic_interval(interval).expect("demo interval");
        params.set_spacing_law(law);
        params.set_shift(shift);
        session.set_params(row, params);
    }

    session.rank_mut().toggle(RowId::new(2).expect("demo row id"));
    session.rank_mut().toggle(RowId::new(1).expect("demo row id"));
    session.set_highlight_conflicts(true);

    session
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeKind {
    Interleave,
    Overlay,
}

impl MergeKind {
    fn label(self) -> &'static str {
        match self {
            Self::Interleave => "interleaved",
            Self::Overlay => "static",
        }
    }
}

struct App {
    session: Session,
    theme: TuiTheme,
    selected: usize,
    composite: Option<(MergeKind, Window)>,
    conflicts: BTreeSet<usize>,
    toast: Option<String>,
    exports: Vec<String>,
    should_quit: bool,
}

impl App {
    fn new(session: Session, theme: TuiTheme) -> Self {
        let conflicts = ops::conflicts(&session);
        Self {
            session,
            theme,
            selected: 0,
            composite: None,
            conflicts,
            toast: None,
            exports: Vec::new(),
            should_quit: false,
        }
    }

    fn visible_rows(&self) -> Vec<RowId> {
        self.session.visible_rows()
    }

    fn selected_row(&self) -> Option<RowId> {
        let visible = self.visible_rows();
        if visible.is_empty() {
            return None;
        }
        Some(visible[self.selected.min(visible.len() - 1)])
    }

    fn apply(&mut self, ops_batch: &[Op]) {
        let base_rev = self.session.rev();
        match ops::apply_ops(&mut self.session, base_rev, ops_batch) {
            Ok(result) => {
                if !result.delta.regenerated.is_empty()
                    || result.delta.visibility_changed
                    || result.delta.modes_changed
                {
                    self.conflicts = ops::conflicts(&self.session);
                }
                self.selected = self
                    .selected
                    .min(self.session.row_count() as usize - 1);
                self.toast = None;
            }
            Err(err) => self.toast = Some(err.to_string()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.session.row_count() as usize - 1;
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Char('b') => self.nudge_base(1),
            KeyCode::Char('B') => self.nudge_base(-1),
            KeyCode::Char('i') => self.nudge_instances(1),
            KeyCode::Char('I') => self.nudge_instances(-1),
            KeyCode::Char('p') => self.nudge_interval(1),
            KeyCode::Char('P') => self.nudge_interval(-1),
            KeyCode::Char('s') => self.nudge_shift(1),
            KeyCode::Char('S') => self.nudge_shift(-1),
            KeyCode::Char('l') => {
                if let Some(row) = self.selected_row() {
                    let law = self.session.params(row).spacing_law().cycled();
                    self.apply(&[Op::SetSpacingLaw { row, law }]);
                }
            }
            KeyCode::Char('r') => {
                if let Some(row) = self.selected_row() {
                    self.apply(&[Op::ResetRow { row }]);
                }
            }
            KeyCode::Char('o') => {
                if let Some(row) = self.selected_row() {
                    self.apply(&[Op::ToggleRank { row }]);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let count = self.session.row_count() + 1;
                self.apply(&[Op::SetRowCount { count }]);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let count = self.session.row_count().saturating_sub(1);
                self.apply(&[Op::SetRowCount { count }]);
            }
            KeyCode::Char('x') => {
                let enabled = !self.session.highlight_conflicts();
                self.apply(&[Op::SetHighlightConflicts { enabled }]);
            }
            KeyCode::Char('a') => {
                let enabled = !self.session.edit_all();
                self.apply(&[Op::SetEditAll { enabled }]);
            }
            KeyCode::Enter | KeyCode::Char('m') => {
                let composite = ops::compute_composite(&self.session);
                self.composite = Some((MergeKind::Interleave, composite));
                self.toast = None;
            }
            KeyCode::Char('t') => match ops::static_composite(&self.session) {
                Ok(composite) => {
                    self.composite = Some((MergeKind::Overlay, composite));
                    self.toast = None;
                }
                Err(conflict) => {
                    // A failed overlay leaves the previous composite alone.
                    self.toast = Some(conflict.to_string());
                }
            },
            KeyCode::Char('c') => self.export_csv(),
            KeyCode::Char('y') => self.export_literal(),
            KeyCode::Char('u') => self.export_row_literal(),
            _ => {}
        }
    }

    fn nudge_base(&mut self, delta: i64) {
        if let Some(row) = self.selected_row() {
            let value = (self.session.params(row).base_value() + delta).max(0);
            self.apply(&[Op::SetBaseValue { row, value }]);
        }
    }

    fn nudge_instances(&mut self, delta: i64) {
        if let Some(row) = self.selected_row() {
            let current = i64::from(self.session.params(row).instance_count());
            let value = (current + delta).clamp(1, i64::from(UI_MAX_INSTANCES)) as u32;
            self.apply(&[Op::SetInstanceCount { row, value }]);
        }
    }

    fn nudge_interval(&mut self, delta: i64) {
        if let Some(row) = self.selected_row() {
            let current = self.session.params(row).periodic_interval();
            let value = (current + delta).clamp(1, UI_MAX_INTERVAL);
            self.apply(&[Op::SetPeriodicInterval { row, value }]);
        }
    }

    fn nudge_shift(&mut self, delta: i64) {
        if let Some(row) = self.selected_row() {
            let value = self.session.params(row).shift() + delta;
            self.apply(&[Op::SetShift { row, value }]);
        }
    }

    fn export_csv(&mut self) {
        match &self.composite {
            Some((_, composite)) => {
                self.exports.push(render::csv_values(composite));
                self.toast = Some("composite queued as CSV (printed on quit)".to_owned());
            }
            None => self.toast = Some("nothing to export: compute a composite first".to_owned()),
        }
    }

    fn export_literal(&mut self) {
        match &self.composite {
            Some((_, composite)) => {
                self.exports
                    .push(render::literal_list(render::COMPOSITE_LIST_NAME, composite));
                self.toast = Some("composite queued as list literal (printed on quit)".to_owned());
            }
            None => self.toast = Some("nothing to export: compute a composite first".to_owned()),
        }
    }

    fn export_row_literal(&mut self) {
        if let Some(row) = self.selected_row() {
            let window = ops::row_window(&self.session, row);
            self.exports
                .push(render::literal_list(&render::row_list_name(row), &window));
            self.toast = Some(format!("row {row} queued as list literal (printed on quit)"));
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let composite_height = if app.composite.is_some() {
        let value_lines = app
            .composite
            .as_ref()
            .map(|(_, composite)| {
                query::distinct_values(composite)
                    .len()
                    .min(EXPANDED_VALUE_LINES)
            })
            .unwrap_or(0);
        (4 + value_lines) as u16
    } else {
        0
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(composite_height),
            Constraint::Length(1),
        ])
        .split(area);

    draw_rows(frame, layout[0], app);
    if app.composite.is_some() {
        draw_composite(frame, layout[1], app);
    }
    draw_footer(frame, layout[2], app);
}

fn draw_rows(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let visible = app.visible_rows();
    let selected = app.selected.min(visible.len().saturating_sub(1));

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .map(|row| ListItem::new(row_line(app, *row)))
        .collect();

    let title = format!(
        " Rows ({}) {}{}",
        app.session.row_count(),
        if app.session.highlight_conflicts() {
            "[conflicts] "
        } else {
            ""
        },
        if app.session.edit_all() { "[edit-all] " } else { "" },
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style(true))
                .title(title),
        )
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style());

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_line(app: &App, row: RowId) -> Line<'static> {
    let params = app.session.params(row);
    let window = ops::row_window(&app.session, row);

    let (rank_badge, rank_style) = match app.session.rank().rank_of(row) {
        Some(rank) => (format!("[{rank}]"), app.theme.rank_badge_style()),
        None => ("[ ]".to_owned(), app.theme.base_style()),
    };

    let summary = format!(
        " b={} i={} p={} {} s={} ",
        params.base_value(),
        params.instance_count(),
        params.periodic_interval(),
        params.spacing_law(),
        params.shift(),
    );

    let mut spans = vec![
        Span::styled(format!("{row:>3} "), app.theme.base_style()),
        Span::styled(rank_badge, rank_style),
        Span::styled(summary, app.theme.base_style()),
    ];
    spans.extend(strip_spans(app, &window));
    Line::from(spans)
}

/// Per-cell spans for the leading cells of a window, conflict cells called
/// out when highlighting is on.
fn strip_spans(app: &App, window: &Window) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(STRIP_PREVIEW_WIDTH);
    for (position, cell) in window.cells().iter().take(STRIP_PREVIEW_WIDTH).enumerate() {
        let in_conflict =
            app.session.highlight_conflicts() && app.conflicts.contains(&position);
        let mark = render::cell_mark(cell).to_string();
        let style = match (cell.value(), in_conflict) {
            (_, true) => app.theme.conflict_style(),
            (Some(cell_value), false) => app.theme.value_style(cell_value),
            (None, false) => app.theme.base_style(),
        };
        spans.push(Span::styled(mark, style));
    }
    spans
}

fn draw_composite(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some((kind, composite)) = &app.composite else {
        return;
    };

    let max_width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();

    lines.push(Line::from(strip_spans(app, composite)));
    lines.push(Line::from(Span::styled(
        render::text::truncate_with_ellipsis(
            &render::literal_list(render::COMPOSITE_LIST_NAME, composite),
            max_width,
        ),
        app.theme.base_style(),
    )));

    for (value, part) in query::decompose(composite)
        .into_iter()
        .take(EXPANDED_VALUE_LINES)
    {
        let mut spans = vec![Span::styled(
            format!("{value:>3}: "),
            app.theme.value_style(value),
        )];
        spans.extend(strip_spans(app, &part));
        lines.push(Line::from(spans));
    }

    let panel = Paragraph::new(lines).style(app.theme.base_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.panel_border_style(false))
            .title(format!(" Composite ({}) ", kind.label())),
    );
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let line = match &app.toast {
        Some(toast) => Line::from(Span::styled(toast.clone(), app.theme.error_style())),
        None => {
            let mut spans = vec![Span::styled(
                FOOTER_BRAND.to_owned(),
                app.theme.base_style(),
            )];
            for (key, label) in [
                ("↑↓", "row"),
                ("b/i/p/s", "±param"),
                ("l", "law"),
                ("r", "reset"),
                ("o", "rank"),
                ("+/-", "rows"),
                ("x", "conflicts"),
                ("a", "edit-all"),
                ("⏎", "compute"),
                ("t", "static"),
                ("c/y/u", "export"),
                ("q", "quit"),
            ] {
                spans.push(Span::styled(format!(" {key}"), app.theme.footer_key_style()));
                spans.push(Span::styled(
                    format!(" {label}"),
                    app.theme.footer_label_style(),
                ));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line).style(app.theme.base_style()), area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
