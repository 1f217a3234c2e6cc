//! Terminal rendering and playback via crossterm.
//!
//! Raw mode + alternate screen for the duration of the animation; the
//! terminal is restored before returning, including on error paths.

use std::error::Error;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathlab_core::{CellKind, Grid, Pos};
use pathlab_replay::{schedule, Speed};
use pathlab_search::{Algorithm, SearchResult};

/// Pause between finishing the search and starting the animation.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How the playback ended.
pub struct Outcome {
    pub aborted: bool,
}

/// Glyph and color for a cell kind.
fn appearance(kind: CellKind) -> (char, Color) {
    match kind {
        CellKind::Start => ('S', Color::Green),
        CellKind::End => ('E', Color::Red),
        CellKind::Wall => ('█', Color::White),
        CellKind::Unvisited => ('·', Color::DarkGrey),
        CellKind::Visited => ('░', Color::Cyan),
        CellKind::Path => ('◆', Color::Yellow),
        CellKind::Current => ('●', Color::Magenta),
    }
}

/// Animate `result` over `grid`, then wait for a key before returning.
pub fn play(
    grid: &mut Grid,
    result: &SearchResult,
    algorithm: Algorithm,
    speed: Speed,
) -> Result<Outcome, Box<dyn Error>> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )?;

    let res = run_animation(&mut stdout, grid, result, algorithm, speed);

    // Best-effort teardown; the animation result takes precedence.
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    res
}

fn run_animation(
    out: &mut impl Write,
    grid: &mut Grid,
    result: &SearchResult,
    algorithm: Algorithm,
    speed: Speed,
) -> Result<Outcome, Box<dyn Error>> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        Print(format!("pathlab: {algorithm} ({speed})"))
    )?;
    for p in grid.positions() {
        draw_cell(out, grid, p, None)?;
    }
    draw_legend(out, grid.rows())?;
    draw_status(out, grid.rows(), "animating… press q or Esc to abort")?;
    out.flush()?;

    if wait_or_quit(SETTLE_DELAY)? {
        return Ok(Outcome { aborted: true });
    }

    let mut head: Option<Pos> = None;
    let mut aborted = false;
    for frame in schedule(result, speed) {
        if wait_or_quit(frame.delay)? {
            aborted = true;
            break;
        }
        pathlab_replay::apply(&frame, grid);
        if let Some(prev) = head.take() {
            draw_cell(out, grid, prev, None)?;
        }
        draw_cell(out, grid, frame.pos, Some(frame.pos))?;
        head = Some(frame.pos);
        out.flush()?;
    }
    if let Some(prev) = head.take() {
        draw_cell(out, grid, prev, None)?;
    }

    if aborted {
        out.flush()?;
        return Ok(Outcome { aborted });
    }

    let message = if result.found() {
        format!("path found: {} steps. press any key to exit", result.steps())
    } else {
        "no path: the end is walled off. press any key to exit".to_string()
    };
    draw_status(out, grid.rows(), &message)?;
    out.flush()?;
    wait_for_key()?;

    Ok(Outcome { aborted })
}

fn draw_cell(out: &mut impl Write, grid: &Grid, p: Pos, head: Option<Pos>) -> io::Result<()> {
    let Some(cell) = grid.at(p) else {
        return Ok(());
    };
    let kind = match head {
        Some(h) if h == p && !cell.kind.is_persistent() => CellKind::Current,
        _ => cell.kind,
    };
    let (ch, color) = appearance(kind);
    queue!(
        out,
        cursor::MoveTo(p.col as u16, p.row as u16 + 1),
        SetForegroundColor(color),
        Print(ch),
        ResetColor
    )
}

fn draw_legend(out: &mut impl Write, grid_rows: i32) -> io::Result<()> {
    let mut legend = String::new();
    for (kind, label) in [
        (CellKind::Start, "start"),
        (CellKind::End, "end"),
        (CellKind::Wall, "wall"),
        (CellKind::Visited, "visited"),
        (CellKind::Path, "path"),
    ] {
        let (ch, _) = appearance(kind);
        legend.push_str(&format!("{ch} {label}  "));
    }
    queue!(
        out,
        cursor::MoveTo(0, grid_rows as u16 + 2),
        Print(legend.trim_end())
    )
}

fn draw_status(out: &mut impl Write, grid_rows: i32, msg: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, grid_rows as u16 + 3),
        terminal::Clear(ClearType::CurrentLine),
        Print(msg)
    )
}

/// Sleep for `delay` while watching the keyboard. Returns true when the
/// user asked to abort.
fn wait_or_quit(delay: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + delay;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        if event::poll(deadline - now)? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(true);
                }
            }
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
