//! An interactive view of the run, in the terminal.

use crate::args::Args;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use rautomata_lib::Simulate;
use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

/// Side of the square put out by `x`.
const EXTINGUISH_RANGE: i32 = 10;

/// How long to wait for a key when paused.
const IDLE: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
    /// The step limit is reached, or nothing can change anymore.
    Finished,
}

struct SimWindow {
    stdout: Stdout,
    status: Status,
    delay: Duration,
    steps: Option<u64>,
    message: String,
}

impl SimWindow {
    fn new(delay: Duration, steps: Option<u64>) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(SimWindow {
            stdout,
            status: Status::Paused,
            delay,
            steps,
            message: String::new(),
        })
    }

    fn update(&mut self, world: &dyn Simulate) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let width = world.width().min(cols as i32);
        let height = world.height().min(rows.saturating_sub(2) as i32);

        queue!(
            self.stdout,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(format!(
                "Gen: {}  Rule: {}  Active: {}  Boundary: {}",
                world.generation(),
                world.rule_label(),
                world.active_count(),
                world.boundary()
            ))
        )?;
        for y in 0..height {
            queue!(self.stdout, cursor::MoveTo(0, y as u16 + 1))?;
            for x in 0..width {
                if let (Some(c), Some((r, g, b))) = (world.glyph((x, y)), world.color((x, y))) {
                    queue!(self.stdout, SetForegroundColor(Color::Rgb { r, g, b }), Print(c))?;
                }
            }
        }
        let help = match self.status {
            Status::Running => "Running... Press [space] to pause, [q] to quit.",
            Status::Paused => "Paused. Press [space] to resume, [→] to step, [q] to quit.",
            Status::Finished => "Finished. Press [q] to quit.",
        };
        queue!(
            self.stdout,
            ResetColor,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            Print(help),
            Print("  "),
            Print(&self.message)
        )?;
        self.stdout.flush()
    }

    fn step(&mut self, world: &mut dyn Simulate) {
        world.step();
        if world.is_settled() {
            self.status = Status::Finished;
            self.message = format!("Settled after {} generations.", world.generation());
        } else if self.steps.map_or(false, |n| world.generation() >= n) {
            self.status = Status::Finished;
            self.message = format!("Reached {} generations.", world.generation());
        }
    }

    fn close(&mut self) -> io::Result<()> {
        execute!(self.stdout, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

fn main_loop(win: &mut SimWindow, world: &mut dyn Simulate) -> io::Result<()> {
    win.update(world)?;
    loop {
        let timeout = match win.status {
            Status::Running => win.delay,
            _ => IDLE,
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        win.status = match win.status {
                            Status::Running => Status::Paused,
                            Status::Paused => Status::Running,
                            Status::Finished => Status::Finished,
                        };
                        win.update(world)?;
                    }
                    KeyCode::Right if win.status == Status::Paused => {
                        win.step(world);
                        win.update(world)?;
                    }
                    KeyCode::Char('x') => {
                        let center = (world.width() / 2, world.height() / 2);
                        let count = world.extinguish(center, EXTINGUISH_RANGE);
                        debug!("Extinguished {} cells", count);
                        win.message = format!("Extinguished {} cells.", count);
                        if win.status == Status::Finished && !world.is_settled() {
                            win.status = Status::Paused;
                        }
                        win.update(world)?;
                    }
                    _ => (),
                },
                Event::Resize(_, _) => win.update(world)?,
                _ => (),
            }
        } else if win.status == Status::Running {
            win.step(world);
            win.update(world)?;
        }
    }
    Ok(())
}

/// Runs the automaton in the TUI, and prints the last generation on exit.
pub(crate) fn run(mut args: Args) -> io::Result<()> {
    let mut win = SimWindow::new(args.delay, args.steps)?;
    let result = main_loop(&mut win, &mut *args.world);
    win.close()?;
    result?;
    println!("{}", crate::cli::snapshot(&*args.world, args.one_dimensional));
    Ok(())
}
