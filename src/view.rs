use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use lifegrid::{pos, Error, Frame, Pos, Result, RunState, SimHandle, World};

use canvas::Canvas;
mod canvas;

pub struct View {
    thread: JoinHandle<io::Result<()>>,
}

impl View {
    pub fn spawn(handle: SimHandle) -> Self {
        let thread = thread::spawn(|| view_loop(handle));
        Self { thread }
    }

    pub fn join(self) -> Result<()> {
        self.thread.join().map_err(|_| Error::Disconnected)??;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    ToggleCell,
    ToggleRunning,
    TogglePaint,
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let command = match key {
            Ok(Key::Char('q')) | Ok(Key::Ctrl('c')) | Err(_) => InputCmd::Exit,
            Ok(Key::Up) => InputCmd::Move(Dir::Up),
            Ok(Key::Down) => InputCmd::Move(Dir::Down),
            Ok(Key::Left) => InputCmd::Move(Dir::Left),
            Ok(Key::Right) => InputCmd::Move(Dir::Right),
            Ok(Key::Char(' ')) => InputCmd::ToggleCell,
            Ok(Key::Char('s')) | Ok(Key::Char('\n')) => InputCmd::ToggleRunning,
            Ok(Key::Char('p')) => InputCmd::TogglePaint,
            _ => continue,
        };
        let exit = matches!(command, InputCmd::Exit);
        if sender.send(command).is_err() || exit {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

struct Cursor {
    pos: Pos,
    paint: bool,
}

fn view_loop(handle: SimHandle) -> io::Result<()> {
    let mut stdout = stdout().into_raw_mode()?;
    write!(stdout, "{}", termion::cursor::Hide)?;

    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut cursor = Cursor {
        pos: pos!(0, 0),
        paint: false,
    };
    let result = loop {
        let Ok(frame) = handle.snapshot() else {
            break Ok(());
        };
        if !handle_inputs(&receiver, &handle, frame.world.dimensions(), &mut cursor) {
            break Ok(());
        }
        if let Err(err) = display_frame(&mut stdout, &frame, &cursor) {
            break Err(err);
        }
        thread::sleep(VIEW_REFRESH_INTERVAL);
    };

    write!(
        stdout,
        "{}{}{}",
        termion::clear::All,
        termion::cursor::Goto(1, 1),
        termion::cursor::Show
    )?;
    stdout.flush()?;
    result
}

/// Applies every pending input. Returns false when the view should close.
fn handle_inputs(
    receiver: &mpsc::Receiver<InputCmd>,
    handle: &SimHandle,
    (columns, rows): (usize, usize),
    cursor: &mut Cursor,
) -> bool {
    for cmd in receiver.try_iter() {
        let sent = match cmd {
            InputCmd::Exit => return false,
            InputCmd::Move(direction) => {
                let moved = cursor.pos
                    + match direction {
                        Dir::Up => pos!(0, -1),
                        Dir::Down => pos!(0, 1),
                        Dir::Left => pos!(-1, 0),
                        Dir::Right => pos!(1, 0),
                    };
                let moved = pos!(
                    moved.x.clamp(0, columns as i32 - 1),
                    moved.y.clamp(0, rows as i32 - 1)
                );
                let entered = moved != cursor.pos;
                cursor.pos = moved;
                if cursor.paint && entered {
                    handle.toggle_cell(moved)
                } else {
                    Ok(())
                }
            }
            InputCmd::ToggleCell => handle.toggle_cell(cursor.pos),
            InputCmd::ToggleRunning => handle.toggle_running(),
            InputCmd::TogglePaint => {
                cursor.paint = !cursor.paint;
                Ok(())
            }
        };
        if sent.is_err() {
            return false;
        }
    }
    true
}

/// First visible grid coordinate on one axis, keeping `cursor` in view.
fn scroll(cursor: i32, extent: usize, visible: usize) -> i32 {
    if visible >= extent {
        return 0;
    }
    let max = (extent - visible) as i32;
    (cursor - visible as i32 / 2).clamp(0, max)
}

fn status_line(frame: &Frame, cursor: &Cursor) -> String {
    let state = match frame.run_state {
        RunState::Running => "RUNNING",
        RunState::Stopped => "STOPPED",
    };
    let mut status = format!(
        "{state} | generation {} | population {} | cursor {}",
        frame.generation, frame.population, cursor.pos
    );
    if let Some(period) = frame.cycle_period {
        status += &format!(" | period {period}");
    }
    if cursor.paint {
        status += " | paint";
    }
    status
}

fn display_frame(out: &mut impl Write, frame: &Frame, cursor: &Cursor) -> io::Result<()> {
    let (width, height) = termion::terminal_size()?;
    let (columns, rows) = frame.world.dimensions();
    let visible_columns = columns.min(width as usize);
    let visible_rows = rows.min((height as usize).saturating_sub(1));
    let origin = pos!(
        scroll(cursor.pos.x, columns, visible_columns),
        scroll(cursor.pos.y, rows, visible_rows)
    );

    let mut canvas = Canvas::new(width as usize, visible_rows + 1);
    canvas.layer(|pos| {
        let pos = origin + pos;
        if !frame.world.contains(pos) {
            None
        } else if pos == cursor.pos {
            Some('@')
        } else if frame.world.get(pos).is_alive() {
            Some('#')
        } else {
            Some('.')
        }
    });
    canvas.text(visible_rows, &status_line(frame, cursor));
    canvas.display(out)
}

#[test]
fn test_scroll() {
    assert_eq!(scroll(5, 10, 20), 0);
    assert_eq!(scroll(0, 100, 20), 0);
    assert_eq!(scroll(50, 100, 20), 40);
    assert_eq!(scroll(99, 100, 20), 80);
}
