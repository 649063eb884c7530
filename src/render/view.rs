//! Live terminal view for scroll mode.
//!
//! Drives a bottom-seeded window one evolver step per frame, drawing the
//! visible rows in place rather than reprinting history. A dedicated thread
//! reads keys and reports them over a channel so the frame loop never blocks
//! on input.

use std::io::{self, Write, stdin, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::{clear, cursor};

use crate::compute::{Board, Evolver};
use crate::schema::EvolutionMode;

use super::Renderer;

/// Commands from the key-reader thread.
enum InputCmd {
    Quit,
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let command = match key {
            Ok(Key::Char('q')) | Ok(Key::Esc) | Ok(Key::Ctrl('c')) => InputCmd::Quit,
            Ok(_) => continue,
            // A dead stdin means nobody can ask us to stop; bail out.
            Err(_) => InputCmd::Quit,
        };
        if sender.send(command).is_err() {
            return;
        }
    }
}

/// Run the scrolling window until the user quits (`q`, `Esc` or `Ctrl-C`).
///
/// Each frame draws every row except the bottom one, then advances the
/// window one step and sleeps out the remainder of `step_interval`. The
/// bottom row is the staging row: freshly computed, shown only after it
/// scrolls up, so the first visible frame is the seed row entering from the
/// bottom edge. Quit keys are polled at the top of the frame; an in-flight
/// step always completes.
pub fn run_scroll<R: Renderer>(
    board: &mut Board,
    renderer: &R,
    step_interval: Duration,
) -> io::Result<()> {
    debug_assert!(board.num_time() >= 2);

    let mut screen = stdout().into_raw_mode()?;
    write!(screen, "{}{}", cursor::Hide, clear::All)?;

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || input_loop(sender));

    let mut evolver = Evolver::new(EvolutionMode::Scroll);
    debug!("scroll view started, {} visible rows", board.num_time() - 1);

    loop {
        if let Ok(InputCmd::Quit) = receiver.try_recv() {
            break;
        }
        let frame_start = Instant::now();

        let mut frame = String::new();
        for time in 0..board.num_time() - 1 {
            let goto = cursor::Goto(1, time as u16 + 1);
            frame += &format!("{goto}");
            frame += &renderer.row(board.row(time));
        }
        write!(screen, "{frame}")?;
        screen.flush()?;

        evolver.step(board);

        let remaining = step_interval.saturating_sub(frame_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }

    write!(screen, "{}{}{}", clear::All, cursor::Goto(1, 1), cursor::Show)?;
    screen.flush()?;
    debug!("scroll view stopped");
    Ok(())
}
