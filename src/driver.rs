//! Fixed-cadence scheduler: a thread that owns the engine and advances it
//! once per tick, reachable through [`SimHandle`]s.

use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::{Error, Grid, Pos, Result, RunState, Sim, World};

/// Immutable copy of the engine state at one point in time.
#[derive(Debug, Clone)]
pub struct Frame<W = Grid>
where
    W: World,
{
    pub world: W,
    pub generation: u64,
    pub run_state: RunState,
    pub population: usize,
    pub cycle_period: Option<usize>,
}

impl<W> Frame<W>
where
    W: World,
{
    fn capture(sim: &Sim<W>) -> Self {
        Self {
            world: sim.snapshot(),
            generation: sim.generation(),
            run_state: sim.run_state(),
            population: sim.population(),
            cycle_period: sim.cycle_period(),
        }
    }
}

pub enum SimCmd<W>
where
    W: World,
{
    Snapshot(mpsc::Sender<Frame<W>>),
    ToggleCell(Pos),
    ToggleRunning,
    Shutdown,
}

pub struct SimHandle<W = Grid>
where
    W: World,
{
    sender: mpsc::Sender<SimCmd<W>>,
}

impl<W> Clone for SimHandle<W>
where
    W: World,
{
    fn clone(&self) -> Self {
        let sender = self.sender.clone();
        Self { sender }
    }
}

impl<W> SimHandle<W>
where
    W: World,
{
    fn send(&self, cmd: SimCmd<W>) -> Result<()> {
        self.sender.send(cmd).map_err(|_| Error::Disconnected)
    }

    pub fn snapshot(&self) -> Result<Frame<W>> {
        let (sender, receiver) = mpsc::channel();
        self.send(SimCmd::Snapshot(sender))?;
        receiver.recv().map_err(|_| Error::Disconnected)
    }

    pub fn toggle_cell(&self, pos: Pos) -> Result<()> {
        self.send(SimCmd::ToggleCell(pos))
    }

    pub fn toggle_running(&self) -> Result<()> {
        self.send(SimCmd::ToggleRunning)
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(SimCmd::Shutdown)
    }
}

#[derive(Debug)]
pub struct Driver<W = Grid>
where
    W: World,
{
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd<W>>,
}

impl<W> Driver<W>
where
    W: World,
{
    pub fn spawn(sim: Sim<W>, tick: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, sim, tick));
        log::info!("simulation thread started, tick={tick:?}");
        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle<W> {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    /// Asks the thread to stop and waits for it.
    pub fn join(self) -> Result<()> {
        // the thread may already be gone after a shutdown from a handle
        let _ = self.sender.send(SimCmd::Shutdown);
        self.thread.join().map_err(|_| Error::Disconnected)
    }
}

fn sim_loop<W>(receiver: mpsc::Receiver<SimCmd<W>>, mut sim: Sim<W>, tick: Duration)
where
    W: World,
{
    let mut next_tick = Instant::now() + tick;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(timeout) {
            Ok(SimCmd::Snapshot(sender)) => {
                // the requester may have given up waiting
                let _ = sender.send(Frame::capture(&sim));
            }
            Ok(SimCmd::ToggleCell(pos)) => {
                if let Err(err) = sim.toggle_cell_state(pos) {
                    log::warn!("ignored edit: {err}");
                }
            }
            Ok(SimCmd::ToggleRunning) => {
                sim.toggle_running();
            }
            Ok(SimCmd::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                sim.advance();
                next_tick += tick;
                if next_tick < Instant::now() {
                    next_tick = Instant::now() + tick;
                }
            }
        }
    }

    log::info!("simulation thread stopped at generation {}", sim.generation());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    const IDLE: Duration = Duration::from_secs(3600);

    #[test]
    fn commands_apply_in_order() {
        let driver = Driver::spawn(Sim::initialize(5, 5).unwrap(), IDLE);
        let handle = driver.handle();
        handle.toggle_cell(pos!(1, 1)).unwrap();
        handle.toggle_cell(pos!(2, 1)).unwrap();
        handle.toggle_cell(pos!(1, 1)).unwrap();
        handle.toggle_running().unwrap();
        let frame = handle.snapshot().unwrap();
        assert_eq!(frame.world.actives(), vec![pos!(2, 1)]);
        assert_eq!(frame.run_state, RunState::Running);
        assert_eq!(frame.generation, 0);
        driver.join().unwrap();
    }

    #[test]
    fn out_of_bounds_edit_is_ignored() {
        let driver = Driver::spawn(Sim::initialize(3, 3).unwrap(), IDLE);
        let handle = driver.handle();
        handle.toggle_cell(pos!(9, 9)).unwrap();
        assert_eq!(handle.snapshot().unwrap().population, 0);
        driver.join().unwrap();
    }

    #[test]
    fn running_driver_advances() {
        let mut sim = Sim::initialize(5, 5).unwrap();
        for pos in [pos!(2, 1), pos!(2, 2), pos!(2, 3)] {
            sim.toggle_cell_state(pos).unwrap();
        }
        sim.toggle_running();
        let driver = Driver::spawn(sim, Duration::from_millis(1));
        let handle = driver.handle();
        thread::sleep(Duration::from_millis(50));
        let frame = handle.snapshot().unwrap();
        assert!(frame.generation > 0);
        assert_eq!(frame.population, 3);
        driver.join().unwrap();
    }

    #[test]
    fn stopped_driver_does_not_advance() {
        let driver = Driver::spawn(Sim::initialize(3, 3).unwrap(), Duration::from_millis(1));
        let handle = driver.handle();
        handle.toggle_cell(pos!(1, 1)).unwrap();
        thread::sleep(Duration::from_millis(20));
        let frame = handle.snapshot().unwrap();
        assert_eq!(frame.generation, 0);
        assert_eq!(frame.population, 1);
        driver.join().unwrap();
    }

    #[test]
    fn handle_reports_disconnect_after_shutdown() {
        let driver = Driver::spawn(Sim::initialize(3, 3).unwrap(), IDLE);
        let handle = driver.handle();
        handle.shutdown().unwrap();
        driver.join().unwrap();
        assert!(matches!(handle.snapshot(), Err(Error::Disconnected)));
    }
}
