use std::{
    io::{stdout, Write},
    process::ExitCode,
};

use clap::Parser;

use lifegrid::{Config, Driver, Result, Sim};

pub use view::View;
mod view;

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[error] {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let sim = config.build_sim()?;
    if let Some(generations) = config.headless {
        return run_headless(sim, generations);
    }

    let driver = Driver::spawn(sim, config.tick_interval());
    let view = View::spawn(driver.handle());
    let result = view.join();
    driver.join()?;
    result
}

fn run_headless(mut sim: Sim, generations: u64) -> Result<()> {
    if !sim.is_running() {
        sim.toggle_running();
    }
    for _ in 0..generations {
        sim.advance();
    }
    log::info!(
        "stopped after {} generations, population={}",
        sim.generation(),
        sim.population()
    );
    let mut stdout = stdout().lock();
    write!(stdout, "{}", sim.world())?;
    stdout.flush()?;
    Ok(())
}
