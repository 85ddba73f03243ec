/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;
use std::io;

/* Custom libraries */
use console::Console;
use dispatcher::Dispatcher;

/* Modules */
mod clock;
mod config;
mod console;
mod dispatcher;
mod elevator;
mod shared;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .about("Simulates a bank of elevator cars serving ride requests")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("cars")
                .long("cars")
                .takes_value(true)
                .help("Number of cars, overrides the configuration file"),
        )
        .arg(
            Arg::new("tick-ms")
                .long("tick-ms")
                .takes_value(true)
                .help("Milliseconds per simulated second, overrides the configuration file"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(config_path), "Configuration");
    if let Some(cars) = matches.value_of("cars") {
        config.simulation.n_cars = unwrap_or_exit!(cars.parse::<u32>(), "--cars");
    }
    if let Some(tick_ms) = matches.value_of("tick-ms") {
        config.simulation.tick_interval_ms = unwrap_or_exit!(tick_ms.parse::<u64>(), "--tick-ms");
    }
    unwrap_or_exit!(config.simulation.validate(), "Configuration");

    // Create the simulation, the clock starts on the `start` command
    let dispatcher = Dispatcher::new(&config.simulation);
    info!(
        "Elevator simulation ready: {} cars, {} floors, tick every {:?}",
        dispatcher.car_count(),
        dispatcher.n_floors(),
        config.simulation.tick_interval()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    unwrap_or_exit!(
        Console::new(&dispatcher).run(stdin.lock(), stdout.lock()),
        "Console"
    );

    // Dropping the dispatcher stops the clock
    drop(dispatcher);
}
