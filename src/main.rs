use std::{io, process::ExitCode};

use log::error;
use rand::{SeedableRng, rngs::StdRng};

use custrec::{cli::menu::Session, config::AppConfig, logging, restaurant::Restaurant};

fn main() -> ExitCode {
    let config = AppConfig::default();
    if let Err(err) = logging::init_logging(&config.log_level) {
        eprintln!("custrec: logging disabled: {err}");
    }

    let restaurant = Restaurant::with_config(config.restaurant_name, config.registry, config.sales);
    let stdin = io::stdin();
    let mut session = Session::new(restaurant, stdin.lock(), io::stdout(), StdRng::from_entropy());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end status=error err={err}");
            eprintln!("custrec: {err}");
            ExitCode::FAILURE
        }
    }
}
