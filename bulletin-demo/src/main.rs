use std::rc::Rc;

use ::config::ConfigError;
use bulletin::{Bulletin, NamedObserver};
use common::subject_observer::Subject;
use log::debug;
use thiserror::Error;
use validator::ValidationErrors;

use crate::config::app::AppConfig;

mod config;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
}

/// Attaches two observers, broadcasts a first message, detaches the second
/// observer and broadcasts again.
fn run(config: &AppConfig) -> Bulletin {
    let mut bulletin = Bulletin::default();

    let first = Rc::new(NamedObserver::new(config.first_observer.as_str()));
    let second = Rc::new(NamedObserver::new(config.second_observer.as_str()));

    bulletin.attach(first.clone());
    bulletin.attach(second.clone());

    bulletin.notify(config.first_message.clone());

    bulletin.detach(second);

    bulletin.notify(config.second_message.clone());

    bulletin
}

fn main() -> Result<(), AppError> {
    config::log::init();

    let config = AppConfig::new()?;
    debug!("Running demonstration with configuration: {:?}", config);

    run(&config);
    Ok(())
}
