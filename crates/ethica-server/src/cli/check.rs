// crates/ethica-server/src/cli/check.rs
// `ethica config` - show effective settings, optionally validate env vars and the file

use ethica::EthicaError;
use ethica::config::{ConfigValidation, EnvConfig, EthicaConfig, Settings};
use std::io::ErrorKind;
use std::path::Path;

pub fn run_config(settings: &Settings, check: bool) {
    println!("Config file:     {}", EthicaConfig::config_path().display());
    println!(
        "Thought logging: {}",
        if settings.thought_logging { "on" } else { "off" }
    );
    println!("Log level:       {}", settings.log_level);

    if check {
        println!();
        let mut validation = EnvConfig::load().validate();
        check_config_file(&EthicaConfig::config_path(), &mut validation);
        println!("{}", validation.report());
    }
}

/// A missing file is fine; an unreadable or unparseable one is an error
fn check_config_file(path: &Path, validation: &mut ConfigValidation) {
    match EthicaConfig::try_load_from(path) {
        Ok(_) => {}
        Err(EthicaError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => validation.add_error(format!("{}: {}", path.display(), e.to_user_string())),
    }
}
