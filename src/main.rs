use std::error::Error;
mod config;
use config::Config;
mod errors;

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = config::config_file_path()?;

    let mut config = Config::load(&config_path)?;
    config.set_user("mark", &config_path)?;

    let config = Config::load(&config_path)?;
    println!("{:?}", config);

    Ok(())
}
