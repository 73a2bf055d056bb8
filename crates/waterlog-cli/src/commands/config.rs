use clap::Subcommand;
use waterlog_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dotted key, e.g. "tracker.daily_goal" or "storage.day_boundary"
        key: String,
    },
    /// Change one setting; takes effect on the next check-in
    Set {
        /// Dotted key
        key: String,
        /// New value ("utc"/"local" for storage.day_boundary, whole numbers for tracker.*)
        value: String,
    },
    /// Print the whole config.toml
    List,
    /// Print where config.toml lives
    Path,
    /// Restore the default goal, record cap, debounce window and storage key
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key} (see `waterlog config list`)"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            let stored = config.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
            if key == "storage.key" {
                eprintln!("note: records kept under the previous key are not moved");
            }
        }
        ConfigAction::List => {
            print!("{}", toml::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::file_path()?.display());
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
