use clap::Parser;
use std::path::PathBuf;

/// Sidenav: replay drawer gestures against a recording host.
#[derive(Parser, Debug)]
#[command(name = "sidenav", version, about)]
pub struct Args {
    /// Gesture script (JSON array of events). Runs a built-in demo if omitted.
    pub script: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Host width in points.
    #[arg(long, default_value_t = 390.0)]
    pub width: f64,

    /// Host height in points.
    #[arg(long, default_value_t = 844.0)]
    pub height: f64,

    /// Print the resolved config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_phone_portrait() {
        let args = Args::parse_from(["sidenav"]);
        assert_eq!(args.width, 390.0);
        assert_eq!(args.height, 844.0);
        assert!(args.script.is_none());
        assert!(!args.dump_config);
    }

    #[test]
    fn accepts_script_and_overrides() {
        let args = Args::parse_from([
            "sidenav",
            "swipe.json",
            "--config",
            "/tmp/sidenav.toml",
            "--width",
            "1024",
            "--log-level",
            "sidenav=debug",
        ]);
        assert_eq!(args.script, Some(PathBuf::from("swipe.json")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sidenav.toml")));
        assert_eq!(args.width, 1024.0);
        assert_eq!(args.log_level.as_deref(), Some("sidenav=debug"));
    }
}
