use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        help = "Narrow the deck to profiles matching the applied filters"
    )]
    pub apply_filters: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lovematch"]);

        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert!(!cli.apply_filters);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["lovematch", "-t", "10", "--apply-filters"]);

        assert_eq!(cli.tick_rate, 10.0);
        assert!(cli.apply_filters);
    }
}
