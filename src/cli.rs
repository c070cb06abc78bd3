use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Snooker tour viewer
///
/// Shows upcoming matches, money rankings and the season calendar from the
/// maxBreak backend, filling in player names from the rate-limited public
/// snooker API when the backend doesn't know a player.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: verbose logs are mirrored to stdout.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show upcoming matches with resolved player and tour names (default)
    Matches,
    /// Show the money ranking with resolved player names
    Ranking,
    /// Show the season calendar grouped by status
    Calendar,
    /// Show the matches of the tour running today
    Tour,
}

impl Args {
    /// The selected command, defaulting to the upcoming match list.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Matches)
    }
}
