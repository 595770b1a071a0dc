use clap::{Parser, Subcommand};

/// Command-line interface definition for rpunchclock
/// CLI client for a remote attendance server with geolocation proof
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out with geolocation proof against a remote attendance server",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the attendance server base URL
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Store the bearer token used to authenticate attendance requests
    Login {
        #[arg(long, value_name = "TOKEN", help = "Token issued by the attendance server")]
        token: String,
    },

    /// Remove the stored bearer token
    Logout,

    /// Show today's attendance record and the next expected action
    Status,

    /// Acquire a location fix and print the enriched result
    Locate {
        #[arg(
            long = "probe",
            help = "Only query the permission state, without triggering a fix"
        )]
        probe: bool,
    },

    /// Clock in with your current location
    In {
        #[arg(long, help = "Optional note attached to the clock-in")]
        notes: Option<String>,

        #[arg(
            long = "yes",
            short = 'y',
            help = "Skip the one-time location consent prompt"
        )]
        assume_consent: bool,
    },

    /// Clock out with your current location
    Out {
        #[arg(long, help = "Optional note attached to the clock-out")]
        notes: Option<String>,

        #[arg(
            long = "yes",
            short = 'y',
            help = "Skip the one-time location consent prompt"
        )]
        assume_consent: bool,
    },
}
