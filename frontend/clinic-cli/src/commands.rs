use clinic_cli::{GateTarget, SearchTarget};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the credential
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored credential
    Logout,

    /// Resolve the stored credential to an identity
    Whoami,

    /// Check whether the current session may enter a route group
    Gate {
        #[arg(value_enum)]
        target: GateTarget,
    },

    /// Type into a directory picker and print the results it shows
    Search {
        #[arg(value_enum)]
        directory: SearchTarget,
        /// Successive values of the search box, one per keystroke
        #[arg(required = true)]
        keystrokes: Vec<String>,
    },
}
