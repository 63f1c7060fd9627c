use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portfolio_sync")]
#[command(about = "Sync portfolio content between the Resource API and a local mirror", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Snapshot)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load all content and print it as JSON.
    Snapshot,

    /// Query the API health endpoint.
    Health,

    /// Load the profile and write an embedded resume to PATH.
    ExportResume { path: PathBuf },

    /// Print an Argon2 hash suitable for ADMIN_PASSWORD_HASH.
    HashPassword { password: String },

    /// Sign in as the admin and keep the session in the mirror.
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: String,
    },

    /// Drop the persisted admin session.
    Logout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_snapshot() {
        let cli = Cli::try_parse_from(["portfolio_sync"]).unwrap();
        assert_eq!(cli.command(), Command::Snapshot);
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["portfolio_sync", "export-resume", "cv.pdf"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::ExportResume {
                path: PathBuf::from("cv.pdf")
            }
        );

        let cli =
            Cli::try_parse_from(["portfolio_sync", "login", "--password", "secret"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Login {
                username: None,
                password: "secret".to_string()
            }
        );

        assert!(Cli::try_parse_from(["portfolio_sync", "hash-password"]).is_err());
    }
}
