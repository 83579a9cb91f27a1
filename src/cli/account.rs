//! Account CLI commands
//!
//! Registration, login and logout. Passwords come from `--password` (or the
//! `POCKETBOOK_PASSWORD` environment variable) and otherwise from a hidden
//! prompt.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::config::settings::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::services::AuthService;
use crate::storage::Storage;

pub const PASSWORD_ENV: &str = "POCKETBOOK_PASSWORD";

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Register {
        /// Display name
        name: String,
        /// Email address (used to log in)
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },
    /// Log in and remember the user for later commands
    Login {
        /// Email address
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the logged-in user
    Logout,
    /// Show the logged-in user
    Whoami,
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> PocketbookResult<()> {
    let service = AuthService::new(storage, settings);

    match cmd {
        AccountCommands::Register {
            name,
            email,
            password,
        } => {
            let password = read_password(password, "Choose a password: ")?;
            let user = service.register(&name, &email, &password)?;
            println!("Account created for {}. You can now log in.", user.email);
        }

        AccountCommands::Login { email, password } => {
            let password = read_password(password, "Password: ")?;
            let user = service.login(&email, &password)?;
            println!("Logged in as {}", user.label());
        }

        AccountCommands::Logout => {
            service.logout()?;
            println!("Logged out.");
        }

        AccountCommands::Whoami => match service.current_user()? {
            Some(user) => println!("{}", user.label()),
            None => println!("Not logged in."),
        },
    }

    Ok(())
}

/// Use the given password or prompt for one without echo
fn read_password(given: Option<String>, prompt: &str) -> PocketbookResult<Zeroizing<String>> {
    match given {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password(prompt)
            .map(Zeroizing::new)
            .map_err(|e| PocketbookError::Io(format!("Failed to read password: {}", e))),
    }
}
