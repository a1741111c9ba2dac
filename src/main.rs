use std::io;
use std::rc::Rc;

use clap::Parser;
use dialoguer::{Input, Password};
use mentor_login::config::{ConfigError, LoginConfig};
use mentor_login::net::api::HttpAuthEndpoint;
use mentor_login::net::types::LoginError;
use mentor_login::pages::login::{LoginPage, LoginView};
use mentor_login::state::session::{MemorySessionStore, SessionStore};
use mentor_login::util::navigate::HistoryNavigator;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] LoginError),
    #[error("failed to read {field}: {source}")]
    Prompt { field: &'static str, source: dialoguer::Error },
    #[error("login did not authenticate")]
    NotAuthenticated,
}

#[derive(Parser, Debug)]
#[command(name = "mentor-login", about = "Log in to the mentorship backend")]
struct Cli {
    #[arg(long, env = "BACKEND_API_URL")]
    backend_url: Option<String>,

    #[arg(long, env = "LOGIN_LANDING_PATH")]
    landing_path: Option<String>,

    #[arg(long, env = "LOGIN_PATH")]
    login_path: Option<String>,

    #[arg(long, env = "LOGIN_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Print the access token to stdout after a successful login.
    #[arg(long, default_value_t = false)]
    print_token: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = LoginConfig::from_parts(cli.backend_url, cli.landing_path, cli.login_path)?;
    tracing::debug!(backend = %config.backend_url, "config loaded");

    let endpoint = Rc::new(HttpAuthEndpoint::new(&config.backend_url)?);
    let session = Rc::new(MemorySessionStore::new());
    let navigator = Rc::new(HistoryNavigator::new());
    let page = LoginPage::new(endpoint, session.clone(), navigator.clone(), config.routes);

    let email = or_prompt(cli.email, "email", ask_email)?;
    let password = or_prompt(cli.password, "password", ask_password)?;
    page.controller().set_email(email);
    page.controller().set_password(password);

    let outcome = page.controller().submit().await;
    tracing::debug!(?outcome, sent = outcome.was_sent(), history = ?navigator.history(), "submit settled");

    match page.render() {
        LoginView::Form(form) => {
            let landing = navigator.current().unwrap_or_else(|| page.routes().landing.clone());
            eprintln!("{} ({landing})", form.heading);
            if cli.print_token {
                if let Some(token) = session.read() {
                    println!("{}", token.as_str());
                }
            }
            Ok(())
        }
        LoginView::Redirect(path) => {
            eprintln!("not signed in; staying on {path}");
            Err(CliError::NotAuthenticated)
        }
        LoginView::Spinner => Err(CliError::NotAuthenticated),
    }
}

/// Use the supplied value, or ask for it interactively.
fn or_prompt<F>(value: Option<String>, field: &'static str, ask: F) -> Result<String, CliError>
where
    F: FnOnce() -> dialoguer::Result<String>,
{
    match value {
        Some(value) => Ok(value),
        None => ask().map_err(|source| CliError::Prompt { field, source }),
    }
}

fn ask_email() -> dialoguer::Result<String> {
    Input::new().with_prompt("Email").interact_text()
}

// Input is not echoed.
fn ask_password() -> dialoguer::Result<String> {
    Password::new().with_prompt("Password").interact()
}
