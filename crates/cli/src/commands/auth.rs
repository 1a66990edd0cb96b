use std::time::Duration;

use clap::Args;
use serde_json::json;

use noctis_core::config::AppConfig;
use noctis_core::session::{LoginRequest, RegisterRequest};

use crate::commands::{restore_session, simulate_processing, CommandResult};

const SIGN_IN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, help = "Keep the session across restarts (accepted, mock-only)")]
    pub remember_me: bool,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, help = "Accept the terms and conditions")]
    pub agree_to_terms: bool,
}

pub fn login(config: &AppConfig, args: LoginArgs) -> CommandResult {
    let mut sessions = match restore_session("login", config) {
        Ok(sessions) => sessions,
        Err(result) => return result,
    };

    let request = LoginRequest {
        email: args.email,
        password: args.password,
        remember_me: args.remember_me,
    };
    simulate_processing(SIGN_IN_DELAY);
    match sessions.login(request) {
        Ok(session) => CommandResult::success_with(
            "login",
            format!("signed in as {}", session.profile.display_name),
            Some(json!({
                "email": session.profile.email,
                "display_name": session.profile.display_name,
            })),
        ),
        Err(error) => CommandResult::failure("login", "auth_validation", error.to_string(), 1),
    }
}

pub fn register(config: &AppConfig, args: RegisterArgs) -> CommandResult {
    let mut sessions = match restore_session("register", config) {
        Ok(sessions) => sessions,
        Err(result) => return result,
    };

    let request = RegisterRequest {
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        first_name: args.first_name,
        last_name: args.last_name,
        agree_to_terms: args.agree_to_terms,
    };
    simulate_processing(SIGN_IN_DELAY);
    match sessions.register(request) {
        Ok(session) => CommandResult::success_with(
            "register",
            format!("account created for {}", session.profile.display_name),
            Some(json!({
                "email": session.profile.email,
                "display_name": session.profile.display_name,
            })),
        ),
        Err(error) => CommandResult::failure("register", "auth_validation", error.to_string(), 1),
    }
}

pub fn logout(config: &AppConfig) -> CommandResult {
    let mut sessions = match restore_session("logout", config) {
        Ok(sessions) => sessions,
        Err(result) => return result,
    };

    sessions.logout();
    CommandResult::success("logout", "signed out")
}

pub fn whoami(config: &AppConfig) -> CommandResult {
    let sessions = match restore_session("whoami", config) {
        Ok(sessions) => sessions,
        Err(result) => return result,
    };

    match sessions.current() {
        Some(session) => CommandResult::success_with(
            "whoami",
            format!("signed in as {}", session.profile.display_name),
            Some(json!({
                "email": session.profile.email,
                "display_name": session.profile.display_name,
                "signed_in_at": session.signed_in_at,
            })),
        ),
        None => CommandResult::success_with(
            "whoami",
            "not signed in",
            Some(json!({ "authenticated": false })),
        ),
    }
}
