use std::{fmt::Display, io::Write, pin::Pin};

use anyhow::Result;
use chrono_english::Dialect;
use clap::{Parser, ValueEnum};
use futures::{Stream, StreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_stream::wrappers::LinesStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    session::{
        journal::{self, MoodCategory},
        nav::Screen,
        Role, Session,
    },
    utils::{
        clock::{Clock, DefaultClock},
        time::parse_journal_date,
    },
};

use super::render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct StartCommand {
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `start`. Runs the interactive journaling session over
/// stdin until the user quits, the input ends or Ctrl-C is received.
pub async fn process_start_command(StartCommand { date_style }: StartCommand) -> Result<()> {
    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.cancel();
            }
        });
    }

    let input = LinesStream::new(tokio::io::BufReader::new(tokio::io::stdin()).lines());
    run_session(input, shutdown, &DefaultClock, date_style.into()).await?;
    println!("\nGoodbye!");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives the screen state machine over a stream of input lines. Returns the
/// final session so tests can inspect what a scripted run left behind.
pub async fn run_session(
    input: impl Stream<Item = std::io::Result<String>>,
    shutdown: CancellationToken,
    clock: &dyn Clock,
    dialect: Dialect,
) -> Result<Session> {
    let mut input = std::pin::pin!(input);
    let mut session = Session::new();

    render::header("🧠 Moodline");
    println!("Please log in to continue.");

    loop {
        let flow = match session.screen() {
            Screen::Login => login_screen(&mut input, &shutdown, &mut session).await?,
            Screen::RoleSelect => role_screen(&mut input, &shutdown, &mut session).await?,
            Screen::Main => {
                main_screen(&mut input, &shutdown, &mut session, clock, dialect).await?
            }
        };
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(session)
}

/// Reads one line of input. `None` means the session is over, either because
/// the input ended or because shutdown was requested.
async fn prompt<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    text: &str,
) -> Result<Option<String>> {
    print!("{text} ");
    std::io::stdout().flush()?;
    tokio::select! {
        _ = shutdown.cancelled() => Ok(None),
        line = input.next() => Ok(line.transpose()?.map(|v| v.trim().to_string())),
    }
}

async fn login_screen<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    session: &mut Session,
) -> Result<Flow> {
    let Some(username) = prompt(input, shutdown, "Username:").await? else {
        return Ok(Flow::Quit);
    };
    let Some(password) = prompt(input, shutdown, "Password:").await? else {
        return Ok(Flow::Quit);
    };

    match session.login(&username, &password) {
        Ok(()) => {
            info!("Logged in");
            render::success("Logged in successfully! 🎉");
        }
        Err(e) => render::failure(&e.to_string()),
    }
    Ok(Flow::Continue)
}

async fn role_screen<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    session: &mut Session,
) -> Result<Flow> {
    let Some(choice) = prompt(input, shutdown, "Are you a student or a worker?").await? else {
        return Ok(Flow::Quit);
    };

    match choice.parse::<Role>() {
        Ok(role) => {
            session.select_role(role);
            render::success(&format!("Welcome, {role}! 🎉"));
        }
        Err(e) => render::failure(&e.to_string()),
    }
    Ok(Flow::Continue)
}

async fn main_screen<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    session: &mut Session,
    clock: &dyn Clock,
    dialect: Dialect,
) -> Result<Flow> {
    if session.take_banner() {
        render::banner("Thank you for registering!");
    }

    let Some(command) =
        prompt(input, shutdown, "(calendar, dashboard, log, export, logout, quit)>").await?
    else {
        return Ok(Flow::Quit);
    };

    match command.to_lowercase().as_str() {
        "" => {}
        "calendar" | "c" => render::print_calendar(session),
        "dashboard" | "d" => render::print_dashboard(session.role(), &session.summary()),
        "log" | "l" => return log_entry_flow(input, shutdown, session, clock, dialect).await,
        "export" | "e" => return export_flow(input, shutdown, session).await,
        "logout" => {
            session.logout();
            println!("Logged out.");
        }
        "quit" | "q" => return Ok(Flow::Quit),
        other => render::failure(&format!("Unknown command '{other}'")),
    }
    Ok(Flow::Continue)
}

async fn log_entry_flow<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    session: &mut Session,
    clock: &dyn Clock,
    dialect: Dialect,
) -> Result<Flow> {
    let Some(date_raw) = prompt(
        input,
        shutdown,
        "Date (\"today\", \"yesterday\", \"15/03/2025\"; empty for today):",
    )
    .await?
    else {
        return Ok(Flow::Quit);
    };
    let date = if date_raw.is_empty() {
        clock.now().date_naive()
    } else {
        match parse_journal_date(&date_raw, clock.now(), dialect) {
            Ok(v) => v,
            Err(e) => {
                render::failure(&e.to_string());
                return Ok(Flow::Continue);
            }
        }
    };

    let Some(mood_raw) = prompt(input, shutdown, "Mood (happy, neutral, sad, angry, anxious):")
        .await?
    else {
        return Ok(Flow::Quit);
    };
    let mood = match mood_raw.parse::<MoodCategory>() {
        Ok(v) => v,
        Err(e) => {
            render::failure(&e.to_string());
            return Ok(Flow::Continue);
        }
    };

    let Some(stress_raw) = prompt(input, shutdown, "Stress level (1-10):").await? else {
        return Ok(Flow::Quit);
    };
    let Ok(stress) = stress_raw.parse::<u8>() else {
        render::failure(&format!("'{stress_raw}' is not a number between 1 and 10"));
        return Ok(Flow::Continue);
    };

    match session.log_entry(date, mood, stress) {
        Ok(()) => {
            debug!("Logged entry for {date}: {mood:?} {stress}");
            render::success(&format!("Entry logged for {date}! 🎉"));
        }
        Err(e) => render::failure(&e.to_string()),
    }
    Ok(Flow::Continue)
}

async fn export_flow<S: Stream<Item = std::io::Result<String>>>(
    input: &mut Pin<&mut S>,
    shutdown: &CancellationToken,
    session: &Session,
) -> Result<Flow> {
    let Some(path) = prompt(input, shutdown, "Write JSON to (empty prints to stdout):").await?
    else {
        return Ok(Flow::Quit);
    };

    let json = journal::export_entries(session)?;
    if path.is_empty() {
        println!("{json}");
    } else {
        match tokio::fs::write(&path, &json).await {
            Ok(()) => render::success(&format!(
                "Exported {} entries to {path}",
                session.entries().len()
            )),
            Err(e) => render::failure(&format!("Couldn't write {path}: {e}")),
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod session_tests {
    use anyhow::Result;
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use chrono_english::Dialect;
    use futures::stream;
    use tokio_util::sync::CancellationToken;

    use crate::{
        session::{journal::MoodCategory, Role},
        utils::{clock::MockClock, logging::TEST_LOGGING},
    };

    use super::run_session;

    const TEST_DATE: NaiveDate = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();

    fn test_now() -> DateTime<Local> {
        Utc.from_utc_datetime(&NaiveDateTime::new(
            TEST_DATE,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        ))
        .into()
    }

    fn test_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(test_now());
        clock
    }

    fn scripted(lines: &[&str]) -> impl futures::Stream<Item = std::io::Result<String>> {
        stream::iter(
            lines
                .iter()
                .map(|v| Ok(v.to_string()))
                .collect::<Vec<std::io::Result<String>>>(),
        )
    }

    #[tokio::test]
    async fn full_session_logs_entries() -> Result<()> {
        *TEST_LOGGING;
        let lines = [
            "user",
            "password",
            "student",
            "log",
            "01/02/2024",
            "happy",
            "3",
            "log",
            "",
            "sad",
            "9",
            "calendar",
            "dashboard",
            "quit",
        ];

        let session = run_session(
            scripted(&lines),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        assert!(session.is_logged_in());
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.entries().len(), 2);

        let first = &session.entries()[&NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()];
        assert_eq!(first.mood, MoodCategory::Happy);
        assert_eq!(*first.stress, 3);

        // empty date defaulted to the mocked today
        let today = &session.entries()[&test_now().date_naive()];
        assert_eq!(today.mood, MoodCategory::Sad);
        assert_eq!(*today.stress, 9);

        assert_eq!(session.summary().display_average(), Some(6.0));
        Ok(())
    }

    #[tokio::test]
    async fn bad_inputs_are_retried_not_fatal() -> Result<()> {
        let lines = [
            "user", "wrong", // rejected login
            "user", "password", // second try succeeds
            "pilot", // not a role
            "worker", "quit",
        ];

        let session = run_session(
            scripted(&lines),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        assert_eq!(session.role(), Some(Role::Worker));
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_stress_records_nothing() -> Result<()> {
        let lines = [
            "user", "password", "student", "log", "today", "happy", "0", "quit",
        ];

        let session = run_session(
            scripted(&lines),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        assert!(session.entries().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn logout_starts_over() -> Result<()> {
        let lines = [
            "user", "password", "student", "logout", "user", "password", "worker", "quit",
        ];

        let session = run_session(
            scripted(&lines),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        assert_eq!(session.role(), Some(Role::Worker));
        Ok(())
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() -> Result<()> {
        let session = run_session(
            scripted(&["user", "password"]),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        assert!(session.is_logged_in());
        assert_eq!(session.role(), None);
        Ok(())
    }

    #[tokio::test]
    async fn export_writes_journal_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("journal.json");
        let path_line = path.to_string_lossy().to_string();

        let lines = [
            "user",
            "password",
            "student",
            "log",
            "today",
            "anxious",
            "7",
            "export",
            path_line.as_str(),
            "quit",
        ];

        run_session(
            scripted(&lines),
            CancellationToken::new(),
            &test_clock(),
            Dialect::Uk,
        )
        .await?;

        let written = std::fs::read_to_string(&path)?;
        let parsed: Vec<crate::session::journal::Entry> = serde_json::from_str(&written)?;
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].mood, MoodCategory::Anxious);
        Ok(())
    }
}
