use std::io::{BufRead, Write};

use crate::cli::Commands;
use crate::config::Settings;
use crate::core::{SubmitOutcome, Workflow};
use crate::error::AppError;
use crate::message::{GeminiClient, MessageSource, OfflineMessages};
use crate::notify::{Notifier, WebhookNotifier, is_configured};
use crate::output::{
    EMPTY_HISTORY, FORM_TITLE, output_history_json, output_submit_json, output_validation_json,
    render_contact_line, render_error, render_form_prompt, render_history_table,
    render_setup_panel, render_success, render_unconfigured_banner, render_validation,
    render_webhook_script,
};
use crate::store::{HistoryStore, MemoryHistoryStore, SqliteHistoryStore};

pub(crate) struct CommandContext<'a> {
    pub(crate) settings: &'a Settings,
    pub(crate) json: bool,
    pub(crate) use_color: bool,
}

fn open_store(settings: &Settings) -> Result<Box<dyn HistoryStore>, AppError> {
    if settings.ephemeral {
        return Ok(Box::new(MemoryHistoryStore::default()));
    }
    match &settings.store_path {
        Some(path) => Ok(Box::new(SqliteHistoryStore::open(path)?)),
        None => {
            tracing::warn!("no home directory found, history will not be kept");
            Ok(Box::new(MemoryHistoryStore::default()))
        }
    }
}

/// Store for read-only commands: a database that does not exist yet is not created
fn open_history_store(settings: &Settings) -> Result<Box<dyn HistoryStore>, AppError> {
    match &settings.store_path {
        Some(path) if !settings.ephemeral && !path.exists() => {
            tracing::debug!(path = %path.display(), "no history database yet");
            Ok(Box::new(MemoryHistoryStore::default()))
        }
        _ => open_store(settings),
    }
}

/// Wire the workflow to the store and clients the settings ask for
pub(crate) fn build_workflow(settings: &Settings) -> Result<Workflow, AppError> {
    let store = open_store(settings)?;

    let messages: Box<dyn MessageSource> = if settings.offline {
        Box::new(OfflineMessages)
    } else {
        Box::new(GeminiClient::new(
            settings.api_key.clone(),
            &settings.api_base,
            &settings.model,
        ))
    };

    let notifier = if settings.offline {
        None
    } else {
        WebhookNotifier::from_url(&settings.webhook_url).map(|n| Box::new(n) as Box<dyn Notifier>)
    };

    Ok(Workflow::new(
        store,
        messages,
        notifier,
        settings.timezone,
        settings.delays,
    ))
}

/// Dispatch a command. `Ok(false)` means the command ran but the check-in was not accepted.
pub(crate) fn run(command: Commands, ctx: &CommandContext<'_>) -> Result<bool, AppError> {
    match command {
        Commands::Form => {
            let mut workflow = build_workflow(ctx.settings)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_form(&mut workflow, ctx, stdin.lock(), stdout.lock())?;
            Ok(true)
        }
        Commands::Submit { email } => {
            let mut workflow = build_workflow(ctx.settings)?;
            handle_submit(&mut workflow, &email, ctx)
        }
        Commands::History => {
            let store = open_history_store(ctx.settings)?;
            handle_history(&*store, ctx);
            Ok(true)
        }
        Commands::Setup { script } => {
            handle_setup(script, ctx);
            Ok(true)
        }
    }
}

fn handle_submit(
    workflow: &mut Workflow,
    email: &str,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    let outcome = match workflow.submit(email) {
        Ok(outcome) => outcome,
        Err(AppError::InvalidEmail) => {
            let message = AppError::InvalidEmail.to_string();
            if ctx.json {
                println!("{}", output_validation_json(&message));
            } else {
                eprintln!("{}", render_validation(&message, ctx.use_color));
            }
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    if ctx.json {
        println!("{}", output_submit_json(&outcome, workflow.state()));
    } else {
        match &outcome {
            SubmitOutcome::Success { record, message } => println!(
                "{}",
                render_success(record, message, workflow.delays().success, ctx.use_color)
            ),
            SubmitOutcome::Failed { message } => {
                eprintln!("{}", render_error(message, ctx.use_color));
            }
        }
    }

    Ok(matches!(outcome, SubmitOutcome::Success { .. }))
}

fn handle_history(store: &dyn HistoryStore, ctx: &CommandContext<'_>) {
    let history = store.load();
    if ctx.json {
        println!("{}", output_history_json(&history));
    } else if history.is_empty() {
        println!("{EMPTY_HISTORY}");
    } else {
        print!("{}", render_history_table(&history, ctx.use_color));
    }
}

fn handle_setup(script_only: bool, ctx: &CommandContext<'_>) {
    let settings = ctx.settings;
    if script_only {
        print!(
            "{}",
            render_webhook_script(&settings.admin_email, &settings.contact_email)
        );
    } else {
        print!("{}", render_setup_panel(settings, ctx.use_color));
    }
}

/// Interactive form: one submission per input line until EOF
pub(crate) fn run_form<R: BufRead, W: Write>(
    workflow: &mut Workflow,
    ctx: &CommandContext<'_>,
    mut input: R,
    mut out: W,
) -> Result<(), AppError> {
    writeln!(out, "{FORM_TITLE}")?;
    writeln!(
        out,
        "{}",
        render_contact_line(&ctx.settings.contact_email, ctx.use_color)
    )?;
    if !is_configured(&ctx.settings.webhook_url) {
        writeln!(
            out,
            "{}",
            render_unconfigured_banner(&ctx.settings.admin_email, ctx.use_color)
        )?;
    }

    let mut show_history = true;
    loop {
        let history = workflow.state().history();
        if show_history && !history.is_empty() {
            write!(out, "{}", render_history_table(history, ctx.use_color))?;
        }
        show_history = false;

        write!(out, "\n{}", render_form_prompt(ctx.use_color))?;
        out.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        match workflow.submit(&line) {
            Ok(SubmitOutcome::Success { record, message }) => {
                writeln!(
                    out,
                    "{}",
                    render_success(&record, &message, workflow.delays().success, ctx.use_color)
                )?;
            }
            Ok(SubmitOutcome::Failed { message }) => {
                writeln!(out, "{}", render_error(&message, ctx.use_color))?;
            }
            Err(AppError::InvalidEmail) => {
                let message = AppError::InvalidEmail.to_string();
                writeln!(out, "{}", render_validation(&message, ctx.use_color))?;
                continue;
            }
            Err(e) => return Err(e),
        }
        out.flush()?;
        workflow.wait_for_reset();
        show_history = true;
    }
}
