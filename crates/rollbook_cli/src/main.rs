//! Interactive terminal front end for the student record manager.
//!
//! # Responsibility
//! - Map typed commands onto controller actions.
//! - Print render plans as a plain-text table with notices and overlays.
//!
//! # Invariants
//! - One command is handled to completion before the next line is read.
//! - Delete confirmation blocks on the next input line.

use clap::Parser;
use log::info;
use rollbook_core::db::{open_db, open_db_in_memory};
use rollbook_core::{
    core_version, default_log_level, init_logging, Action, ContactInput, Controller,
    FormDirective, FormInput, KvRecordStore, OverlayKind, RenderPlan,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "rollbook", about = "Local student record manager", version)]
struct Cli {
    /// Path to the record store database file.
    #[arg(long, default_value = "rollbook.db")]
    db: PathBuf,

    /// Keep records in memory only; nothing is written to disk.
    #[arg(long)]
    ephemeral: bool,

    /// Directory for log files; logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = if cli.ephemeral {
        open_db_in_memory()?
    } else {
        open_db(&cli.db)?
    };
    let store = KvRecordStore::try_new(&conn)?;
    let mut controller = Controller::open(store)?;
    info!(
        "event=cli_start module=cli status=ok ephemeral={} version={}",
        cli.ephemeral,
        core_version()
    );

    println!("rollbook {} — type `help` for commands", core_version());
    let plan = controller.dispatch(Action::Search(String::new()))?;
    render(&plan);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        if input == "help" {
            print_help();
            continue;
        }

        let Some(action) = parse_command(input) else {
            println!("unknown command; type `help`");
            continue;
        };

        let plan = controller.dispatch(action)?;
        render(&plan);

        // Confirmation prompts block until answered.
        if plan.confirm.is_some() {
            let answer = lines.next().transpose()?.unwrap_or_default();
            let confirmed = matches!(answer.trim(), "y" | "yes");
            let follow_up = if confirmed {
                Action::DeleteConfirmed
            } else {
                Action::DeleteCancelled
            };
            render(&controller.dispatch(follow_up)?);
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> Option<Action> {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "add" | "submit" => Some(Action::Submit(parse_form(rest))),
        "list" => Some(Action::Search(String::new())),
        "search" => Some(Action::Search(rest.to_string())),
        "edit" => rest.parse().ok().map(Action::EditRequested),
        "delete" => rest.parse().ok().map(Action::DeleteRequested),
        "privacy" => Some(Action::OpenOverlay(OverlayKind::Privacy)),
        "terms" => Some(Action::OpenOverlay(OverlayKind::Terms)),
        "contact" => Some(Action::OpenOverlay(OverlayKind::Contact)),
        "close" => Some(Action::CloseOverlay),
        "message" => Some(Action::SubmitContact(parse_contact(rest))),
        _ => None,
    }
}

/// Splits `id|name|email|contact|class|address`; trailing fields may be
/// omitted.
fn parse_form(rest: &str) -> FormInput {
    let mut fields = rest.split('|').map(str::to_string);
    FormInput {
        id: fields.next().unwrap_or_default(),
        name: fields.next().unwrap_or_default(),
        email: fields.next().unwrap_or_default(),
        contact: fields.next().unwrap_or_default(),
        class: fields.next().unwrap_or_default(),
        address: fields.next().unwrap_or_default(),
    }
}

/// Splits `name|email|subject|message`.
fn parse_contact(rest: &str) -> ContactInput {
    let mut fields = rest.split('|').map(str::to_string);
    ContactInput {
        name: fields.next().unwrap_or_default(),
        email: fields.next().unwrap_or_default(),
        subject: fields.next().unwrap_or_default(),
        message: fields.next().unwrap_or_default(),
    }
}

fn render(plan: &RenderPlan) {
    if let Some(notice) = &plan.notice {
        println!("! {notice}");
    }

    if let Some(overlay) = &plan.overlay {
        println!("--- {} ---", overlay.title);
        println!("{}", overlay.body);
        if overlay.has_contact_form {
            println!("(submit with: message name|email|subject|message)");
        }
        println!("--- close with `close` ---");
    }

    if plan.empty_state {
        println!("No student records found.");
    } else {
        println!("#    id         name                 email                     contact     class");
        for row in &plan.rows {
            println!(
                "{:<4} {:<10} {:<20} {:<25} {:<11} {}",
                row.index, row.id, row.name, row.email, row.contact, row.class
            );
        }
        println!("{} record(s) shown", plan.shown);
        if let Some(max_height) = plan.scroll {
            println!("(scrolling enabled, max height {max_height}px)");
        }
    }

    match &plan.form {
        FormDirective::Keep => {}
        FormDirective::Reset => println!("(form cleared — submit label: {})", plan.submit_label),
        FormDirective::Fill(student) => {
            println!(
                "editing: {}|{}|{}|{}|{}|{} — submit label: {}",
                student.id,
                student.name,
                student.email,
                student.contact,
                student.class,
                student.address,
                plan.submit_label
            );
        }
    }

    if let Some(prompt) = plan.confirm {
        println!("{prompt} [y/N]");
    }
}

fn print_help() {
    println!("commands:");
    println!("  add id|name|email|contact|class|address   add or update a record");
    println!("  list                                      show all records");
    println!("  search <text>                             filter records");
    println!("  edit <index>                              load a record into the form");
    println!("  delete <index>                            delete after confirmation");
    println!("  privacy | terms | contact                 open an overlay");
    println!("  close                                     close the open overlay");
    println!("  message name|email|subject|message        send contact feedback");
    println!("  quit                                      exit");
}
