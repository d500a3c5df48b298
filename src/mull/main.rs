use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use mull::api::{CmdMessage, CmdResult, ConfigAction, MessageLevel, MullApi, MullPaths};
use mull::config::GithubConfig;
use mull::error::{MullError, Result};
use mull::mirror::FileMirror;
use mull::model::{DiaryEntry, ReflectionAnswer};
use mull::questions::Question;
use mull::remote::github::GithubClient;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MullApi<GithubClient, FileMirror>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Question { id }) => handle_question(&mut ctx, id),
        Some(Commands::Reflect { question_id, text }) => {
            handle_reflect(&mut ctx, question_id, text)
        }
        Some(Commands::Answers { question_id }) => handle_answers(&mut ctx, question_id),
        Some(Commands::Diary { date }) => handle_diary(&mut ctx, date),
        Some(Commands::Write { text, date }) => handle_write(&mut ctx, text, date),
        Some(Commands::Sync) => handle_sync(&mut ctx),
        Some(Commands::Export { out }) => handle_export(&mut ctx, out),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::ShareLink { link }) => handle_share_link(&ctx, link),
        Some(Commands::Check) => handle_check(&ctx),
        None => handle_question(&mut ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mull=debug" } else { "mull=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    // MULL_DATA_DIR overrides the platform data dir, mainly for tests.
    let data_dir = match std::env::var_os("MULL_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "mull", "mull")
            .ok_or_else(|| MullError::Config("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = GithubConfig::load(&data_dir).unwrap_or_default();
    let remote = GithubClient::new(config)?;
    let mirror = FileMirror::new(data_dir.clone());
    let paths = MullPaths { data_dir };
    let api = MullApi::new(remote, mirror, paths);

    Ok(AppContext { api })
}

fn parse_date(input: Option<String>, fallback: NaiveDate) -> Result<NaiveDate> {
    match input {
        None => Ok(fallback),
        Some(s) => s
            .parse()
            .map_err(|_| MullError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", s))),
    }
}

fn handle_question(ctx: &mut AppContext, id: Option<u32>) -> Result<()> {
    ctx.api.hydrate();
    let result = ctx.api.show_question(id)?;
    if let Some(q) = &result.question {
        print_question(q);
    }
    print_answers(&result.answers);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reflect(ctx: &mut AppContext, question_id: u32, text: String) -> Result<()> {
    ctx.api.hydrate();
    let today = ctx.api.session().current_date;
    let result = ctx.api.save_reflection(question_id, today, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_answers(ctx: &mut AppContext, question_id: u32) -> Result<()> {
    ctx.api.hydrate();
    let result = ctx.api.past_answers(question_id)?;
    if let Some(q) = &result.question {
        print_question(q);
    }
    print_answers(&result.answers);
    print_messages(&result.messages);
    Ok(())
}

fn handle_diary(ctx: &mut AppContext, date: Option<String>) -> Result<()> {
    ctx.api.hydrate();
    let date = parse_date(date, ctx.api.session().current_date)?;
    let result = ctx.api.view_diary(date)?;
    print_diary(date, &result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_write(ctx: &mut AppContext, text: String, date: Option<String>) -> Result<()> {
    ctx.api.hydrate();
    let date = parse_date(date, ctx.api.session().current_date)?;
    let result = ctx.api.write_diary(date, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sync(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sync_now()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, out: Option<PathBuf>) -> Result<()> {
    ctx.api.hydrate();
    let out_dir = out.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export(&out_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_only = match (&key, &value) {
        (Some(k), None) => Some(k.clone()),
        _ => None,
    };
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match show_only.as_deref() {
            Some("repo") => println!("repo   = {}", config.repo),
            Some("token") => println!("token  = {}", mask_token(&config.token)),
            Some("branch") => println!("branch = {}", config.branch),
            _ => {
                println!("repo   = {}", config.repo);
                println!("token  = {}", mask_token(&config.token));
                println!("branch = {}", config.branch);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_share_link(ctx: &AppContext, link: Option<String>) -> Result<()> {
    let result = match link {
        Some(link) => ctx.api.apply_share_link(&link)?,
        None => ctx.api.generate_share_link()?,
    };
    if let Some(fragment) = &result.share_link {
        println!("{}", fragment);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.test_connection()?;
    print_messages(&result.messages);
    Ok(())
}

// Byte slicing would panic on multibyte tokens, so count chars.
fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count == 0 {
        "(not set)".to_string()
    } else if count <= 4 {
        "****".to_string()
    } else {
        let tail: String = token.chars().skip(count - 4).collect();
        format!("****{}", tail)
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_question(question: &Question) {
    println!("{}", question.category.dimmed());
    println!("{} {}", format!("[{}]", question.id).yellow(), question.text.bold());
}

fn print_answers(answers: &[ReflectionAnswer]) {
    if answers.is_empty() {
        return;
    }
    println!();
    println!("{}", "Past answers:".dimmed());
    for answer in answers {
        println!("  {}  {}", answer.date.to_string().yellow(), answer.text);
    }
}

fn print_diary(date: NaiveDate, result: &CmdResult) {
    println!("{}", date.to_string().bold());
    match &result.entry {
        Some(DiaryEntry { text, .. }) => println!("{}", text),
        None => println!("{}", "No entry for this day.".dimmed()),
    }

    if !result.past_entries.is_empty() {
        println!();
        println!("{}", "On this day:".dimmed());
        for entry in &result.past_entries {
            println!("  {}  {}", entry.date.to_string().yellow(), entry.text);
        }
    }
}
