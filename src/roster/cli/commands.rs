use super::prompt::confirm;
use super::render::{print_messages, render_student_details, render_student_table};
use super::setup::{draft_from_args, edits_from_args, Cli, Commands, SearchBy, DATA_DIR_ENV};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdMessage, ConfigAction, RosterApi, RosterPaths};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::logging::{init_logging, Verbosity};
use roster::model::{AgeRange, StudentDraft, StudentEdits};
use roster::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RosterApi<FsBackend>,
    age_range: AgeRange,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    // `config` must still run when config.json is malformed, so it can fix it.
    let lenient_config = matches!(cli.command, Some(Commands::Config { .. }));
    let mut ctx = init_context(&cli, lenient_config)?;

    match cli.command {
        None | Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Add {
            roll_number,
            name,
            age,
            class_name,
            section,
            address,
            yes,
        }) => {
            let draft = draft_from_args(roll_number, name, age, class_name, section, address);
            handle_add(&mut ctx, draft, yes)
        }
        Some(Commands::Search { query, by }) => handle_search(&mut ctx, &query, by),
        Some(Commands::View { roll_numbers }) => handle_view(&mut ctx, &roll_numbers),
        Some(Commands::Edit {
            roll_number,
            name,
            age,
            class_name,
            section,
            address,
            yes,
        }) => {
            let edits = edits_from_args(name, age, class_name, section, address);
            handle_edit(&mut ctx, &roll_number, edits, yes)
        }
        Some(Commands::Delete { roll_numbers, yes }) => {
            handle_delete(&mut ctx, &roll_numbers, yes)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RosterError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn init_context(cli: &Cli, lenient_config: bool) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = match RosterConfig::load(&data_dir) {
        Ok(config) => config,
        Err(RosterError::Config(e)) if lenient_config => {
            debug!(error = %e, "malformed config, using defaults");
            RosterConfig::default()
        }
        Err(e) => return Err(e),
    };
    let data_file = data_dir.join(&config.data_file);
    debug!(data_file = %data_file.display(), "using data file");

    let backend = FsBackend::new(data_file.clone());
    let api = RosterApi::new(backend, RosterPaths::new(data_dir, data_file));

    Ok(AppContext {
        api,
        age_range: config.age_range(),
    })
}

/// Read the backing file. A corrupt file is reported and the command carries
/// on with an empty roster.
fn load_store(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.load() {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) if e.is_recoverable_load() => {
            print_messages(&[CmdMessage::warning(format!(
                "{} (starting with an empty roster)",
                e
            ))]);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// True when the age is fine or the user accepted it anyway.
fn confirm_age(ctx: &AppContext, age: i32, yes: bool) -> Result<bool> {
    if yes || ctx.age_range.contains(age) {
        return Ok(true);
    }
    confirm(&format!(
        "Age {} seems unusual (expected {}-{}). Continue anyway?",
        age, ctx.age_range.min, ctx.age_range.max
    ))
}

fn cancelled() -> Result<()> {
    print_messages(&[CmdMessage::info("Operation cancelled.")]);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    load_store(ctx)?;
    let result = ctx.api.list_students()?;
    print!("{}", render_student_table(&result.listed_students));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: StudentDraft, yes: bool) -> Result<()> {
    load_store(ctx)?;

    let age = draft.clone().into_record()?.age;
    if !confirm_age(ctx, age, yes)? {
        return cancelled();
    }

    let result = ctx.api.add_student(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str, by: SearchBy) -> Result<()> {
    load_store(ctx)?;
    let result = ctx.api.search_students(by.into(), query)?;
    if !result.listed_students.is_empty() {
        print!("{}", render_student_table(&result.listed_students));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, roll_numbers: &[String]) -> Result<()> {
    load_store(ctx)?;
    let result = ctx.api.view_students(roll_numbers)?;
    print!("{}", render_student_details(&result.listed_students));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    roll_number: &str,
    edits: StudentEdits,
    yes: bool,
) -> Result<()> {
    load_store(ctx)?;

    if edits.is_empty() {
        // Still fail loudly on an unknown roll number.
        ctx.api.view_students(&[roll_number])?;
        print_messages(&[CmdMessage::info(
            "Nothing to change. Pass --name, --age, --class, --section or --address.",
        )]);
        return Ok(());
    }

    let patch = ctx.api.prepare_update(roll_number, edits)?;
    if !confirm_age(ctx, patch.age, yes)? {
        return cancelled();
    }

    let result = ctx.api.update_student(roll_number, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, roll_numbers: &[String], yes: bool) -> Result<()> {
    load_store(ctx)?;

    let targets = ctx.api.view_students(roll_numbers)?.listed_students;
    if !yes {
        println!("This will permanently remove:");
        print!("{}", render_student_table(&targets));
        if !confirm("Delete these students?")? {
            return cancelled();
        }
    }

    let result = ctx.api.delete_students(roll_numbers)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_paths()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}
