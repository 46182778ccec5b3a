use clap::Parser;
use colored::*;
use pats::api::{CmdMessage, MessageLevel};
use pats::error::Result;
use pats::init::{initialize, PatsContext};
use std::io::IsTerminal;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut ctx = initialize(cli.custom_path.as_deref())?;

    match cli.command {
        Some(Commands::Save {
            name,
            flags,
            pattern,
            engine,
        }) => handle_save(&mut ctx, &name, &flags, &pattern, engine).map(|_| 0),
        Some(Commands::List) => handle_list(&ctx).map(|_| 0),
        Some(Commands::Dump { name, target }) => handle_dump(&ctx, &name, target).map(|_| 0),
        Some(Commands::Init) => handle_init(&ctx).map(|_| 0),
        None => match cli.name {
            Some(name) => handle_run(&ctx, &name, cli.target),
            None => handle_list(&ctx).map(|_| 0),
        },
    }
}

fn handle_save(
    ctx: &mut PatsContext,
    name: &str,
    flags: &str,
    pattern: &str,
    engine: Option<String>,
) -> Result<()> {
    let result = ctx.api.save_pattern(name, flags, pattern, engine)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &PatsContext) -> Result<()> {
    let result = ctx.api.list_patterns()?;
    for name in &result.listed_names {
        println!("{}", name);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_dump(ctx: &PatsContext, name: &str, target: Option<String>) -> Result<()> {
    let target = target.unwrap_or_else(|| ".".to_string());
    let invocation = ctx
        .api
        .build_invocation(name, &target, stdin_is_pipe())?;
    println!("{}", invocation.command_line());
    Ok(())
}

/// Run the named pattern and pass the engine's exit code through, so the
/// wrapper composes in shell scripts exactly like the engine itself.
fn handle_run(ctx: &PatsContext, name: &str, target: Option<String>) -> Result<i32> {
    let target = target.unwrap_or_else(|| ".".to_string());
    let invocation = ctx
        .api
        .build_invocation(name, &target, stdin_is_pipe())?;
    let status = invocation.execute()?;
    Ok(status.code().unwrap_or(1))
}

fn handle_init(ctx: &PatsContext) -> Result<()> {
    let result = ctx.api.init_store()?;
    print_messages(&result.messages);
    Ok(())
}

fn stdin_is_pipe() -> bool {
    !std::io::stdin().is_terminal()
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
