mod cli;

use std::{io, process};

use clap::Parser;
use cli::{Cli, Command};
use shunt::{
    runtime::eval_tree,
    syntax::{build_tree, to_postfix, tokenize},
    PResult,
};

fn run(command: &Command, src: &str) -> PResult<()> {
    let postfix = to_postfix(tokenize(src))?;

    match command {
        Command::Postfix { .. } => println!("{postfix}"),
        Command::Tree { .. } => print!("{}", build_tree(postfix)?.outline()),
        Command::Eval { postfix: show, .. } => {
            if *show {
                println!("{postfix}");
            }
            let tree = build_tree(postfix)?;
            println!("{}", eval_tree(&tree)?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let inputs: Vec<String> = match cli.command.expr() {
        Some(expr) => vec![expr.to_string()],
        None => match io::read_to_string(io::stdin()) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(why) => {
                eprintln!("error: failed to read stdin: {why}");
                process::exit(1);
            }
        },
    };

    let mut failed = false;
    for input in inputs {
        // The tokenizer keeps whitespace, so strip it before handing over.
        let src: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if src.is_empty() {
            continue;
        }

        log::info!("evaluating `{src}`");
        if let Err(why) = run(&cli.command, &src) {
            eprintln!("error: {why}");
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}
