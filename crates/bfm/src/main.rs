//! BFM CLI - interactive batch file manager shell
//!
//! Binary name: `bfm`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io;

use bfm::{commands, translations};
use bfm_core::Dispatcher;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // The registry is built entirely before any input is read; after this
    // point it is read-only.
    let registry = match commands::build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    };
    let dispatcher = Dispatcher::new(registry);

    greetings();

    let Some(language) = select_language() else {
        return; // input ended before a language was chosen
    };

    match translations::translated_string(&language, "langChosen") {
        Ok(text) => println!("{text}"),
        Err(err) => println!("{err}"),
    }

    print_usage();
    run_shell(&dispatcher).await;
}

fn greetings() {
    println!("Welcome to the BFM batch file manager!");
    println!("This is a simple program that allows you to copy files in bulk with ease.");
    println!("--------------------");
    println!("¡Bienvenido al gestor de archivos por lotes BFM!");
    println!("Este es un programa simple que te permite copiar archivos en masa con facilidad.");
    println!("--------------------");
    println!("Please type the language you want to use (en/es):");
    println!("Por favor, escribe el idioma que quieres usar (en/es):");
}

/// Read lines until the user picks a supported language.
///
/// Returns `None` on end of input or a read failure.
fn select_language() -> Option<String> {
    let mut line = String::new();
    loop {
        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {
                let language = line.trim().to_ascii_lowercase();
                if language == "en" || language == "es" {
                    return Some(language);
                }
                println!("Please type a valid language (en/es):");
                println!("Por favor, escribe un idioma válido (en/es):");
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read language selection");
                return None;
            }
        }
    }
}

fn print_usage() {
    println!("Enter a command and its arguments if necessary. To get a list of all commands use the command help.");
    println!("If you want detailed information about a single command you can do as follows:");
    println!("help -command copyAll");
    println!("If you'd like to exit the program, just type exit");
}

/// One command per line until `exit` or end of input. Errors are printed
/// and the loop keeps accepting the next line; nothing here is fatal.
async fn run_shell(dispatcher: &Dispatcher) {
    let mut line = String::new();
    loop {
        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // end of input ends the shell like `exit` does
            Ok(_) => {
                let input = line.trim_end_matches(['\n', '\r']);
                if input == "exit" {
                    break;
                }
                if let Err(err) = dispatcher.execute(input).await {
                    println!("[Error]: {err}");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read command line");
                break;
            }
        }
    }
}
