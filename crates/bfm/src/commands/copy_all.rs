//! Copy all files from one folder to another
//!
//! The copy itself runs as one blocking task per file; the handler collects
//! the per-file results after all tasks finish and reports one aggregated
//! error if any copy failed.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use futures::future::{join_all, BoxFuture};

use bfm_core::{ArgSpec, CommandSpec, Registry, ResolvedArgs};

use super::argument_value;

/// Command name as typed by the user.
pub const NAME: &str = "copyAll";

/// Build the `copyAll` command spec.
pub fn spec() -> bfm_core::Result<CommandSpec> {
    CommandSpec::builder(NAME, "Copy all files from one folder to another", handle)
        .with_argument(
            ArgSpec::new(
                "source",
                "Path of the directory where files will be copied from",
            )
            .with_alias("s")
            .with_alias("src")
            .required(),
        )
        .with_argument(
            ArgSpec::new(
                "destination",
                "Path of the directory where files will be copied to",
            )
            .with_alias("d")
            .with_alias("dst")
            .required(),
        )
        .with_help_text(
            "copyAll copies all the files in the source folder to the destination folder.\n\
             Subdirectories are skipped, not recursed into. You will be asked to confirm\n\
             before anything is copied, and again before any existing destination file\n\
             is overwritten.",
        )
        .build()
}

fn handle<'a>(registry: &'a Registry, args: ResolvedArgs) -> BoxFuture<'a, Result<()>> {
    Box::pin(run(registry, args))
}

async fn run(registry: &Registry, args: ResolvedArgs) -> Result<()> {
    let spec = registry
        .find(NAME)
        .context("copyAll is not registered")?;
    let source = PathBuf::from(argument_value(spec, &args, "source")?);
    let destination = PathBuf::from(argument_value(spec, &args, "destination")?);

    let files = list_regular_files(&source)?;
    if files.is_empty() {
        bail!("there are no files to copy in '{}'", source.display());
    }

    if !confirm(&format!(
        "Copy {} file(s) from '{}' to '{}'? [y/N] ",
        files.len(),
        source.display(),
        destination.display()
    ))? {
        bail!("copy cancelled");
    }

    let conflicts = existing_conflicts(&files, &destination);
    if !conflicts.is_empty() {
        println!(
            "The following file(s) already exist in '{}':",
            destination.display()
        );
        for name in &conflicts {
            println!("  {name}");
        }
        if !confirm(&format!("Overwrite {} file(s)? [y/N] ", conflicts.len()))? {
            bail!("copy cancelled: destination files left untouched");
        }
    }

    fs::create_dir_all(&destination).with_context(|| {
        format!(
            "could not create destination directory '{}'",
            destination.display()
        )
    })?;

    let total = files.len();
    let failures: Vec<String> = copy_files(files, &destination)
        .await
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(name) => {
                println!("Copied {name}");
                None
            }
            Err(message) => Some(message),
        })
        .collect();

    if !failures.is_empty() {
        bail!(
            "failed to copy {} of {} file(s): {}",
            failures.len(),
            total,
            failures.join("; ")
        );
    }

    tracing::debug!(files = total, "copyAll finished");
    println!(
        "Copied {} file(s) from '{}' to '{}'",
        total,
        source.display(),
        destination.display()
    );
    Ok(())
}

/// Non-directory entries of `dir`, sorted by name for stable output.
fn list_regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("could not read source directory '{}'", dir.display()))?
        .map(|entry| -> Result<Option<PathBuf>> {
            let entry = entry?;
            let file_type = entry.file_type()?;
            Ok((!file_type.is_dir()).then(|| entry.path()))
        })
        .filter_map(Result::transpose)
        .collect::<Result<_>>()?;

    files.sort();
    Ok(files)
}

/// Names of the files that already exist in the destination directory.
fn existing_conflicts(files: &[PathBuf], destination: &Path) -> Vec<String> {
    files
        .iter()
        .map(|path| file_name_of(path))
        .filter(|name| destination.join(name).exists())
        .collect()
}

/// One blocking copy task per file; results collected after all finish.
async fn copy_files(files: Vec<PathBuf>, destination: &Path) -> Vec<Result<String, String>> {
    let tasks = files.into_iter().map(|path| {
        let target = destination.join(file_name_of(&path));
        tokio::task::spawn_blocking(move || copy_one(&path, &target))
    });

    join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap_or_else(|err| Err(format!("copy task failed: {err}"))))
        .collect()
}

fn copy_one(path: &Path, target: &Path) -> Result<String, String> {
    let name = file_name_of(path);
    fs::copy(path, target)
        .map(|_| name.clone())
        .map_err(|err| format!("{name}: {err}"))
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Ask the user a `[y/N]` question on stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read confirmation")?;
    let answer = input.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
