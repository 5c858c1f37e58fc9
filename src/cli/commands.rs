//! Subcommand dispatch and handlers

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{format as format_outline, parse, EditResult, NodeId, Outline};
use crate::infrastructure::{FileStore, OutlineStore};

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Fmt { file, in_place }) => _fmt(file, *in_place),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Indent {
            file,
            line,
            in_place,
        }) => _structural(file, *line, *in_place, |o, id| o.indent(id)),
        Some(Commands::Outdent {
            file,
            line,
            in_place,
        }) => _structural(file, *line, *in_place, |o, id| o.outdent(id)),
        Some(Commands::Delete {
            file,
            line,
            in_place,
        }) => _structural(file, *line, *in_place, |o, id| o.delete(id)),
        Some(Commands::Move {
            file,
            line,
            under,
            before,
            after,
            in_place,
        }) => _move(file, *line, *under, *before, *after, *in_place),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "treeline", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn _fmt(file: &Path, in_place: bool) -> Result<()> {
    let outline = read_outline(file)?;
    debug!("parsed {} nodes", outline.len());
    emit(file, &outline, in_place)
}

#[instrument]
fn _tree(file: &Path) -> Result<()> {
    let outline = read_outline(file)?;
    for id in outline.children(outline.root()) {
        println!("{}", subtree(&outline, id));
    }
    Ok(())
}

#[instrument(skip(apply))]
fn _structural(
    file: &Path,
    line: usize,
    in_place: bool,
    apply: impl FnOnce(&Outline, NodeId) -> EditResult<Outline>,
) -> Result<()> {
    let outline = read_outline(file)?;
    let id = node_at_line(&outline, line)?;
    let next = apply(&outline, id)?;
    emit(file, &next, in_place)
}

#[instrument]
fn _move(
    file: &Path,
    line: usize,
    under: Option<usize>,
    before: Option<usize>,
    after: Option<usize>,
    in_place: bool,
) -> Result<()> {
    let outline = read_outline(file)?;
    let id = node_at_line(&outline, line)?;

    let next = if let Some(dest) = under {
        outline.move_node(id, node_at_line(&outline, dest)?, None)?
    } else if let Some(dest) = before {
        outline.move_before(id, node_at_line(&outline, dest)?)?
    } else if let Some(dest) = after {
        outline.move_after(id, node_at_line(&outline, dest)?)?
    } else {
        return Err(anyhow!("specify one of --under, --before, --after"));
    };
    emit(file, &next, in_place)
}

fn _config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| anyhow!("no config directory"))?;
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("create {}", dir.display()))?;
            }
            fs::write(&path, Settings::template())
                .with_context(|| format!("write {}", path.display()))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => println!("{}", path.display()),
                None => output::warning("no config directory available"),
            }
            Ok(())
        }
    }
}

fn read_outline(file: &Path) -> Result<Outline> {
    let content =
        fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    Ok(parse(&content))
}

/// Resolve a 1-based display-order line to a node id.
fn node_at_line(outline: &Outline, line: usize) -> Result<NodeId> {
    let index = line
        .checked_sub(1)
        .ok_or_else(|| anyhow!("line numbers start at 1"))?;
    outline
        .flattened()
        .get(index)
        .copied()
        .ok_or_else(|| anyhow!("no node at line {line}"))
}

fn emit(file: &Path, outline: &Outline, in_place: bool) -> Result<()> {
    if in_place {
        FileStore::new(file)
            .save(outline)
            .with_context(|| format!("cannot write {}", file.display()))?;
        output::success(&format!("updated {}", file.display()));
    } else {
        print!("{}", format_outline(outline));
    }
    Ok(())
}

fn subtree(outline: &Outline, id: NodeId) -> termtree::Tree<String> {
    let label = outline.text(id).unwrap_or_default().to_string();
    let leaves: Vec<_> = outline
        .children(id)
        .into_iter()
        .map(|child| subtree(outline, child))
        .collect();
    termtree::Tree::new(label).with_leaves(leaves)
}
