//! # projtree Solution Tree Printer
//!
//! File: cli/src/common/ui/tree_printer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders a project forest in the style of the `tree` command-line utility.
//! Used by `projtree tree` to show how projects are grouped and nested,
//! which the flat `list` output does not.
//!
//! ## Architecture
//!
//! - Recursive traversal in solution order (no sorting: the file's order is
//!   the order the IDE shows)
//! - Indentation and connector lines (├──, └──, │)
//! - Solution folders with a trailing `/`, in bold when `styled` is set
//!   (the caller passes whether stdout is a terminal)
//! - Optional project paths after each project name
//!
//! Example output:
//!
//! ```
//! Shop
//! ├── Solution Items/
//! ├── App (/repo/App/App.csproj)
//! │   └── Core (/repo/Core/Core.csproj)
//! └── src/
//!     └── Web (/repo/src/Web/Web.csproj)
//! ```
//!
use crate::core::error::Result;
use anyhow::{anyhow, Context};
use projtree_lib::ProjectNode;
use std::fmt::Write as FmtWrite;

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";
/// ANSI escape code to start bold text formatting (for solution folders).
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting.
const BOLD_END: &str = "\x1b[0m";

/// # Render Solution Tree (`render_solution_tree`)
///
/// ## Arguments
///
/// * `solution_name` - Name printed on the root line.
/// * `forest` - The solution's top-level entries.
/// * `show_paths` - Append each project's full path in parentheses.
/// * `styled` - Wrap the root line and folder names in bold ANSI escapes.
///
/// ## Returns
///
/// * `Result<String>` - The rendered tree, one line per node plus the root.
pub fn render_solution_tree(
    solution_name: &str,
    forest: &[ProjectNode],
    show_paths: bool,
    styled: bool,
) -> Result<String> {
    let mut output = String::new();
    writeln!(output, "{}", bold(solution_name, styled))
        .map_err(|e| anyhow!(e).context("Failed to write solution name"))?;

    let labels = Labels { show_paths, styled };
    walk_and_build_string(forest, &mut String::new(), labels, &mut output)
        .context("Failed while generating solution tree string")?;

    Ok(output)
}

#[derive(Clone, Copy)]
struct Labels {
    show_paths: bool,
    styled: bool,
}

/// Writes `nodes` at the current level, recursing into each node's children
/// with `current_prefix` extended by a pipe or spacer.
fn walk_and_build_string(
    nodes: &[ProjectNode],
    current_prefix: &mut String,
    labels: Labels,
    output: &mut dyn FmtWrite,
) -> Result<()> {
    let num_nodes = nodes.len();
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index == num_nodes - 1;

        write!(output, "{}", current_prefix)?;
        write!(output, "{}", if is_last { ELBOW } else { TEE })?;
        writeln!(output, "{}", node_label(node, labels))?;

        if !node.children.is_empty() {
            let prefix_component = if is_last { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk_and_build_string(&node.children, current_prefix, labels, output)?;
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        }
    }
    Ok(())
}

fn node_label(node: &ProjectNode, labels: Labels) -> String {
    if node.is_container() {
        bold(&format!("{}/", node.name), labels.styled)
    } else if labels.show_paths && !node.full_path.is_empty() {
        format!("{} ({})", node.name, node.full_path)
    } else {
        node.name.clone()
    }
}

fn bold(text: &str, styled: bool) -> String {
    if styled {
        format!("{}{}{}", BOLD_START, text, BOLD_END)
    } else {
        text.to_string()
    }
}
