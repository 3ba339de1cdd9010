//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `load_layout` - Shared utility to resolve the statement layout
//! - `cmd_header` - Show the detected header row
//! - `cmd_layout` - Show the layout in effect

use std::path::Path;

use anyhow::{Context, Result};
use sift_core::{header::locate_header, sheet::read_path, LayoutSource, StatementLayout};

use super::truncate;

/// Resolve the layout from --layout, the data dir override, or built-in defaults
pub fn load_layout(layout_path: Option<&Path>) -> Result<(StatementLayout, LayoutSource)> {
    if let Some(path) = layout_path {
        if !path.exists() {
            anyhow::bail!("Layout file not found: {}", path.display());
        }
    }
    StatementLayout::load(layout_path).context("Failed to load statement layout")
}

pub fn cmd_header(file: &Path, layout_path: Option<&Path>) -> Result<()> {
    let (layout, _) = load_layout(layout_path)?;

    let table = read_path(file)
        .with_context(|| format!("Failed to read statement: {}", file.display()))?;
    let idx = locate_header(&table, &layout.header)?;

    println!("🔎 Header row: {} (zero-based)", idx);
    println!("   ─────────────────────────────");
    for (col, cell) in table.row(idx).unwrap_or(&[]).iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        println!("   {:>3} │ {}", col, truncate(&cell.to_string(), 40));
    }

    Ok(())
}

pub fn cmd_layout(layout_path: Option<&Path>) -> Result<()> {
    let (layout, source) = load_layout(layout_path)?;

    println!("📐 Statement layout ({})", source);
    println!();
    print!("{}", layout.to_toml()?);

    if source == LayoutSource::Embedded {
        if let Some(path) = sift_core::layout::default_layout_path() {
            println!();
            println!("💡 Tip: Copy this to {} to customize", path.display());
        }
    }

    Ok(())
}
