// Rust guideline compliant 2026-10-12

//! Implementation of the `majani categories` command.

use super::CommandContext;
use majani_core::Category;

/// Prints every category tag with its label. Needs no catalog.
pub fn execute(ctx: &CommandContext<'_>) {
    println!("{}", ctx.formatter.format_categories(&Category::ALL));
}
