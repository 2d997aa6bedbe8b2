use anyhow::{Context, Result};

use xanadu::domain::services::walk_tree;
use xanadu::domain::value_objects::DistinguishedName;
use xanadu::presentation::factory;
use xanadu::ui::views;

use super::CommandContext;

pub fn cmd_tree(
    ctx: &CommandContext,
    root: Option<DistinguishedName>,
    depth: Option<usize>,
) -> Result<()> {
    let root = root.unwrap_or_else(|| ctx.config.directory.root.clone());
    let source = factory::create_directory(&ctx.config);
    // One read of the export for the whole walk.
    let directory = source
        .load()
        .with_context(|| format!("reading directory export {}", source.path().display()))?;

    let lines = walk_tree(&directory, &root, depth);
    print!(
        "{}",
        views::tree::render_tree(&lines, ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
