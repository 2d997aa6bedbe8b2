use anyhow::{bail, Context, Result};

use xanadu::domain::ports::Directory;
use xanadu::presentation::factory;
use xanadu::ui::views;

use super::CommandContext;

pub fn cmd_show(ctx: &CommandContext, identifier: &str) -> Result<()> {
    let directory = factory::create_directory(&ctx.config);
    let record = match directory.fetch_record(identifier) {
        Ok(record) => record,
        Err(err) if err.is_not_found() => bail!("Utilisateur introuvable : {}", identifier),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("reading directory export {}", directory.path().display())
            })
        }
    };

    print!(
        "{}",
        views::record::render_record(&record, ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
