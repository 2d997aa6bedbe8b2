use anyhow::{bail, Result};

use xanadu::domain::value_objects::DistinguishedName;
use xanadu::presentation::factory;

use super::CommandContext;

pub fn cmd_browse(ctx: &CommandContext, root: Option<DistinguishedName>) -> Result<()> {
    if !ctx.ui.interactive() {
        bail!(
            "'xanadu browse' needs an interactive terminal. Try: `xanadu tree` or `xanadu show <identifier>`"
        );
    }

    let browser = factory::create_browser(&ctx.config, root);
    let mut menu = factory::create_list_menu(&ctx.config, ctx.ui.color, ctx.ui.unicode);

    let outcome = browser.browse(&mut menu);
    super::print_outcome(&outcome, &ctx.ui);
    Ok(())
}
