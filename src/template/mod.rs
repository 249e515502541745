//! Token substitution for action templates.
//!
//! Rendering is pure and total: recognized `${...}` tokens are replaced
//! from the purchase context, unrecognized tokens pass through verbatim,
//! and rendering never fails.

use crate::core::Requester;

/// Values substituted into an action template for one purchase.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub requester: &'a Requester,
    pub item_name: &'a str,
}

/// Replace every recognized token in `template` with its context value.
///
/// Fallbacks: `${user}` renders as the empty string when the requester has
/// no linked account, `${group}` as `"Unregistered"` when they have no
/// group. `${lifeMax}` and `${manaMax}` are populated from the current
/// life/mana values. World coordinates use Rust's locale-independent float
/// formatting.
pub fn render(template: &str, ctx: &TemplateContext<'_>) -> String {
    let r = ctx.requester;
    template
        .replace("${player}", &r.display_name)
        .replace("${user}", r.account_name.as_deref().unwrap_or(""))
        .replace("${group}", r.group.as_deref().unwrap_or("Unregistered"))
        .replace("${item}", ctx.item_name)
        .replace("${x}", &r.tile_x.to_string())
        .replace("${y}", &r.tile_y.to_string())
        .replace("${wx}", &r.world_x.to_string())
        .replace("${wy}", &r.world_y.to_string())
        .replace("${lifeMax}", &r.life.to_string())
        .replace("${manaMax}", &r.mana.to_string())
        .replace("${life}", &r.life.to_string())
        .replace("${mana}", &r.mana.to_string())
}
