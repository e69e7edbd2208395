//! Favorites commands.

use std::io::{self, Write};

use shopfront_core::ItemId;
use shopfront_storefront::FavoritesManager;
use tracing::warn;

use super::{CommandError, Context};
use crate::render;

/// `shop favorites show`
///
/// Titles come from the catalog when it is reachable; otherwise only ids are
/// listed.
pub async fn show(ctx: &Context) -> Result<(), CommandError> {
    let favorites = FavoritesManager::open(ctx.store());
    if let Some(message) = favorites.load_error() {
        warn!("{message}");
    }

    let catalog = if favorites.ids().is_empty() {
        None
    } else {
        match ctx.client()?.list_items().await {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, listing ids only");
                None
            }
        }
    };

    render::favorites(
        &mut io::stdout().lock(),
        favorites.ids(),
        catalog.as_deref().map(Vec::as_slice).unwrap_or_default(),
    )?;
    Ok(())
}

/// `shop favorites toggle <ID>`
pub fn toggle(ctx: &Context, id: ItemId) -> Result<(), CommandError> {
    let mut favorites = FavoritesManager::open(ctx.store());
    let toggled = favorites.toggle(id)?;

    let verb = if toggled.is_favorite { "Added" } else { "Removed" };
    writeln!(
        io::stdout().lock(),
        "{verb} item {id} {} favorites ({} total).",
        if toggled.is_favorite { "to" } else { "from" },
        toggled.favorites.len()
    )?;
    Ok(())
}
