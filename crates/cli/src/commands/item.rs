//! Item detail command.

use std::io::{self, Write};

use shopfront_core::ItemId;
use shopfront_storefront::views::ProductDetail;
use shopfront_storefront::{CartManager, FavoritesManager};

use super::{CommandError, Context};
use crate::render;

/// Load the detail view for `id`, rendering the error inline on failure.
pub(super) async fn load_detail(
    ctx: &Context,
    id: ItemId,
    out: &mut impl Write,
) -> Result<ProductDetail, CommandError> {
    let client = ctx.client()?;
    let mut detail = ProductDetail::new(id);
    detail.load(&client).await;

    if let Some(message) = detail.error() {
        writeln!(out, "{message}")?;
        return Err(CommandError::Fetch(message.to_string()));
    }
    Ok(detail)
}

/// `shop item <ID>`
pub async fn show(ctx: &Context, id: ItemId) -> Result<(), CommandError> {
    let mut out = io::stdout().lock();
    let detail = load_detail(ctx, id, &mut out).await?;

    let store = ctx.store();
    let favorites = FavoritesManager::open(&store);
    let cart = CartManager::open(&store);

    if let Some(item) = detail.item() {
        render::item_detail(&mut out, item, favorites.contains(id), cart.contains(id))?;
    }
    Ok(())
}
