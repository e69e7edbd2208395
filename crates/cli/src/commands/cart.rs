//! Cart commands.

use std::io::{self, Write};

use shopfront_core::{ItemId, Quantity};
use shopfront_storefront::CartManager;
use shopfront_storefront::persistence::FileStore;
use tracing::warn;

use super::item::load_detail;
use super::{CommandError, Context};
use crate::render;

fn open_cart(ctx: &Context) -> CartManager<FileStore> {
    let cart = CartManager::open(ctx.store());
    if let Some(message) = cart.load_error() {
        warn!("{message}");
    }
    cart
}

/// `shop cart show`
pub fn show(ctx: &Context) -> Result<(), CommandError> {
    let cart = open_cart(ctx);
    render::cart(&mut io::stdout().lock(), &cart.snapshot())?;
    Ok(())
}

/// `shop cart add <ID>`
pub async fn add(
    ctx: &Context,
    id: ItemId,
    quantity: u32,
    color: Option<&str>,
) -> Result<(), CommandError> {
    let mut out = io::stdout().lock();
    let mut detail = load_detail(ctx, id, &mut out).await?;
    detail.set_quantity(Quantity::new(quantity)?);
    detail.select_color(color)?;

    let mut cart = open_cart(ctx);
    let snapshot = detail.add_to_cart(&mut cart)?;
    writeln!(out, "Added to cart.\n")?;
    render::cart(&mut out, &snapshot)?;
    Ok(())
}

/// `shop cart set-quantity <ID> <N>`
pub fn set_quantity(ctx: &Context, id: ItemId, quantity: u32) -> Result<(), CommandError> {
    let mut cart = open_cart(ctx);
    let snapshot = cart.change_quantity(id, Quantity::new(quantity)?)?;
    render::cart(&mut io::stdout().lock(), &snapshot)?;
    Ok(())
}

/// `shop cart remove <ID>`
pub fn remove(ctx: &Context, id: ItemId) -> Result<(), CommandError> {
    let mut cart = open_cart(ctx);
    let snapshot = cart.remove(id)?;
    render::cart(&mut io::stdout().lock(), &snapshot)?;
    Ok(())
}

/// `shop cart clear`
pub fn clear(ctx: &Context) -> Result<(), CommandError> {
    let mut cart = open_cart(ctx);
    let snapshot = cart.clear()?;
    render::cart(&mut io::stdout().lock(), &snapshot)?;
    Ok(())
}
