//! Plain-text rendering of views.

use std::io::{self, Write};

use shopfront_core::catalog::Facets;
use shopfront_core::{Item, ItemId, format_amount};
use shopfront_storefront::CartSnapshot;
use shopfront_storefront::views::CatalogPage;

pub fn catalog_page(out: &mut impl Write, page: &CatalogPage) -> io::Result<()> {
    if page.is_empty() {
        return writeln!(out, "No products found.");
    }

    for card in &page.cards {
        let item = &card.item;
        let mut flags = String::new();
        if card.is_favorite {
            flags.push_str(" [favorite]");
        }
        if card.in_cart {
            flags.push_str(" [in cart]");
        }
        writeln!(
            out,
            "{:>4}  {:<28} {:>10}  {:.1}*  {} / {} / {}{flags}",
            item.id,
            item.title,
            format_amount(item.price),
            item.rating,
            item.color,
            item.category,
            item.collection,
        )?;
    }

    let pages: Vec<String> = page
        .pagination
        .page_numbers()
        .map(|n| {
            if n == page.pagination.current_page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();
    writeln!(
        out,
        "\n{} matching, page {} of {}: {}",
        page.matching,
        page.pagination.current_page,
        page.pagination.total_pages,
        pages.join(" ")
    )
}

pub fn facets(out: &mut impl Write, facets: &Facets) -> io::Result<()> {
    writeln!(out, "Colors:      {}", facets.colors.join(", "))?;
    writeln!(out, "Categories:  {}", facets.categories.join(", "))?;
    writeln!(out, "Collections: {}", facets.collections.join(", "))?;
    if let Some(max_price) = facets.max_price {
        writeln!(out, "Max price:   {}", format_amount(max_price))?;
    }
    Ok(())
}

pub fn item_detail(
    out: &mut impl Write,
    item: &Item,
    is_favorite: bool,
    in_cart: bool,
) -> io::Result<()> {
    writeln!(out, "{} (#{})", item.title, item.id)?;
    writeln!(out, "Price:      {}", format_amount(item.price))?;
    writeln!(out, "Rating:     {:.1}", item.rating)?;
    writeln!(out, "Category:   {}", item.category)?;
    writeln!(out, "Collection: {}", item.collection)?;
    writeln!(out, "Color:      {}", item.color)?;
    writeln!(out, "Swatches:   {}", item.swatches().join(", "))?;
    writeln!(out, "Image:      {}", item.image_url)?;
    if !item.description.is_empty() {
        writeln!(out, "\n{}", item.description)?;
    }
    if is_favorite {
        writeln!(out, "\nIn your favorites.")?;
    }
    if in_cart {
        writeln!(out, "In your cart.")?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, snapshot: &CartSnapshot) -> io::Result<()> {
    if snapshot.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }

    for line in &snapshot.lines {
        let color = line.color.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:>4}  {:<28} {:>10} x {:<3} {:>10}  {color}",
            line.id,
            line.title,
            format_amount(line.price),
            line.quantity,
            format_amount(line.subtotal()),
        )?;
    }
    writeln!(
        out,
        "\nItems: {}  Total: {}",
        snapshot.item_count,
        format_amount(snapshot.total)
    )
}

/// Favorites with titles resolved from `catalog` where available.
pub fn favorites(out: &mut impl Write, ids: &[ItemId], catalog: &[Item]) -> io::Result<()> {
    if ids.is_empty() {
        return writeln!(out, "You liked none.");
    }

    for id in ids {
        match catalog.iter().find(|item| item.id == *id) {
            Some(item) => writeln!(
                out,
                "{:>4}  {:<28} {:>10}",
                item.id,
                item.title,
                format_amount(item.price)
            )?,
            None => writeln!(out, "{id:>4}  (not in catalog)")?,
        }
    }
    Ok(())
}
