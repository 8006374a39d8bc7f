use super::model::Product;

/// Case-insensitive substring match on the product name only.
pub fn matches_name(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(&term.to_lowercase())
}

/// Records whose name contains `term`, in list order. An empty term keeps all of them.
pub fn filter_by_name<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_name(product, term))
        .collect()
}
