use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrderPadError, Result};
use crate::model::Product;
use crate::store::DataStore;
use rust_decimal::Decimal;

pub fn run<S: DataStore>(
    store: &mut S,
    name: String,
    size: String,
    price: Decimal,
    category: String,
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(OrderPadError::Api("Product name cannot be empty".into()));
    }
    if price.is_sign_negative() {
        return Err(OrderPadError::Api("Price cannot be negative".into()));
    }

    let product = Product::new(name, size, price, category);
    let mut catalog = store.load_catalog()?;
    catalog.push(product.clone());
    store.save_catalog(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added {}", product.label())));
    result.catalog.push(product);
    Ok(result)
}
