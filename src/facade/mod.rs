pub mod shop;

pub use shop::{HELP_TEXT, Shop, ShopRequest};
