//! 提示词拼装

use crate::app::catalog::Product;

/// 每个商品一行，顺序与输入一致，空目录得到空串
pub fn format_catalog_for_prompt(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                "- {}: {} (Category: {}, Price: ${})",
                p.name,
                p.description,
                p.category,
                format_price(p.price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 最短往返小数表示，整数价格保留一位小数（`30.0`）。
/// 绝对值不小于 1e16 或小于 1e-4 时改用指数形式（`1e+16`、`1.5e-05`）
fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        let formatted = format!("{price:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => formatted,
        };
    }

    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}

pub fn build_system_prompt(catalog_text: &str) -> String {
    format!(
        "You are a helpful e-commerce assistant. Your job is to recommend products from our catalog based on user queries.

Available products:
{catalog_text}

Instructions:
1. When a user asks about products, recommend the most relevant ones from the catalog above
2. Include the product name, description, and price in your response
3. If no exact match is found, suggest popular or similar alternatives from the catalog
4. Keep responses concise and helpful
5. Format your response in a friendly, conversational way
6. Always recommend actual products from the catalog provided above"
    )
}
