//! Basic usage example for sqb
//!
//! Run with: cargo run --example basic -p sqb

use sqb::{
    BuildError, PlaceholderStyle, and, columns, eq, in_list, like, limit, not_between, or,
    order_by, order_by_list, table,
};
use std::collections::HashMap;

fn main() -> Result<(), BuildError> {
    // A fully bound query
    let q = sqb::new("SELECT ? FROM ? WHERE ? ORDER BY ? ?")
        .bind(columns(["id", "name", "price"]))
        .bind(table("products"))
        .bind(and(
            or(eq("category", 1), eq("category", 2)),
            in_list("brand", vec![vec!["apple", "sony"], vec!["google"]]),
        ))
        .bind(order_by_list(order_by("price", true), [order_by("id", false)]))
        .bind(limit(20))
        .build()?;
    println!("{}", q.sql);
    println!("  args: {:?}", q.args);

    // Reuse a partially bound builder as a prefix
    let base = sqb::new("SELECT * FROM products WHERE ? AND ?").bind(like("name", "%phone%"));
    for (lo, hi) in [(100, 200), (500, 900)] {
        let q = base.bind(not_between("price", lo, hi)).build()?;
        println!("{}  {:?}", q.sql, q.args);
    }

    // Filters from a map; an empty map binds nothing
    let filters: HashMap<&str, i64> = HashMap::from([("stock", 0), ("shop_id", 7)]);
    let q = sqb::new("SELECT * FROM products WHERE ?")
        .placeholder(PlaceholderStyle::Numbered)
        .bind_opt(sqb::and_from_map(sqb::gt, filters))
        .build()?;
    println!("{}  {:?}", q.sql, q.args);

    // Too few bindings is an error, not broken SQL
    match sqb::new("SELECT * FROM t WHERE ? AND ?").bind(eq("a", 1)).build() {
        Ok(q) => println!("unexpected: {}", q.sql),
        Err(e) => println!("error: {e}"),
    }

    Ok(())
}
