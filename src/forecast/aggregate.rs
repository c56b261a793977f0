use std::collections::BTreeMap;

use crate::models::{ProductAggregate, Transaction};

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    sum: f64,
    count: usize,
}

impl Totals {
    fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }
}

fn group_by_product(records: &[Transaction]) -> BTreeMap<&str, Totals> {
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for r in records {
        let t = groups.entry(r.product.as_str()).or_default();
        t.sum += r.quantity;
        t.count += 1;
    }
    groups
}

/// Group both streams by product and left-join write-offs onto sales.
///
/// Products that only appear in `writeoffs` have no sales baseline and are
/// dropped. Output is ordered by product name.
pub fn aggregate(sales: &[Transaction], writeoffs: &[Transaction]) -> Vec<ProductAggregate> {
    let sales_groups = group_by_product(sales);
    let writeoff_groups = group_by_product(writeoffs);

    sales_groups
        .into_iter()
        .map(|(product, s)| {
            let w = writeoff_groups.get(product).copied().unwrap_or_default();
            ProductAggregate {
                product: product.to_string(),
                total_sales: s.sum,
                mean_sales: s.mean(),
                sales_count: s.count,
                total_writeoffs: w.sum,
                mean_writeoffs: w.mean(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixed_now, tx};

    #[test]
    fn groups_sum_mean_and_count() {
        let now = fixed_now();
        let sales = vec![tx(now, 1, "Eclair", 10.0), tx(now, 2, "Eclair", 20.0)];
        let out = aggregate(&sales, &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].total_sales, 30.0);
        assert_eq!(out[0].mean_sales, 15.0);
        assert_eq!(out[0].sales_count, 2);
        assert_eq!(out[0].total_writeoffs, 0.0);
        assert_eq!(out[0].mean_writeoffs, 0.0);
    }

    #[test]
    fn left_join_keeps_sales_products_only() {
        let now = fixed_now();
        let sales = vec![tx(now, 1, "Napoleon", 5.0)];
        let writeoffs = vec![
            tx(now, 1, "Napoleon", 1.0),
            tx(now, 2, "Napoleon", 3.0),
            tx(now, 1, "Tiramisu", 4.0),
        ];
        let out = aggregate(&sales, &writeoffs);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product, "Napoleon");
        assert_eq!(out[0].total_writeoffs, 4.0);
        assert_eq!(out[0].mean_writeoffs, 2.0);
    }

    #[test]
    fn output_sorted_by_product() {
        let now = fixed_now();
        let sales = vec![
            tx(now, 1, "Tiramisu", 1.0),
            tx(now, 1, "Cheesecake", 1.0),
            tx(now, 1, "Medovik", 1.0),
        ];
        let names: Vec<String> = aggregate(&sales, &[])
            .into_iter()
            .map(|a| a.product)
            .collect();
        assert_eq!(names, vec!["Cheesecake", "Medovik", "Tiramisu"]);
    }
}
