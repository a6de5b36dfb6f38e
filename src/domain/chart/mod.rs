//! Chart projection: selected products mapped into bar-chart series data.

use crate::domain::catalog::{Product, ProductId};

/// One bar of the series: product identity on the x axis, price on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub id: ProductId,
    pub price: f64,
}

/// Ordered, chart-ready series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    points: Vec<PricePoint>,
}

impl ChartSeries {
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest price in the series, for vertical scaling.
    pub fn max_price(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, p| acc.max(p.price))
    }
}

/// Pure projection from products to series data. Referentially transparent,
/// re-derivable at any time; an empty input yields an empty series.
pub fn project_prices<'a>(products: impl IntoIterator<Item = &'a Product>) -> ChartSeries {
    ChartSeries {
        points: products.into_iter().map(|p| PricePoint { id: p.id, price: p.price }).collect(),
    }
}
