use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Metric – one benchmarked operation type
// ---------------------------------------------------------------------------

/// The four operations measured by the order book benchmark, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Add,
    Modify,
    Delete,
    BestPrice,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Add, Metric::Modify, Metric::Delete, Metric::BestPrice];

    /// Prefix shared by the `<prefix> Mean` / `<prefix> StdDev` columns.
    pub fn column_prefix(self) -> &'static str {
        match self {
            Metric::Add => "Add",
            Metric::Modify => "Modify",
            Metric::Delete => "Delete",
            Metric::BestPrice => "BestPrice",
        }
    }

    pub fn mean_column(self) -> String {
        format!("{} Mean", self.column_prefix())
    }

    pub fn std_dev_column(self) -> String {
        format!("{} StdDev", self.column_prefix())
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Add => "Add Orders (μs)",
            Metric::Modify => "Modify Orders (μs)",
            Metric::Delete => "Delete Orders (μs)",
            Metric::BestPrice => "Best Price Lookup (ns)",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Metric::BestPrice => Unit::Nanoseconds,
            _ => Unit::Microseconds,
        }
    }

    /// (row, column) in the 2×2 panel grid.
    pub fn panel_position(self) -> (usize, usize) {
        match self {
            Metric::Add => (0, 0),
            Metric::Modify => (0, 1),
            Metric::Delete => (1, 0),
            Metric::BestPrice => (1, 1),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Microseconds,
    Nanoseconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Microseconds => write!(f, "μs"),
            Unit::Nanoseconds => write!(f, "ns"),
        }
    }
}

// ---------------------------------------------------------------------------
// BenchmarkRow – one row of the results file
// ---------------------------------------------------------------------------

/// Precomputed summary statistics for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mean: f64,
    /// Symmetric error-bar half-width; never negative.
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub implementation: String,
    pub add: Measurement,
    pub modify: Measurement,
    pub delete: Measurement,
    pub best_price: Measurement,
}

impl BenchmarkRow {
    pub fn measurement(&self, metric: Metric) -> Measurement {
        match metric {
            Metric::Add => self.add,
            Metric::Modify => self.modify,
            Metric::Delete => self.delete,
            Metric::BestPrice => self.best_price,
        }
    }
}

// ---------------------------------------------------------------------------
// BenchmarkDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of the results file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDataset {
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkDataset {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self { rows }
    }

    /// Number of implementations (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn implementations(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.implementation.as_str())
    }

    /// Measurements of a single metric, in row order.
    pub fn measurements(&self, metric: Metric) -> impl Iterator<Item = Measurement> + '_ {
        self.rows.iter().map(move |r| r.measurement(metric))
    }

    /// Implementation names that occur on more than one row.
    pub fn duplicate_implementations(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for name in self.implementations() {
            *counts.entry(name).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, base: f64) -> BenchmarkRow {
        let m = |mean| Measurement { mean, std_dev: 0.1 };
        BenchmarkRow {
            implementation: name.to_string(),
            add: m(base),
            modify: m(base + 1.0),
            delete: m(base + 2.0),
            best_price: m(base + 3.0),
        }
    }

    #[test]
    fn metric_layout_covers_the_grid_once() {
        let mut positions: Vec<_> = Metric::ALL.iter().map(|m| m.panel_position()).collect();
        positions.sort();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn only_best_price_is_in_nanoseconds() {
        assert_eq!(Metric::BestPrice.unit(), Unit::Nanoseconds);
        for metric in [Metric::Add, Metric::Modify, Metric::Delete] {
            assert_eq!(metric.unit(), Unit::Microseconds);
        }
        assert_eq!(Metric::BestPrice.mean_column(), "BestPrice Mean");
        assert_eq!(Metric::Delete.std_dev_column(), "Delete StdDev");
    }

    #[test]
    fn measurements_follow_row_order() {
        let ds = BenchmarkDataset::new(vec![row("A", 1.0), row("B", 5.0)]);
        let means: Vec<f64> = ds.measurements(Metric::Modify).map(|m| m.mean).collect();
        assert_eq!(means, vec![2.0, 6.0]);
        assert_eq!(ds.implementations().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn duplicates_are_reported_once() {
        let ds = BenchmarkDataset::new(vec![row("A", 1.0), row("B", 1.0), row("A", 2.0)]);
        assert_eq!(ds.duplicate_implementations(), vec!["A"]);
    }
}
