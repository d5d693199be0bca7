use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of a holding.
/// This is a closed set; allocation grouping keys off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Individual equities (AAPL, MSFT, etc.)
    Stock,
    /// Fixed income
    Bond,
    /// Exchange-traded funds
    #[serde(rename = "ETF")]
    Etf,
    /// Cash and cash equivalents
    Cash,
    /// Liabilities, usually held with a negative quantity
    Debt,
    /// Options contracts
    Option,
}

impl Category {
    /// All categories in declaration order (for selectors and listings).
    pub const ALL: [Category; 6] = [
        Category::Stock,
        Category::Bond,
        Category::Etf,
        Category::Cash,
        Category::Debt,
        Category::Option,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Stock => write!(f, "Stock"),
            Category::Bond => write!(f, "Bond"),
            Category::Etf => write!(f, "ETF"),
            Category::Cash => write!(f, "Cash"),
            Category::Debt => write!(f, "Debt"),
            Category::Option => write!(f, "Option"),
        }
    }
}

/// A single position in the portfolio.
///
/// `quantity` may be negative to represent a liability or short position
/// (category `Debt`). All three numeric fields accept any finite real.
///
/// Serialized field names match the persisted wire format:
/// `type`, `avgPrice` and `currentPrice` rather than the Rust names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique, stable, opaque identifier
    pub id: String,

    /// Short display code (e.g., "VTI", "AAPL")
    pub symbol: String,

    /// Human-readable name
    pub name: String,

    /// Allocation category
    #[serde(rename = "type")]
    pub category: Category,

    /// Units held (negative for liabilities/shorts)
    pub quantity: f64,

    /// Cost basis per unit
    pub avg_price: f64,

    /// Market price per unit
    pub current_price: f64,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        quantity: f64,
        avg_price: f64,
        current_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symbol: symbol.into(),
            name: name.into(),
            category,
            quantity,
            avg_price,
            current_price,
        }
    }

    /// The fixed placeholder record appended by the "add holding" action.
    pub fn placeholder() -> Self {
        Self::new("NEW", "New Holding", Category::Stock, 1.0, 100.0, 100.0)
    }

    /// quantity × current price.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// quantity × average cost per unit.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.avg_price
    }

    /// Absolute gain/loss: market value minus cost basis.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.market_value() - self.cost_basis()
    }

    /// Per-unit price change as a percentage of the cost per unit.
    /// Defined as 0 when the cost per unit is 0 (never NaN).
    #[must_use]
    pub fn gain_percent(&self) -> f64 {
        if self.avg_price == 0.0 {
            0.0
        } else {
            (self.current_price - self.avg_price) / self.avg_price.abs() * 100.0
        }
    }
}

/// A single-field replacement applied to one holding.
///
/// One variant per mutable field, so an update can never target an
/// unknown field or carry a value of the wrong type. The `_input`
/// constructors build the numeric variants from raw form text, coercing
/// anything unparsable to 0.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingUpdate {
    Symbol(String),
    Name(String),
    Category(Category),
    Quantity(f64),
    AvgPrice(f64),
    CurrentPrice(f64),
}

impl HoldingUpdate {
    /// Quantity from raw form text; non-numeric input becomes 0.
    pub fn quantity_input(raw: &str) -> Self {
        Self::Quantity(coerce_numeric(raw))
    }

    /// Average cost from raw form text; non-numeric input becomes 0.
    pub fn avg_price_input(raw: &str) -> Self {
        Self::AvgPrice(coerce_numeric(raw))
    }

    /// Current price from raw form text; non-numeric input becomes 0.
    pub fn current_price_input(raw: &str) -> Self {
        Self::CurrentPrice(coerce_numeric(raw))
    }
}

fn coerce_numeric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// The fixed default holdings, used on first run and whenever the
/// persisted record is absent or unreadable.
pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding {
            id: "1".into(),
            symbol: "VTI".into(),
            name: "Vanguard Total Stock Market".into(),
            category: Category::Etf,
            quantity: 50.0,
            avg_price: 210.00,
            current_price: 245.50,
        },
        Holding {
            id: "2".into(),
            symbol: "BND".into(),
            name: "Vanguard Total Bond Market".into(),
            category: Category::Bond,
            quantity: 100.0,
            avg_price: 75.00,
            current_price: 72.30,
        },
        Holding {
            id: "3".into(),
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
            category: Category::Stock,
            quantity: 25.0,
            avg_price: 140.00,
            current_price: 185.00,
        },
        Holding {
            id: "4".into(),
            symbol: "MSFT".into(),
            name: "Microsoft Corp.".into(),
            category: Category::Stock,
            quantity: 15.0,
            avg_price: 280.00,
            current_price: 405.00,
        },
        Holding {
            id: "5".into(),
            symbol: "USD".into(),
            name: "Cash Reserve".into(),
            category: Category::Cash,
            quantity: 5000.0,
            avg_price: 1.00,
            current_price: 1.00,
        },
    ]
}
