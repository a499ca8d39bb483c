use serde::Deserialize;
use std::fmt;

/// Stable key of a coupon within one catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct CouponId(pub u64);

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card color family. Only the renderer looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Purple,
    Amber,
    Teal,
    Pink,
    Cyan,
}

/// Styling hints attached to a coupon
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Presentation {
    #[serde(default)]
    pub accent: Accent,
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    "New".to_string()
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation {
            accent: Accent::default(),
            label: default_label(),
        }
    }
}

/// A promotional coupon as supplied by a catalog provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRecord {
    pub id: CouponId,
    pub code: String,
    pub description: String,
    pub max_discount: String,
    pub min_order: String,
    pub expires_in: String,
    #[serde(default)]
    pub presentation: Presentation,
}

impl CouponRecord {
    pub fn new(
        id: u64,
        code: &str,
        description: &str,
        max_discount: &str,
        min_order: &str,
        expires_in: &str,
    ) -> Self {
        Self {
            id: CouponId(id),
            code: code.to_string(),
            description: description.to_string(),
            max_discount: max_discount.to_string(),
            min_order: min_order.to_string(),
            expires_in: expires_in.to_string(),
            presentation: Presentation::default(),
        }
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.presentation.accent = accent;
        self
    }

    /// `Max: ₹200 | Min: ₹399`
    pub fn bounds_line(&self) -> String {
        format!("Max: {} | Min: {}", self.max_discount, self.min_order)
    }

    pub fn expiry_line(&self) -> String {
        format!("Expires: {}", self.expires_in)
    }
}
