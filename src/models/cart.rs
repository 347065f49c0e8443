use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::{is_known_option, PRODUCT_ID_REGEX};

pub const MILK_TYPES: [&str; 6] = ["Regular", "Oat", "Almond", "Soy", "Coconut", "Macadamia"];

pub const TEMPERATURES: [&str; 4] = ["Hot", "Iced", "Extra Hot", "Luke Warm"];

/// Extra options and their surcharge.
pub const EXTRAS: [(&str, f64); 5] = [
    ("Extra Shot", 1.50),
    ("Decaf", 0.0),
    ("Sugar Free Syrup", 0.50),
    ("Extra Foam", 0.0),
    ("Whipped Cream", 1.00),
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Exact, case-sensitive lookup by display name ("Small", "Medium", "Large").
    pub fn from_name(name: &str) -> Option<Size> {
        Size::ALL.into_iter().find(|size| size.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    pub fn upcharge(&self) -> f64 {
        match self {
            Size::Small => 0.0,
            Size::Medium => 1.00,
            Size::Large => 2.00,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::Medium
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Upcharge for a size name. Names outside the size table cost nothing.
pub fn size_upcharge(name: &str) -> f64 {
    Size::from_name(name).map(|size| size.upcharge()).unwrap_or(0.0)
}

/// Surcharge for an extra option. Names outside the extras table cost nothing.
pub fn extra_surcharge(name: &str) -> f64 {
    EXTRAS
        .iter()
        .find(|(extra, _)| *extra == name)
        .map(|(_, price)| *price)
        .unwrap_or(0.0)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartLineItem {
    pub id: Uuid,
    pub product_id: String,
    pub name: String,
    pub base_price: f64,
    pub quantity: u32,
    pub size: String,
    pub milk: String,
    pub temperature: String,
    pub extras: Vec<String>,
}

impl CartLineItem {
    pub fn new(product_id: &str, name: &str, base_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product_id.to_string(),
            name: name.to_string(),
            base_price,
            quantity: 1,
            size: Size::default().name().to_string(),
            milk: MILK_TYPES[0].to_string(),
            temperature: TEMPERATURES[0].to_string(),
            extras: Vec::new(),
        }
    }

    pub fn extras_price(&self) -> f64 {
        self.extras.iter().map(|extra| extra_surcharge(extra)).sum()
    }

    /// Base price plus size upcharge plus every extra.
    pub fn unit_price(&self) -> f64 {
        self.base_price + size_upcharge(&self.size) + self.extras_price()
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

// request dto
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AddToCartRequest {
    #[validate(regex(
        path = "PRODUCT_ID_REGEX",
        message = "Product id can only contain lowercase letters, digits and dashes"
    ))]
    pub product_id: String,

    #[validate(range(min = 1, max = 20, message = "Quantity must be between 1 and 20"))]
    pub quantity: u32,

    #[validate(custom = "validate_size")]
    pub size: String,

    #[validate(custom = "validate_milk")]
    pub milk: String,

    #[validate(custom = "validate_temperature")]
    pub temperature: String,

    pub extras: Vec<String>,
}

impl AddToCartRequest {
    pub fn new(product_id: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity: 1,
            size: Size::default().name().to_string(),
            milk: MILK_TYPES[0].to_string(),
            temperature: TEMPERATURES[0].to_string(),
            extras: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size.name().to_string();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_milk(mut self, milk: &str) -> Self {
        self.milk = milk.to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: &str) -> Self {
        self.temperature = temperature.to_string();
        self
    }

    pub fn with_extra(mut self, extra: &str) -> Self {
        self.extras.push(extra.to_string());
        self
    }
}

fn validate_size(size: &str) -> Result<(), ValidationError> {
    if Size::from_name(size).is_none() {
        return Err(ValidationError::new("unknown_size"));
    }
    Ok(())
}

fn validate_milk(milk: &str) -> Result<(), ValidationError> {
    if !is_known_option(&MILK_TYPES, milk) {
        return Err(ValidationError::new("unknown_milk"));
    }
    Ok(())
}

fn validate_temperature(temperature: &str) -> Result<(), ValidationError> {
    if !is_known_option(&TEMPERATURES, temperature) {
        return Err(ValidationError::new("unknown_temperature"));
    }
    Ok(())
}
