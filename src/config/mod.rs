//! Configuration loading and management

use crate::catalog::view::ViewParams;
use crate::shop::checkout::ShippingPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog presentation knobs (reveal window and search debounce)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Products visible before any reveal
    #[serde(default = "default_initial_window")]
    pub initial_window: usize,

    /// Products added per reveal
    #[serde(default = "default_window_increment")]
    pub window_increment: usize,

    /// Milliseconds between the reveal trigger and the window growing
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Milliseconds of quiet before a keystroke becomes the search query
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Checkout shipping rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Subtotal at or above which shipping is free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_threshold: f64,

    /// Flat fee below the threshold
    #[serde(default = "default_shipping_fee")]
    pub flat_fee: f64,

    /// Days from placement to the delivery estimate
    #[serde(default = "default_eta_days")]
    pub eta_days: i64,
}

/// Admin back-office thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Stock strictly below this counts as low
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Default page size for admin list endpoints
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Complete configuration for the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub shipping: ShippingConfig,

    #[serde(default)]
    pub admin: AdminConfig,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_initial_window() -> usize {
    9
}
fn default_window_increment() -> usize {
    6
}
fn default_reveal_delay_ms() -> u64 {
    500
}
fn default_debounce_ms() -> u64 {
    300
}
fn default_free_shipping_threshold() -> f64 {
    50.0
}
fn default_shipping_fee() -> f64 {
    5.0
}
fn default_eta_days() -> i64 {
    5
}
fn default_low_stock_threshold() -> u32 {
    10
}
fn default_page_size() -> usize {
    10
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            initial_window: default_initial_window(),
            window_increment: default_window_increment(),
            reveal_delay_ms: default_reveal_delay_ms(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_threshold: default_free_shipping_threshold(),
            flat_fee: default_shipping_fee(),
            eta_days: default_eta_days(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            page_size: default_page_size(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            browse: BrowseConfig::default(),
            shipping: ShippingConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            initial_window: self.browse.initial_window,
            window_increment: self.browse.window_increment,
            reveal_delay: Duration::from_millis(self.browse.reveal_delay_ms),
            debounce_delay: Duration::from_millis(self.browse.debounce_ms),
        }
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_threshold: self.shipping.free_threshold,
            flat_fee: self.shipping.flat_fee,
            eta_days: self.shipping.eta_days,
        }
    }
}
