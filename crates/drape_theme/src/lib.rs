//! Drape Skins
//!
//! Skins describe how components are decorated in each of their states.
//! A skin file is TOML; every style lists decorations, each guarded by the
//! states it requires and carrying a partial border. Resolution merges the
//! applicable fragments into one effective border.
//!
//! # Quick Start
//!
//! ```rust
//! use drape_border::{Border, ColorSupport};
//! use drape_theme::{default_skin, StateSet, FOCUSED};
//!
//! let skin = default_skin().unwrap();
//! let border = skin
//!     .resolve("button", &StateSet::from_states([FOCUSED]))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(border.color().to_hex_string(), "#3399ff");
//! assert_eq!(border.width().top, 2);
//! ```
//!
//! # Resolution Order
//!
//! Applicable decorations are merged from least to most specific:
//!
//! - Fewer required states first
//! - Inherited (`extends`) decorations before the style's own
//! - Otherwise in declaration order
//!
//! A decoration with `overwrite = true` discards everything merged before
//! it. Later fragments override earlier ones field by field.
//!
//! # Skin Files
//!
//! ```toml
//! name = "Custom"
//!
//! [styles.button]
//! [[styles.button.decorations]]
//! border = { color = "#aaaaaa", stroke = { width = 1.0 } }
//!
//! [[styles.button.decorations]]
//! states = ["focused"]
//! border = { color = "#3399ff" }
//! ```

pub mod error;
pub mod presets;
pub mod skin;
pub mod state;

pub use error::{Result, ThemeError};
pub use presets::{default_skin, SkinPreset};
pub use skin::{Applied, DecorationDef, Skin, SkinFile, StyleDef};
pub use state::{StateSet, DISABLED, FOCUSED, HOVER, PRESSED, SELECTED};
