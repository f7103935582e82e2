//! Platform-free logic for the portfolio front-end: the falling-leaf particle
//! pool, scroll-position state derivation, event-rate control, and the typed
//! content model. The `site-web` crate wires these into the browser DOM.

pub mod constants;
pub mod content;
pub mod particles;
pub mod render;
pub mod scroll;
pub mod stats;
pub mod timing;

pub use content::*;
pub use particles::*;
pub use scroll::*;
pub use timing::*;
