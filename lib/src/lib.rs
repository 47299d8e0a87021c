//! __Rautomata__ runs synchronous cellular automata on fixed-size grids.
//!
//! Three families of automata are supported:
//!
//! * one-dimensional [elementary](rules::Elementary) rules;
//! * two-dimensional [Life-like](rules::Life) rules;
//! * a stochastic [forest fire](rules::FireRule).
//!
//! # Example
//!
//! ```rust
//! use rautomata_lib::{Config, Init, Pattern};
//!
//! // A glider on a 16x16 torus.
//! let config = Config::new(16, 16)
//!     .set_life(["40"])
//!     .set_init(Init::Pattern(Pattern::Glider));
//! let mut world = config.world().unwrap();
//! world.run(4);
//! assert_eq!(world.active_count(), 5);
//! ```

pub mod boundary;
mod cells;
mod config;
pub mod engine;
mod error;
mod grid;
pub mod init;
pub mod rules;
mod traits;
mod world;

pub use boundary::Boundary;
pub use cells::{Cell, Color, Coord, FireCell, State, ALIVE, DEAD};
pub use config::{AutomatonKind, Config, FireConfig};
pub use error::Error;
pub use grid::{Grid, GridView};
pub use init::{Init, Pattern};
pub use traits::Simulate;
pub use world::World;
