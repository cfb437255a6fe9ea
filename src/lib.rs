//! A library for turning N×N×N cubes and for reading and writing their states as CFEN strings.
//!
//! ```rust
//! use cfen_cube::cfen::generate_cfen;
//! use cfen_cube::cube::Cube;
//! use cfen_cube::notation::parse_moves;
//!
//! let mut cube = Cube::new(3);
//! cube.apply_moves(&parse_moves("R U R' U'").unwrap()).unwrap();
//! assert_ne!(generate_cfen(&cube), "YB|Y9/R9/B9/W9/O9/G9");
//! cube.apply_moves(&parse_moves("U R U' R'").unwrap()).unwrap();
//! assert_eq!(generate_cfen(&cube), "YB|Y9/R9/B9/W9/O9/G9");
//! ```

#![deny(missing_docs)]

pub mod cfen;
pub mod coord;
pub mod cube;
pub mod error;
pub mod moves;
pub mod notation;
