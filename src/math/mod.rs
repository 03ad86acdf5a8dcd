//! Math utilities and types for placing the maze in the world.
//!
//! This module provides the 2D vector type used for floor-plane positions and
//! the coordinate conversions between grid spaces and world positions.
//!
//! # Module Organization
//!
//! - [`vec`] module contains the floor-plane vector (re-exported at root level)
//! - [`coordinates`] module contains grid/world conversions, bounds, corners
//!   and cardinal directions

#![allow(missing_docs)]

pub mod coordinates;
pub mod vec;

pub use vec::Vec2;
