#![warn(missing_docs)]

//! # `heliodor`
//!
//! A solver for the optical block puzzles found in the mobile game Lazors: place a limited
//! stock of reflecting, opaque, and refracting blocks on a grid so that every target point
//! is crossed by a laser beam.
//! Begin by building a [`Lattice`] with a [`LatticeBuilder`](builder::LatticeBuilder), then
//! either run a single simulation with a [`Tracer`] or search for a placement with
//! [`solve()`](crate::Lattice::solve), consuming the lattice and yielding a solved version
//! of the lattice.
//!
//! Parsing puzzle files and persisting solutions are left to callers; the crate speaks in
//! [`Tile`] rows, [`Ray`] sources, target [`Location`]s, and an [`Inventory`].
//!
//! # Internals
//! The board is held at doubled resolution: a cell of the original grid becomes a center
//! point with odd coordinates on both axes, and the points between centers are the edge
//! midpoints where beams meet block faces. Beams travel diagonally one lattice unit at a
//! time, so which face they strike falls out of coordinate parity alone: an even x axis
//! means a left/right face, an even y axis a top/bottom face.
//!
//! Simulation expands a frontier of rays breadth-first. Absorption and exits shrink the
//! frontier; reflection rewrites a heading; refraction forks a ray into a transmitted and
//! a reflected copy. Every `(position, heading)` state produced in a run is remembered,
//! and a ray about to re-enter a known state is cut instead, so closed loops between
//! reflecting faces terminate with the loop flagged on the report.
//!
//! The search is plain depth-first backtracking over the open cell centers in row-major
//! order, trying each block kind and then no block at every cell, and invoking the tracer
//! once per fully decided candidate that has used up the whole inventory. Simulation is
//! side-effect-free on the lattice, so the search mutates one board in place and restores
//! it on every exit path.

pub use builder::LatticeBuilder;
pub use cell::Tile;
pub use element::ElementKind;
pub use heading::Heading;
pub use inventory::Inventory;
pub use lattice::Lattice;
pub use location::Location;
pub use solver::{Placement, Solver};
pub use tracer::{Ray, TraceReport, Tracer};

pub mod builder;
pub(crate) mod cell;
pub(crate) mod element;
pub(crate) mod heading;
pub(crate) mod location;
pub(crate) mod lattice;
pub(crate) mod inventory;
pub(crate) mod tracer;
pub(crate) mod solver;
