//! Enumeration of polycubes up to rotation, with stability analysis and
//! puzzle-piece output.
//!
//! A polycube is a set of unit cubes joined face to face. The core of this
//! crate grows polycubes one cube at a time, reducing every candidate to a
//! canonical representative under the 24 proper rotations of the cube so
//! that each shape is found exactly once. On top of that sit a stability
//! analyzer (which resting orientation keeps the center of gravity over the
//! supported base?), a layered-grid piece format for 3D printing, and the
//! call contract for an external exact-cover solver.


pub mod burr;
pub mod cache;
pub mod cover;
pub mod enumerate;
pub mod geometry;
pub mod polycube;
pub mod rotation;
pub mod stability;

pub use enumerate::polycubes;
pub use polycube::{Coord, PolyCube};
pub use rotation::{rotations, Rotation};
pub use stability::stable;
