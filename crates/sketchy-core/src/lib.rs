//! Sketchy Core Types and Definitions
//!
//! This crate provides the foundational types shared by the sketchy decoration
//! pipeline. It includes:
//!
//! - **Identifiers**: String-interned tag and class names ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke, fill and style parameters plus the shape renderer
//!   contract ([`draw`] module)
//! - **Document**: The host document capability decorations are drawn into
//!   ([`document`] module)

pub mod color;
pub mod document;
pub mod draw;
pub mod geometry;
pub mod identifier;
