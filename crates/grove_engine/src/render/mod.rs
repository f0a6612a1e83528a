//! Rendering seams
//!
//! The engine never talks to a graphics API directly. It issues draw
//! sequences through the [`device::RenderDevice`] trait and orders
//! translucent billboards with [`billboard::DepthSorter`].

pub mod billboard;
pub mod device;
