//! Interactive building blocks shared by the sections.

mod carousel;
mod cube;
mod reveal;

pub use carousel::{Carousel, ResponsiveList};
pub use cube::HeroCube;
pub use reveal::Reveal;
