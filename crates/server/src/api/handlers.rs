mod bookcase;
mod case_profile;
mod collection;
mod movie;
mod physical_media;
mod shelf;
mod shelf_profile;

pub use bookcase::*;
pub use case_profile::*;
pub use collection::*;
pub use movie::*;
pub use physical_media::*;
pub use shelf::*;
pub use shelf_profile::*;
