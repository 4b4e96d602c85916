mod artworks;
mod comments;
mod crafts;
mod events;
mod reports;
mod users;

pub use artworks::*;
pub use comments::*;
pub use crafts::*;
pub use events::*;
pub use reports::*;
pub use users::*;

use crate::{Database, ReferenceDb};

#[cfg(feature = "mongodb")]
use crate::MongoDb;

pub trait AbstractDatabase:
    Sync
    + Send
    + artworks::AbstractArtworks
    + comments::AbstractComments
    + crafts::AbstractCrafts
    + events::AbstractEvents
    + reports::AbstractReports
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}

#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
