use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Artwork, Comment, Craft, CulturalEvent, Report, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub comments: Arc<Mutex<HashMap<String, Comment>>>,
        pub artworks: Arc<Mutex<HashMap<String, Artwork>>>,
        pub events: Arc<Mutex<HashMap<String, CulturalEvent>>>,
        pub crafts: Arc<Mutex<HashMap<String, Craft>>>,
    }
);
