//! Joins the four upstream collections by artist id and applies the listing
//! filters.

use thiserror::Error;

use crate::api::{GroupieClient, GroupieError};
use crate::models::{Artist, DateSet, LocationSet, RelationSet};

/// Queries this many characters long or longer are refused.
pub const QUERY_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Limit reached")]
    TooLong,
}

/// Lower-cased, length-checked search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let lowered = raw.to_lowercase();
        if lowered.chars().count() >= QUERY_LIMIT {
            return Err(QueryError::TooLong);
        }
        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        self.is_empty() || artist.name.to_lowercase().contains(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberBucket {
    Exactly(usize),
    AtLeast(usize),
}

impl MemberBucket {
    /// `"1"`..`"4"` select an exact size, `"5"` means five or more. Anything
    /// else is not a bucket and disables the filter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Exactly(1)),
            "2" => Some(Self::Exactly(2)),
            "3" => Some(Self::Exactly(3)),
            "4" => Some(Self::Exactly(4)),
            "5" => Some(Self::AtLeast(5)),
            _ => None,
        }
    }

    pub fn matches(self, artist: &Artist) -> bool {
        let count = artist.member_count();
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

pub fn filter_by_name(artists: Vec<Artist>, query: &SearchQuery) -> Vec<Artist> {
    if query.is_empty() {
        return artists;
    }

    artists
        .into_iter()
        .filter(|artist| query.matches(artist))
        .collect()
}

pub fn filter_by_members(artists: Vec<Artist>, bucket: Option<MemberBucket>) -> Vec<Artist> {
    match bucket {
        Some(bucket) => artists
            .into_iter()
            .filter(|artist| bucket.matches(artist))
            .collect(),
        None => artists,
    }
}

pub fn find_artist(artists: Vec<Artist>, id: i64) -> Option<Artist> {
    artists.into_iter().find(|artist| artist.id == id)
}

/// Location, date and relation collections for every known artist.
#[derive(Debug, Clone, Default)]
pub struct Associations {
    pub locations: LocationSet,
    pub dates: DateSet,
    pub relations: RelationSet,
}

impl Associations {
    /// Fetches the three auxiliary collections one after another. A failed
    /// collection is logged and left empty.
    pub async fn fetch(client: &GroupieClient) -> Self {
        let locations = degrade("locations", client.fetch_locations().await);
        let dates = degrade("dates", client.fetch_dates().await);
        let relations = degrade("relations", client.fetch_relations().await);

        Self {
            locations,
            dates,
            relations,
        }
    }
}

fn degrade<T: Default>(collection: &'static str, result: Result<T, GroupieError>) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(collection, error = %err, "auxiliary collection unavailable");
        T::default()
    })
}

/// View model for the listing page.
#[derive(Debug, Clone)]
pub struct PageData {
    pub artists: Vec<Artist>,
    pub locations: LocationSet,
    pub dates: DateSet,
    pub relations: RelationSet,
    pub query: String,
    pub members_filter: String,
}

impl PageData {
    pub fn build(
        artists: Vec<Artist>,
        query: &SearchQuery,
        members_filter: &str,
        associations: Associations,
    ) -> Self {
        let artists = filter_by_name(artists, query);
        let artists = filter_by_members(artists, MemberBucket::parse(members_filter));

        Self {
            artists,
            locations: associations.locations,
            dates: associations.dates,
            relations: associations.relations,
            query: query.as_str().to_string(),
            members_filter: members_filter.to_string(),
        }
    }

    pub fn locations_for(&self, artist: &Artist) -> &[String] {
        self.locations.entries_for(artist.id)
    }

    pub fn dates_for(&self, artist: &Artist) -> &[String] {
        self.dates.entries_for(artist.id)
    }

    pub fn relations_for(&self, artist: &Artist) -> &[String] {
        self.relations.entries_for(artist.id)
    }
}

/// View model for a single artist.
#[derive(Debug, Clone)]
pub struct ArtistPageData {
    pub artist: Artist,
    pub locations: Vec<String>,
    pub dates: Vec<String>,
    pub relations: Vec<String>,
}

impl ArtistPageData {
    pub fn build(artist: Artist, associations: &Associations) -> Self {
        let id = artist.id;
        Self {
            artist,
            locations: associations.locations.entries_for(id).to_vec(),
            dates: associations.dates.entries_for(id).to_vec(),
            relations: associations.relations.entries_for(id).to_vec(),
        }
    }
}
