use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Lookup from an artist's display name (exact match) to a profile URL.
pub type ArtistLinkMap = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("fetching {0}: {1}")]
    Fetch(String, gloo_net::Error),
    #[error("decoding {0}: {1}")]
    Decode(String, gloo_net::Error),
}

/// Everything the site knows, loaded once at startup and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteData {
    pub projects: Vec<ProjectRecord>,
    pub artist_links: ArtistLinkMap,
}

#[derive(Deserialize)]
struct SiteFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default, rename = "artistLinks")]
    artist_links: Option<ArtistLinkMap>,
}

impl SiteData {
    pub async fn load(url: &str, cache_stamp: u64) -> Result<SiteData, DataError> {
        let busted = cache_busted(url, cache_stamp);
        let response = Request::get(&busted)
            .send()
            .await
            .map_err(|err| DataError::Fetch(url.to_string(), err))?;
        let file: SiteFile = response
            .json()
            .await
            .map_err(|err| DataError::Decode(url.to_string(), err))?;
        Ok(SiteData {
            projects: file.projects,
            artist_links: file.artist_links.unwrap_or_default(),
        })
    }
}

/// Shared through a yew context so pages and the detail view read the same
/// immutable snapshot.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub data: Rc<SiteData>,
    pub cache_stamp: u64,
}

/// Appends the per-page-load cache-defeating query value.
pub fn cache_busted(url: &str, stamp: u64) -> String {
    format!("{url}?v={stamp}")
}

/// One catalog entry. The schema is loosely typed: beyond the identity
/// fields, everything is independently optional and a missing field must
/// never break rendering.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, deserialize_with = "de_year")]
    pub year: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub grid_size: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default, deserialize_with = "de_collection")]
    pub collection: Option<Collection>,
    #[serde(default)]
    pub ai_collection: Vec<String>,
    #[serde(default)]
    pub japanese_contemporary_collection: Vec<CollectionRow>,
    #[serde(default)]
    pub curated_collection: Vec<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub exhibitions: Vec<ExhibitionRow>,
    #[serde(default)]
    pub opening_artists: Vec<String>,
    #[serde(default)]
    pub solo_shows: Vec<String>,
    #[serde(default)]
    pub opening_reception_mints: Vec<CollectionRow>,
    #[serde(default)]
    pub colorforms: Vec<Colorform>,
    #[serde(default)]
    pub artist_in_residence: Option<Residency>,
    #[serde(default)]
    pub music: Vec<String>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub educational: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub key_highlights: Vec<String>,
    #[serde(default)]
    pub press: Vec<PressItem>,
    #[serde(default)]
    pub links: Vec<WatchLink>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub exhibition_link: Option<String>,
    #[serde(default)]
    pub crypto_citizens: Option<String>,
    #[serde(default)]
    pub organizing_principle: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub date_range: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
}

impl ProjectRecord {
    /// Leading-digit year parse; missing or non-numeric years sort as 0.
    pub fn numeric_year(&self) -> i64 {
        let digits: String = self
            .year
            .as_deref()
            .unwrap_or("")
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Cover image URL, treating the empty string as absent.
    pub fn cover(&self) -> Option<&str> {
        self.cover_image
            .as_deref()
            .filter(|src| !src.trim().is_empty())
    }

    /// Full description split into blank-line-separated paragraphs.
    pub fn description_paragraphs(&self) -> Vec<&str> {
        self.full_description
            .as_deref()
            .unwrap_or("")
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    #[serde(rename = "youtubeId")]
    pub youtube_id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CollectionRow {
    #[serde(default)]
    pub title: Option<String>,
    pub artist: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Exhibition entries name their artist under either `artist` or `artists`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExhibitionRow {
    pub title: String,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    artists: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExhibitionRow {
    pub fn artist_label(&self) -> Option<&str> {
        self.artist.as_deref().or(self.artists.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Colorform {
    pub form: String,
    pub city: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Residency {
    pub title: String,
    pub artist: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PressItem {
    pub publication: String,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WatchLink {
    pub url: String,
    pub title: String,
}

/// The `collection` field arrives in two shapes and is resolved exactly
/// once, at the deserialization boundary: a single named artist group
/// (first entry carries `sectionTitle`), or independent rows numbered at
/// render time.
#[derive(Clone, Debug, PartialEq)]
pub enum Collection {
    Named { title: String, artists: Vec<String> },
    Rows(Vec<CollectionRow>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCollectionEntry {
    Named {
        #[serde(rename = "sectionTitle")]
        section_title: String,
        #[serde(default)]
        artists: Vec<String>,
    },
    Row(CollectionRow),
}

impl Collection {
    fn resolve(entries: Vec<RawCollectionEntry>) -> Option<Collection> {
        let mut entries = entries.into_iter();
        match entries.next()? {
            RawCollectionEntry::Named {
                section_title,
                artists,
            } => Some(Collection::Named {
                title: section_title,
                artists,
            }),
            RawCollectionEntry::Row(first) => {
                let mut rows = vec![first];
                rows.extend(entries.filter_map(|entry| match entry {
                    RawCollectionEntry::Row(row) => Some(row),
                    RawCollectionEntry::Named { .. } => None,
                }));
                Some(Collection::Rows(rows))
            }
        }
    }
}

fn de_collection<'de, D>(deserializer: D) -> Result<Option<Collection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawCollectionEntry>>::deserialize(deserializer)?;
    Ok(raw.and_then(Collection::resolve))
}

/// Years appear as both strings and bare numbers in the wild.
fn de_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Text(String),
        Number(i64),
        Float(f64),
    }
    Ok(Option::<YearValue>::deserialize(deserializer)?.map(|year| match year {
        YearValue::Text(text) => text,
        YearValue::Number(number) => number.to_string(),
        YearValue::Float(number) => (number as i64).to_string(),
    }))
}
