//! Publishing entities: content items, their categories, and series.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::serde_ext::present;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContentType {
    #[default]
    Article,
    Video,
    Podcast,
    Sermon,
    Resource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContentStatus {
    #[default]
    Draft,
    InReview,
    Scheduled,
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Visibility {
    #[default]
    Public,
    Members,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeriesType {
    Course,
    #[default]
    Collection,
    Sequence,
}

// ---------------------------------------------------------------------------
// Content items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItemRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub visibility: Visibility,
    pub featured_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub theological_themes: Option<Vec<String>>,
    pub series_id: Option<Uuid>,
    pub series_order: Option<u32>,
    /// Minutes.
    pub reading_time: Option<u32>,
    pub view_count: u64,
    pub like_count: u64,
    pub share_count: u64,
    pub published_at: Option<Timestamp>,
    pub scheduled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContentItemRow {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub visibility: Visibility,
    pub featured_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub theological_themes: Option<Vec<String>>,
    pub series_id: Option<Uuid>,
    pub series_order: Option<u32>,
    pub reading_time: Option<u32>,
    pub published_at: Option<Timestamp>,
    pub scheduled_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theological_themes: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<Timestamp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Option<Timestamp>>,
    pub updated_at: Timestamp,
}

impl ContentItemRow {
    pub fn apply(&mut self, patch: ContentItemPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.excerpt {
            self.excerpt = v;
        }
        if let Some(v) = patch.content {
            self.content = v;
        }
        if let Some(v) = patch.category_id {
            self.category_id = v;
        }
        if let Some(v) = patch.content_type {
            self.content_type = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.visibility {
            self.visibility = v;
        }
        if let Some(v) = patch.featured_image_url {
            self.featured_image_url = v;
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.theological_themes {
            self.theological_themes = v;
        }
        if let Some(v) = patch.series_id {
            self.series_id = v;
        }
        if let Some(v) = patch.series_order {
            self.series_order = v;
        }
        if let Some(v) = patch.reading_time {
            self.reading_time = v;
        }
        if let Some(v) = patch.published_at {
            self.published_at = v;
        }
        if let Some(v) = patch.scheduled_at {
            self.scheduled_at = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&ContentCategoryRow> for CategorySummary {
    fn from(row: &ContentCategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SeriesSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub total_episodes: u32,
}

impl From<&ContentSeriesRow> for SeriesSummary {
    fn from(row: &ContentSeriesRow) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            slug: row.slug.clone(),
            total_episodes: row.total_episodes,
        }
    }
}

/// Relations the caller eagerly loaded alongside a content item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentItemRelations {
    pub author: Option<AuthorSummary>,
    pub category: Option<CategorySummary>,
    pub series: Option<SeriesSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentItemResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub author_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,
    pub tags: Vec<String>,
    pub theological_themes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_text: Option<String>,
    pub view_count: u64,
    pub like_count: u64,
    pub share_count: u64,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateContentItem {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub author_id: Uuid,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub theological_themes: Option<Vec<String>>,
    #[serde(default)]
    pub series_id: Option<Uuid>,
    #[serde(default)]
    pub series_order: Option<u32>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentItem {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub excerpt: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub category_id: Option<Option<Uuid>>,
    pub content_type: Option<ContentType>,
    pub status: Option<ContentStatus>,
    pub visibility: Option<Visibility>,
    #[serde(default, deserialize_with = "present")]
    pub featured_image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub theological_themes: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub series_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "present")]
    pub series_order: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub reading_time: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub published_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub scheduled_at: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCategoryRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub order_index: u32,
    pub theological_focus: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContentCategoryRow {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub order_index: u32,
    pub theological_focus: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theological_focus: Option<Option<Vec<String>>>,
    pub updated_at: Timestamp,
}

impl ContentCategoryRow {
    pub fn apply(&mut self, patch: ContentCategoryPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.parent_id {
            self.parent_id = v;
        }
        if let Some(v) = patch.order_index {
            self.order_index = v;
        }
        if let Some(v) = patch.theological_focus {
            self.theological_focus = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub order_index: u32,
    pub theological_focus: Vec<String>,
    pub is_top_level: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateContentCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub order_index: u32,
    #[serde(default)]
    pub theological_focus: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub parent_id: Option<Option<Uuid>>,
    pub order_index: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    pub theological_focus: Option<Option<Vec<String>>>,
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSeriesRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub author_id: Uuid,
    pub series_type: SeriesType,
    pub total_episodes: u32,
    /// Minutes.
    pub estimated_duration: Option<u32>,
    pub status: ContentStatus,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContentSeriesRow {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub author_id: Uuid,
    pub series_type: SeriesType,
    pub total_episodes: u32,
    pub estimated_duration: Option<u32>,
    pub status: ContentStatus,
    pub published_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSeriesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<Timestamp>>,
    pub updated_at: Timestamp,
}

impl ContentSeriesRow {
    pub fn apply(&mut self, patch: ContentSeriesPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.series_type {
            self.series_type = v;
        }
        if let Some(v) = patch.total_episodes {
            self.total_episodes = v;
        }
        if let Some(v) = patch.estimated_duration {
            self.estimated_duration = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.published_at {
            self.published_at = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentSeriesResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author_id: Uuid,
    pub series_type: SeriesType,
    pub total_episodes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    pub status: ContentStatus,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateContentSeries {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub author_id: Uuid,
    #[serde(default)]
    pub series_type: SeriesType,
    #[serde(default)]
    pub total_episodes: u32,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentSeries {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub series_type: Option<SeriesType>,
    pub total_episodes: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_duration: Option<Option<u32>>,
    pub status: Option<ContentStatus>,
    #[serde(default, deserialize_with = "present")]
    pub published_at: Option<Option<String>>,
}
