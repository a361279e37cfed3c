use jiff::Timestamp;

use super::patch_timestamp;
use crate::error::CoreError;
use crate::format::{format_duration, parse_optional_timestamp, to_iso};
use crate::models::content::{
    AuthorSummary, ContentCategoryPatch, ContentCategoryResponse, ContentCategoryRow,
    ContentItemPatch, ContentItemRelations, ContentItemResponse, ContentItemRow, ContentSeriesPatch,
    ContentSeriesResponse, ContentSeriesRow, ContentStatus, CreateContentCategory,
    CreateContentItem, CreateContentSeries, NewContentCategoryRow, NewContentItemRow,
    NewContentSeriesRow, UpdateContentCategory, UpdateContentItem, UpdateContentSeries,
};

pub fn to_content_item_response(
    row: &ContentItemRow,
    relations: ContentItemRelations,
) -> ContentItemResponse {
    ContentItemResponse {
        id: row.id,
        title: row.title.clone(),
        slug: row.slug.clone(),
        excerpt: row.excerpt.clone(),
        content: row.content.clone(),
        author_id: row.author_id,
        category_id: row.category_id,
        content_type: row.content_type,
        status: row.status,
        visibility: row.visibility,
        featured_image_url: row.featured_image_url.clone(),
        tags: row.tags.clone().unwrap_or_default(),
        theological_themes: row.theological_themes.clone().unwrap_or_default(),
        series_id: row.series_id,
        series_order: row.series_order,
        reading_time: row.reading_time,
        reading_time_text: format_duration(row.reading_time),
        view_count: row.view_count,
        like_count: row.like_count,
        share_count: row.share_count,
        is_published: row.status == ContentStatus::Published,
        published_at: row.published_at.as_ref().map(to_iso),
        scheduled_at: row.scheduled_at.as_ref().map(to_iso),
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
        author: relations.author,
        category: relations.category,
        series: relations.series,
    }
}

pub fn from_create_content_item(input: CreateContentItem) -> Result<NewContentItemRow, CoreError> {
    Ok(NewContentItemRow {
        title: input.title,
        slug: input.slug,
        excerpt: input.excerpt,
        content: input.content,
        author_id: input.author_id,
        category_id: input.category_id,
        content_type: input.content_type,
        status: input.status,
        visibility: input.visibility,
        featured_image_url: input.featured_image_url,
        tags: input.tags,
        theological_themes: input.theological_themes,
        series_id: input.series_id,
        series_order: input.series_order,
        reading_time: input.reading_time,
        published_at: parse_optional_timestamp("published_at", input.published_at.as_deref())?,
        scheduled_at: parse_optional_timestamp("scheduled_at", input.scheduled_at.as_deref())?,
    })
}

pub fn from_update_content_item(input: UpdateContentItem) -> Result<ContentItemPatch, CoreError> {
    Ok(ContentItemPatch {
        title: input.title,
        slug: input.slug,
        excerpt: input.excerpt,
        content: input.content,
        category_id: input.category_id,
        content_type: input.content_type,
        status: input.status,
        visibility: input.visibility,
        featured_image_url: input.featured_image_url,
        tags: input.tags,
        theological_themes: input.theological_themes,
        series_id: input.series_id,
        series_order: input.series_order,
        reading_time: input.reading_time,
        published_at: patch_timestamp("published_at", input.published_at)?,
        scheduled_at: patch_timestamp("scheduled_at", input.scheduled_at)?,
        updated_at: Timestamp::now(),
    })
}

pub fn to_category_response(row: &ContentCategoryRow) -> ContentCategoryResponse {
    ContentCategoryResponse {
        id: row.id,
        name: row.name.clone(),
        slug: row.slug.clone(),
        description: row.description.clone(),
        parent_id: row.parent_id,
        order_index: row.order_index,
        theological_focus: row.theological_focus.clone().unwrap_or_default(),
        is_top_level: row.parent_id.is_none(),
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
    }
}

pub fn from_create_category(input: CreateContentCategory) -> NewContentCategoryRow {
    NewContentCategoryRow {
        name: input.name,
        slug: input.slug,
        description: input.description,
        parent_id: input.parent_id,
        order_index: input.order_index,
        theological_focus: input.theological_focus,
    }
}

pub fn from_update_category(input: UpdateContentCategory) -> ContentCategoryPatch {
    ContentCategoryPatch {
        name: input.name,
        slug: input.slug,
        description: input.description,
        parent_id: input.parent_id,
        order_index: input.order_index,
        theological_focus: input.theological_focus,
        updated_at: Timestamp::now(),
    }
}

pub fn to_series_response(
    row: &ContentSeriesRow,
    author: Option<AuthorSummary>,
) -> ContentSeriesResponse {
    ContentSeriesResponse {
        id: row.id,
        title: row.title.clone(),
        slug: row.slug.clone(),
        description: row.description.clone(),
        author_id: row.author_id,
        series_type: row.series_type,
        total_episodes: row.total_episodes,
        estimated_duration: row.estimated_duration,
        duration_text: format_duration(row.estimated_duration),
        status: row.status,
        is_published: row.status == ContentStatus::Published,
        published_at: row.published_at.as_ref().map(to_iso),
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
        author,
    }
}

pub fn from_create_series(input: CreateContentSeries) -> Result<NewContentSeriesRow, CoreError> {
    Ok(NewContentSeriesRow {
        title: input.title,
        slug: input.slug,
        description: input.description,
        author_id: input.author_id,
        series_type: input.series_type,
        total_episodes: input.total_episodes,
        estimated_duration: input.estimated_duration,
        status: input.status,
        published_at: parse_optional_timestamp("published_at", input.published_at.as_deref())?,
    })
}

pub fn from_update_series(input: UpdateContentSeries) -> Result<ContentSeriesPatch, CoreError> {
    Ok(ContentSeriesPatch {
        title: input.title,
        slug: input.slug,
        description: input.description,
        series_type: input.series_type,
        total_episodes: input.total_episodes,
        estimated_duration: input.estimated_duration,
        status: input.status,
        published_at: patch_timestamp("published_at", input.published_at)?,
        updated_at: Timestamp::now(),
    })
}
