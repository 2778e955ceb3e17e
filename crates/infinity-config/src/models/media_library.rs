//! Media library entries and playlists.

use infinity_core::{InfinityTime, Nullable};
use serde::{Deserialize, Serialize};

use crate::resource::collection;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLibraryEntry {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub file_name: String,
    pub media_type: String,
    pub media_format: String,
    pub media_size: u64,
    pub media_duration: f64,
    pub media_file: String,
    #[serde(deserialize_with = "super::optional_time")]
    pub upload_time: Option<InfinityTime>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryEntryCreate {
    pub name: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Base64 encoded media content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

collection!(
    MediaLibraryEntry => "media_library_entry",
    create: MediaLibraryEntryCreate as Location,
    update: MediaLibraryEntryUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLibraryPlaylist {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "loop")]
    pub loop_playback: Option<bool>,
    pub shuffle: Option<bool>,
    pub playlist_entries: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryPlaylistCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_playback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryPlaylistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "loop", default, skip_serializing_if = "Nullable::is_unset")]
    pub loop_playback: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub shuffle: Nullable<bool>,
}

collection!(
    MediaLibraryPlaylist => "media_library_playlist",
    create: MediaLibraryPlaylistCreate as Location,
    update: MediaLibraryPlaylistUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLibraryPlaylistEntry {
    pub id: u64,
    /// `media` or `playlist`.
    pub entry_type: String,
    pub media: Option<String>,
    pub playlist: String,
    pub position: u32,
    pub playcount: u32,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryPlaylistEntryCreate {
    pub playlist: String,
    pub position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLibraryPlaylistEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub media: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u32>,
}

collection!(
    MediaLibraryPlaylistEntry => "media_library_playlist_entry",
    create: MediaLibraryPlaylistEntryCreate as Location,
    update: MediaLibraryPlaylistEntryUpdate
);
