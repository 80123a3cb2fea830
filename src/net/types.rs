//! Wire DTOs for the admin REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server payloads (`FileId`, `IsAdmin`, ...) so
//! serde round-trips stay lossless; lenient deserializers absorb the
//! backend's number quirks at this boundary only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::Envelope;

/// Ownership scope of a managed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileScope {
    /// Owned by one account.
    #[serde(rename = "USER")]
    User,
    /// Shared across all accounts.
    #[serde(rename = "GLOBAL")]
    Global,
}

/// Which server-side directory a files grid shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    #[default]
    Netlist,
    Tech,
}

impl DirectoryKind {
    /// Heading used in page chrome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Netlist => "Netlist Files",
            Self::Tech => "Tech Files",
        }
    }
}

/// A managed file row as returned by `administrator/getlist/`.
///
/// `Content` is not part of the row; it is fetched on demand through
/// `administrator/getdata/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "FileId", deserialize_with = "deserialize_i64_from_number")]
    pub file_id: i64,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileType")]
    pub file_type: FileScope,
    /// Owning account; present only for `USER` files.
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
    #[serde(rename = "TimeStamp", default)]
    pub time_stamp: Option<String>,
    /// Per-row capability flags; a missing flag means the action is allowed.
    #[serde(default = "default_true")]
    pub can_edit: bool,
    #[serde(default = "default_true")]
    pub can_delete: bool,
}

/// A user account row as returned by `/profile/list/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "IsAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "IsActive", default = "default_true")]
    pub is_active: bool,
    /// Soft-delete flag; a deleted row is restorable.
    #[serde(rename = "IsDeleted", default)]
    pub is_deleted: bool,
    #[serde(rename = "LogLevel", default)]
    pub log_level: Option<String>,
    #[serde(default = "default_true")]
    pub can_edit: bool,
    #[serde(default = "default_true")]
    pub can_delete: bool,
    #[serde(default = "default_true")]
    pub can_disable: bool,
}

/// The authenticated admin session, fetched once at mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "Id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "IsAdmin", default)]
    pub is_admin: bool,
}

/// One page of rows plus the server-side total count.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Body of `POST administrator/getlist/`.
#[derive(Clone, Debug, Serialize)]
pub struct ListFilesRequest {
    #[serde(rename = "DirectoryType")]
    pub directory: DirectoryKind,
    pub page: u32,
    pub page_size: u32,
}

/// Identifying fields carried by delete, content, rename, and modify bodies.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileKey {
    #[serde(rename = "FileId")]
    pub file_id: i64,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileType")]
    pub file_type: FileScope,
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl FileKey {
    /// Identifying fields of a listed row.
    pub fn of(record: &FileRecord) -> Self {
        Self {
            file_id: record.file_id,
            file_name: record.file_name.clone(),
            file_type: record.file_type,
            username: record.username.clone(),
        }
    }
}

/// Body of `PUT administrator/modify/file/`; content is base64.
#[derive(Clone, Debug, Serialize)]
pub struct ModifyFileRequest {
    #[serde(flatten)]
    pub key: FileKey,
    #[serde(rename = "Content")]
    pub content: String,
}

/// Body of `POST administrator/rename/file/`.
#[derive(Clone, Debug, Serialize)]
pub struct RenameFileRequest {
    #[serde(flatten)]
    pub key: FileKey,
    #[serde(rename = "NewFileName")]
    pub new_file_name: String,
}

/// Body of `POST /profile/create/`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateUserRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "IsAdmin")]
    pub is_admin: bool,
    #[serde(rename = "LogLevel", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Partial-field body of `PATCH /profile/modify/:id/`.
///
/// Only changed fields serialize; an all-`None` patch means the edit form
/// matched its snapshot and no request should be sent. The toggle-active,
/// soft-delete, restore, and reset-password actions are fixed shapes of
/// this same body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "IsAdmin", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(rename = "LogLevel", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(rename = "IsActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "IsDeleted", skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(rename = "ResetPassword", skip_serializing_if = "Option::is_none")]
    pub reset_password: Option<bool>,
}

impl UserPatch {
    /// True when no field would be serialized.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Payload shape for enabling or disabling login.
    pub fn set_active(active: bool) -> Self {
        Self {
            is_active: Some(active),
            ..Self::default()
        }
    }

    /// Payload shape for soft delete (`true`) and restore (`false`).
    pub fn set_deleted(deleted: bool) -> Self {
        Self {
            is_deleted: Some(deleted),
            ..Self::default()
        }
    }

    /// Payload shape for a password reset.
    pub fn password_reset() -> Self {
        Self {
            reset_password: Some(true),
            ..Self::default()
        }
    }
}

/// Response of `administrator/getlist/`.
#[derive(Clone, Debug, Deserialize)]
pub struct ListFilesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<FileRecord>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: i64,
}

/// Response of `administrator/getdata/`; `data` is base64 file content.
#[derive(Clone, Debug, Deserialize)]
pub struct FileDataResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<String>,
}

/// Response of the paginated `/profile/list/` shape.
#[derive(Clone, Debug, Deserialize)]
pub struct ListUsersResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<UserRecord>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: i64,
}

/// Response of the single-user `/profile/list/` shape.
#[derive(Clone, Debug, Deserialize)]
pub struct RetrieveUserResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<UserRecord>,
}

/// Response of `/profile/loglevels/`.
#[derive(Clone, Debug, Deserialize)]
pub struct LogLevelsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Accept integers and integer-valued floats; reject everything else.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_as_i64(&value).ok_or_else(|| D::Error::custom("expected integer-compatible number"))
}

/// Like `deserialize_i64_from_number`, with null and absent mapping to zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    number_as_i64(&value).ok_or_else(|| D::Error::custom("expected integer-compatible count"))
}

fn number_as_i64(value: &serde_json::Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some(float as i64);
    }
    None
}
