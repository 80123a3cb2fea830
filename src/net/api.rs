//! REST API helpers for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function catches at its own boundary: transport failures, bodies
//! that fail to parse, and server rejections all come back as [`ApiError`]
//! values after a logged warning. Nothing here panics or throws past the
//! call site; callers decide between inline rendering and toasts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    CreateUserRequest, FileKey, FileRecord, ListFilesRequest, ModifyFileRequest, Page,
    RenameFileRequest, SessionUser, UserPatch, UserRecord,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{DirectoryKind, FileScope};

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint(kind: DirectoryKind) -> &'static str {
    match kind {
        DirectoryKind::Netlist => "administrator/netlist/upload/",
        DirectoryKind::Tech => "administrator/tech/upload/",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn modify_user_endpoint(id: i64) -> String {
    format!("/profile/modify/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn scope_wire(scope: FileScope) -> &'static str {
    match scope {
        FileScope::User => "USER",
        FileScope::Global => "GLOBAL",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn http_failed_message(status: u16) -> String {
    format!("server answered HTTP {status}")
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Parse a response body, preferring the JSON envelope even on error
/// statuses; an unparseable error status degrades to a transport failure.
#[cfg(feature = "hydrate")]
async fn decode_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if status >= 400 => Err(ApiError::Transport(http_failed_message(status))),
        Err(err) => Err(ApiError::Malformed(err.to_string())),
    }
}

#[cfg(feature = "hydrate")]
fn logged<T>(operation: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log::warn!("{operation} failed: {err}");
    }
    result
}

/// Fetch one page of files via `POST administrator/getlist/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, malformed bodies, or a
/// server rejection.
pub async fn list_files(request: &ListFilesRequest) -> Result<Page<FileRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post("administrator/getlist/")
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::ListFilesResponse = decode_response(resp).await?;
            body.envelope.into_result()?;
            Ok(Page {
                items: body.data,
                total: body.total,
            })
        }
        .await;
        logged("list files", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Fetch and decode a file's full content via `POST administrator/getdata/`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a body that is not valid base64 UTF-8 text
/// surfaces as [`ApiError::Malformed`].
pub async fn fetch_file_content(key: &FileKey) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post("administrator/getdata/")
                .json(key)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::FileDataResponse = decode_response(resp).await?;
            body.envelope.into_result()?;
            let encoded = body
                .data
                .ok_or_else(|| ApiError::Malformed("missing file content".to_owned()))?;
            crate::util::codec::decode_content(&encoded).map_err(ApiError::Malformed)
        }
        .await;
        logged("fetch file content", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Upload a design file via the kind-specific multipart endpoint.
///
/// The form carries the file part plus `FileType` and, for `USER` files,
/// the owning `Username`. Returns the server messages for toast display.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
#[cfg(feature = "hydrate")]
pub async fn upload_file(
    kind: DirectoryKind,
    scope: FileScope,
    username: Option<&str>,
    file: &web_sys::File,
) -> Result<Vec<String>, ApiError> {
    let result = async {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("could not build upload form".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
        let _ = form.append_with_str("FileType", scope_wire(scope));
        if let Some(owner) = username {
            let _ = form.append_with_str("Username", owner);
        }
        let resp = gloo_net::http::Request::post(upload_endpoint(kind))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let envelope: super::error::Envelope = decode_response(resp).await?;
        envelope.into_result()
    }
    .await;
    logged("upload file", result)
}

/// Replace a file's content via `PUT administrator/modify/file/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn modify_file(request: &ModifyFileRequest) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::put("administrator/modify/file/")
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("modify file", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Delete a file via `DELETE administrator/delete/file/`; the body carries
/// the identifying fields.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn delete_file(key: &FileKey) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::delete("administrator/delete/file/")
                .json(key)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("delete file", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Rename a file via `POST administrator/rename/file/`.
///
/// A duplicate name comes back as `{status_code: 400, message}`; the dialog
/// keys inline rendering off that code.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn rename_file(request: &RenameFileRequest) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post("administrator/rename/file/")
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("rename file", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Clone a file by id via `POST administrator/clone/file/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn clone_file(file_id: i64) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let payload = serde_json::json!({ "FileId": file_id });
            let resp = gloo_net::http::Request::post("administrator/clone/file/")
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("clone file", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file_id;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Validate netlist content before a modify is attempted.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with one message per violation when the
/// content fails validation.
pub async fn validate_netlist(content: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let payload = serde_json::json!({ "Content": content });
            let resp = gloo_net::http::Request::post("administrator/netlist/validate/")
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result().map(|_| ())
        }
        .await;
        logged("validate netlist", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Fetch one page of user accounts via `POST /profile/list/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn list_users(page: u32, page_size: u32) -> Result<Page<UserRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let payload = serde_json::json!({ "page": page, "page_size": page_size });
            let resp = gloo_net::http::Request::post("/profile/list/")
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::ListUsersResponse = decode_response(resp).await?;
            body.envelope.into_result()?;
            Ok(Page {
                items: body.data,
                total: body.total,
            })
        }
        .await;
        logged("list users", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, page_size);
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Retrieve a single user snapshot; same endpoint as the list, selected by
/// the `Id` payload shape.
///
/// # Errors
///
/// Returns an [`ApiError`]; a success envelope without a record surfaces as
/// [`ApiError::Malformed`].
pub async fn retrieve_user(id: i64) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let payload = serde_json::json!({ "Id": id });
            let resp = gloo_net::http::Request::post("/profile/list/")
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::RetrieveUserResponse = decode_response(resp).await?;
            body.envelope.into_result()?;
            body.data
                .ok_or_else(|| ApiError::Malformed("missing user record".to_owned()))
        }
        .await;
        logged("retrieve user", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Create a user account via `POST /profile/create/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn create_user(request: &CreateUserRequest) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post("/profile/create/")
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("create user", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Apply a partial update via `PATCH /profile/modify/:id/`. Soft delete,
/// restore, enable/disable, and reset-password are fixed patch shapes.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn update_user(id: i64, patch: &UserPatch) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::patch(&modify_user_endpoint(id))
                .json(patch)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let envelope: super::error::Envelope = decode_response(resp).await?;
            envelope.into_result()
        }
        .await;
        logged("update user", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Fetch the dynamic log-level options via `GET /profile/loglevels/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or server rejection.
pub async fn fetch_log_levels() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::get("/profile/loglevels/")
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::LogLevelsResponse = decode_response(resp).await?;
            body.envelope.into_result()?;
            Ok(body.data)
        }
        .await;
        logged("fetch log levels", result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Fetch the signed-in admin from `GET /profile/me/`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/profile/me/").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
