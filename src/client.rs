//! The Filez session client.
//!
//! [`FilezClient`] holds the service credentials and, once [`FilezClient::token`]
//! has succeeded, a bearer token. Every other operation checks for the token
//! first and fails with [`FilezError::NotAuthenticated`] without touching the
//! network when it is absent.
//!
//! # Example
//! ```ignore
//! use filez::{client::FilezClient, configuration::Configuration, model::FileRef};
//!
//! let configuration = Configuration::new("app-key", "app-secret", "filez.example.com:3333")?;
//! let mut client = FilezClient::new(configuration)?;
//! client.token("admin").await?;
//!
//! let listing = client.file_list("/projects", None, 0, 50).await?;
//! let history = client.file_history(FileRef::new(1605395663741259776)).await?;
//! ```

use base64::{engine::general_purpose, Engine};
use reqwest::{
    header::{AUTHORIZATION, CACHE_CONTROL},
    multipart::{Form, Part},
    Method, RequestBuilder,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, trace};

use crate::{
    configuration::Configuration,
    error::FilezError,
    http_utils::HttpClient,
    model::{
        AgentEntry, AuthEntry, FileListEntry, FileListForm, FileRef, NewUser, PathForm, PathType,
        PermissionForm, PermissionGrant, Privilege, RenameForm, TokenForm, TransferForm,
        AGENT_TYPE_USER,
    },
};

const GRANT_TYPE: &str = "client_with_su";
const TOKEN_SCOPE: &str = "all";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Client for one Filez deployment
pub struct FilezClient {
    configuration: Configuration,
    http: HttpClient,
    access_token: Option<String>,
}

impl FilezClient {
    pub fn new(configuration: Configuration) -> Result<Self, FilezError> {
        let http = HttpClient::new(&configuration)?;
        Ok(Self {
            configuration,
            http,
            access_token: None,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Exchange the application credentials for a token acting as `subject`.
    ///
    /// On success the client is authenticated for the rest of its lifetime;
    /// calling this again replaces the held token.
    pub async fn token(&mut self, subject: &str) -> Result<(), FilezError> {
        if subject.is_empty() {
            return Err(FilezError::validation("subject must not be empty"));
        }
        debug!("Requesting access token for subject {}", subject);

        let credentials = format!(
            "{}:{}",
            self.configuration.app_key(),
            self.configuration.app_secret()
        );
        let encoded_credentials = general_purpose::STANDARD.encode(credentials);

        let url = self.http.url("/oauth/token", &[])?;
        let request = self
            .http
            .request(Method::POST, url)
            .header(AUTHORIZATION, format!("Basic {}", encoded_credentials))
            .header(CACHE_CONTROL, "no-cache")
            .form(&TokenForm {
                grant_type: GRANT_TYPE,
                scope: TOKEN_SCOPE,
                slug: subject,
            });

        let response = self.http.send(request).await?;
        let text = response
            .text()
            .await
            .map_err(crate::http_utils::classify_transport_error)?;

        let token = serde_json::from_str::<TokenResponse>(&text)
            .map_err(|e| FilezError::AuthError(format!("unreadable token response: {}", e)))?
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                FilezError::AuthError("token response has no access_token".to_string())
            })?;

        debug!("Authentication successful, received token");
        self.access_token = Some(token);
        Ok(())
    }

    fn bearer(&self) -> Result<&str, FilezError> {
        self.access_token
            .as_deref()
            .ok_or(FilezError::NotAuthenticated)
    }

    /// Build an authorized request. Fails before any I/O when no token is held.
    fn authorized(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<RequestBuilder, FilezError> {
        let token = self.bearer()?;
        let url = self.http.url(path, query)?;
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token)))
    }

    // ---------------------------------------------------------------- users

    /// Create a user account.
    pub async fn user_create(&self, user: &NewUser) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/user", &[])?;
        user.validate()?;
        self.http.send_json(request.form(user)).await
    }

    /// Look a user up by numeric id or by slug; exactly one must be given.
    pub async fn user_info(
        &self,
        uid: Option<u64>,
        user_slug: Option<&str>,
    ) -> Result<Value, FilezError> {
        self.bearer()?;
        let request = match (uid, present(user_slug)) {
            (Some(uid), None) => {
                self.authorized(Method::GET, &format!("/api/user/{}", uid), &[])?
            }
            (None, Some(slug)) => self.authorized(
                Method::GET,
                "/api/user/slug",
                &[("user_slug", slug.to_string())],
            )?,
            (None, None) => {
                return Err(FilezError::validation(
                    "one of uid or user_slug is required",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(FilezError::validation(
                    "uid and user_slug are mutually exclusive",
                ))
            }
        };
        self.http.send_json(request).await
    }

    pub async fn user_list(&self, page_num: u32, page_size: u32) -> Result<Value, FilezError> {
        let request = self.authorized(Method::GET, "/api/user", &paging(page_num, page_size))?;
        self.http.send_json(request).await
    }

    // ---------------------------------------------------------------- teams

    pub async fn team_list(&self) -> Result<Value, FilezError> {
        let request = self.authorized(Method::GET, "/api/team", &[])?;
        self.http.send_json(request).await
    }

    pub async fn team_info(&self, tid: u64) -> Result<Value, FilezError> {
        let request = self.authorized(Method::GET, &format!("/api/team/{}", tid), &[])?;
        self.http.send_json(request).await
    }

    pub async fn team_user_list(
        &self,
        tid: u64,
        page_num: u32,
        page_size: u32,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(
            Method::GET,
            &format!("/api/teamuser/{}/users", tid),
            &paging(page_num, page_size),
        )?;
        self.http.send_json(request).await
    }

    // ---------------------------------------------------------------- files

    /// List one page of the folder at `path`.
    pub async fn file_list(
        &self,
        path: &str,
        path_type: Option<PathType>,
        page_num: u32,
        page_size: u32,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/file", &[])?;
        let form = FileListForm {
            path,
            path_type: path_type.unwrap_or_default(),
            page_num,
            page_size,
        };
        self.http.send_json(request.form(&form)).await
    }

    /// Metadata of an entry, looked up by id or, failing that, by path in
    /// the enterprise space.
    pub async fn file_info(
        &self,
        file: Option<FileRef>,
        path: Option<&str>,
    ) -> Result<Value, FilezError> {
        self.bearer()?;
        let request = match (file, present(path)) {
            (Some(file), _) => self.authorized(
                Method::GET,
                &format!("/api/file/{}/", file.neid),
                &[("nsid", file.nsid.to_string())],
            )?,
            (None, Some(path)) => self
                .authorized(Method::POST, "/api/file/path", &[])?
                .form(&PathForm {
                    path,
                    path_type: PathType::Ent,
                }),
            (None, None) => {
                return Err(FilezError::validation("one of neid or path is required"))
            }
        };
        self.http.send_json(request).await
    }

    pub async fn file_delete(&self, file: FileRef) -> Result<Value, FilezError> {
        let request = self.authorized(
            Method::DELETE,
            &format!("/api/file/{}", file.neid),
            &[("nsid", file.nsid.to_string())],
        )?;
        self.http.send_json(request).await
    }

    pub async fn create_folder(
        &self,
        path: &str,
        path_type: Option<PathType>,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/file/folder", &[])?;
        let form = PathForm {
            path,
            path_type: path_type.unwrap_or_default(),
        };
        self.http.send_json(request.form(&form)).await
    }

    pub async fn file_copy(
        &self,
        from: FileRef,
        to_path: &str,
        to_path_type: Option<PathType>,
    ) -> Result<Value, FilezError> {
        self.transfer("/api/file/copy", from, to_path, to_path_type)
            .await
    }

    pub async fn file_move(
        &self,
        from: FileRef,
        to_path: &str,
        to_path_type: Option<PathType>,
    ) -> Result<Value, FilezError> {
        self.transfer("/api/file/move", from, to_path, to_path_type)
            .await
    }

    async fn transfer(
        &self,
        endpoint: &str,
        from: FileRef,
        to_path: &str,
        to_path_type: Option<PathType>,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, endpoint, &[])?;
        let form = TransferForm {
            nsid: from.nsid,
            from_neid: from.neid,
            to_path,
            to_path_type: to_path_type.unwrap_or_default(),
        };
        self.http.send_json(request.form(&form)).await
    }

    /// Upload a local file to `to_path`. The whole file is read into memory.
    pub async fn file_upload(
        &self,
        source: &Path,
        to_path: &str,
        path_type: Option<PathType>,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/file/content", &[])?;

        if !source.is_file() {
            return Err(FilezError::validation(format!(
                "file {} does not exist",
                source.display()
            )));
        }
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                FilezError::validation(format!("{} has no file name", source.display()))
            })?;
        let data = tokio::fs::read(source).await?;
        debug!("Uploading {} ({} bytes) to {}", file_name, data.len(), to_path);

        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime::APPLICATION_OCTET_STREAM.as_ref())
            .map_err(|e| FilezError::UnknownError(e.to_string()))?;
        let form = Form::new()
            .part("filedata", part)
            .text("path_type", path_type.unwrap_or_default().as_str())
            .text("path", to_path.to_string());

        self.http.send_json(request.multipart(form)).await
    }

    pub async fn file_rename(
        &self,
        file: FileRef,
        to_file_name: &str,
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/file/rename", &[])?;
        let form = RenameForm {
            nsid: file.nsid,
            from_neid: file.neid,
            to_file_name,
        };
        self.http.send_json(request.form(&form)).await
    }

    /// Revision history of a file.
    pub async fn file_history(&self, file: FileRef) -> Result<Value, FilezError> {
        let request = self.authorized(
            Method::GET,
            &format!("/api/file/{}/revision", file.neid),
            &[("nsid", file.nsid.to_string())],
        )?;
        self.http.send_json(request).await
    }

    /// Preview URL of a file, under `previewUrl` in the response.
    pub async fn file_preview(&self, file: FileRef) -> Result<Value, FilezError> {
        let request = self.authorized(
            Method::GET,
            &format!("/api/preview/{}", file.neid),
            &[("nsid", file.nsid.to_string())],
        )?;
        self.http.send_json(request).await
    }

    /// Content of a file as raw bytes.
    pub async fn file_download(&self, file: FileRef) -> Result<Vec<u8>, FilezError> {
        let request = self.authorized(
            Method::GET,
            "/api/file/content/download",
            &[
                ("neid", file.neid.to_string()),
                ("nsid", file.nsid.to_string()),
            ],
        )?;
        self.http.send_bytes(request).await
    }

    /// Download a file and write it to `destination`, returning the number
    /// of bytes written.
    pub async fn file_download_to(
        &self,
        file: FileRef,
        destination: &Path,
    ) -> Result<u64, FilezError> {
        let content = self.file_download(file).await?;
        tokio::fs::write(destination, &content).await?;
        debug!(
            "Saved {} bytes to {}",
            content.len(),
            destination.display()
        );
        Ok(content.len() as u64)
    }

    // ---------------------------------------------------------- permissions

    /// Grant users access to an entry. Keep batches small; the service
    /// limits the request length.
    pub async fn auth_create(
        &self,
        file: FileRef,
        path_type: PathType,
        grants: &[PermissionGrant],
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/auth/batch_create", &[])?;
        if grants.is_empty() {
            return Err(FilezError::validation("at least one grant is required"));
        }

        let auth_list = grants
            .iter()
            .map(|grant| {
                Privilege::try_from(grant.privilege).map(|privilege| AuthEntry {
                    agent_id: grant.uid,
                    agent_type: AGENT_TYPE_USER,
                    is_subteam_inheritable: true,
                    privilege_type: privilege.code(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let form = PermissionForm {
            nsid: file.nsid,
            path_type,
            file_list: file_list_json(file)?,
            auth_list: Some(to_json(&auth_list)?),
            delete_list: None,
        };
        trace!("Granting {} permission(s) on {}", auth_list.len(), file.neid);
        self.http.send_json(request.form(&form)).await
    }

    /// Revoke the permissions `uids` hold on an entry.
    pub async fn auth_delete(
        &self,
        file: FileRef,
        path_type: PathType,
        uids: &[u64],
    ) -> Result<Value, FilezError> {
        let request = self.authorized(Method::DELETE, "/api/auth/batch_delete", &[])?;
        if uids.is_empty() {
            return Err(FilezError::validation("at least one uid is required"));
        }

        let delete_list: Vec<AgentEntry> = uids
            .iter()
            .map(|uid| AgentEntry {
                agent_id: *uid,
                agent_type: AGENT_TYPE_USER,
            })
            .collect();

        let form = PermissionForm {
            nsid: file.nsid,
            path_type,
            file_list: file_list_json(file)?,
            auth_list: None,
            delete_list: Some(to_json(&delete_list)?),
        };
        self.http.send_json(request.form(&form)).await
    }

    /// Permissions currently set on an entry.
    pub async fn auth_list(&self, file: FileRef, path_type: PathType) -> Result<Value, FilezError> {
        let request = self.authorized(Method::POST, "/api/auth/list", &[])?;
        let form = PermissionForm {
            nsid: file.nsid,
            path_type,
            file_list: file_list_json(file)?,
            auth_list: None,
            delete_list: None,
        };
        self.http.send_json(request.form(&form)).await
    }
}

// Blank identifiers count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn paging(page_num: u32, page_size: u32) -> [(&'static str, String); 2] {
    [
        ("page_num", page_num.to_string()),
        ("page_size", page_size.to_string()),
    ]
}

// The service expects ids inside file_list as strings.
fn file_list_json(file: FileRef) -> Result<String, FilezError> {
    to_json(&[FileListEntry {
        neid: file.neid.to_string(),
    }])
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, FilezError> {
    serde_json::to_string(value).map_err(|e| FilezError::UnknownError(e.to_string()))
}
