//! Google Drive adapter for the `FileDirectory` port.
//!
//! Wraps the async `google-drive3` hub behind a blocking facade; each call
//! runs to completion on an owned tokio runtime.

use google_drive3::api::Scope;
use google_drive3::hyper::client::HttpConnector;
use google_drive3::hyper_rustls::HttpsConnector;
use google_drive3::{hyper, hyper_rustls, oauth2, DriveHub};
use tokio::runtime::Runtime;

use crate::application::FileDirectory;
use crate::domain::{AppError, DriveConfig, Result, SharedFile};

/// Drive search query for files shared with the authenticated account.
const SHARED_QUERY: &str = "sharedWithMe";

/// Fields mask for the file listing; permissions carry the editor set.
const LIST_FIELDS: &str =
    "files(id,name,mimeType,webViewLink,owners(emailAddress),permissions(id,role,emailAddress))";

/// Blocking Drive client.
pub struct DriveDirectory {
    hub: DriveHub<HttpsConnector<HttpConnector>>,
    rt: Runtime,
}

impl DriveDirectory {
    /// Authenticate with the configured service-account key and connect.
    ///
    /// # Errors
    /// Returns error if the key file cannot be read or the authenticator
    /// cannot be built.
    pub fn connect(config: &DriveConfig) -> Result<Self> {
        let rt = Runtime::new().map_err(|e| AppError::io("Failed to start async runtime", e))?;
        let hub = rt.block_on(build_hub(config))?;

        Ok(Self { hub, rt })
    }
}

async fn build_hub(config: &DriveConfig) -> Result<DriveHub<HttpsConnector<HttpConnector>>> {
    let key = oauth2::read_service_account_key(&config.credentials)
        .await
        .map_err(|e| {
            AppError::io(
                format!(
                    "Failed to read service account key: {}",
                    config.credentials.display()
                ),
                e,
            )
        })?;

    let mut builder = oauth2::ServiceAccountAuthenticator::builder(key);
    if let Some(subject) = &config.impersonate {
        builder = builder.subject(subject.as_str());
    }
    let auth = builder
        .build()
        .await
        .map_err(|e| AppError::auth("Failed to build Drive authenticator", e))?;

    let client = hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .build(),
    );

    Ok(DriveHub::new(client, auth))
}

impl FileDirectory for DriveDirectory {
    fn active_user_email(&self) -> Result<String> {
        let (_, about) = self
            .rt
            .block_on(
                self.hub
                    .about()
                    .get()
                    .param("fields", "user(emailAddress)")
                    .add_scope(Scope::Full)
                    .doit(),
            )
            .map_err(AppError::directory)?;

        about
            .user
            .and_then(|user| user.email_address)
            .ok_or_else(|| AppError::Directory {
                message: "Drive did not report the active user email".into(),
                source: None,
            })
    }

    fn shared_with_me(&self) -> Result<Vec<SharedFile>> {
        self.rt.block_on(async {
            let fields = format!("nextPageToken,{LIST_FIELDS}");
            let mut files = Vec::new();
            let mut page_token: Option<String> = None;

            loop {
                let mut call = self
                    .hub
                    .files()
                    .list()
                    .q(SHARED_QUERY)
                    .param("fields", fields.as_str())
                    .add_scope(Scope::Full);
                if let Some(token) = &page_token {
                    call = call.page_token(token);
                }

                let (_, list) = call.doit().await.map_err(AppError::directory)?;
                files.extend(list.files.unwrap_or_default().into_iter().map(convert_file));

                page_token = list.next_page_token;
                if page_token.is_none() {
                    break;
                }
            }

            tracing::debug!(count = files.len(), "listed files shared with me");
            Ok(files)
        })
    }

    fn remove_editor(&self, file_id: &str, email: &str) -> Result<()> {
        self.rt.block_on(async {
            let (_, list) = self
                .hub
                .permissions()
                .list(file_id)
                .param("fields", "permissions(id,role,emailAddress)")
                .add_scope(Scope::Full)
                .doit()
                .await
                .map_err(AppError::directory)?;

            let permission = list
                .permissions
                .unwrap_or_default()
                .into_iter()
                .find(|p| {
                    p.role.as_deref() == Some("writer") && p.email_address.as_deref() == Some(email)
                })
                .ok_or_else(|| AppError::Directory {
                    message: format!("{email} holds no editor permission on file {file_id}"),
                    source: None,
                })?;

            let permission_id = permission.id.ok_or_else(|| AppError::Directory {
                message: format!("editor permission on file {file_id} has no id"),
                source: None,
            })?;

            self.hub
                .permissions()
                .delete(file_id, &permission_id)
                .add_scope(Scope::Full)
                .doit()
                .await
                .map_err(AppError::directory)?;

            Ok(())
        })
    }
}

/// Map a Drive file resource onto the domain view. Missing fields collapse
/// to empty strings; editors are the permission entries with role `writer`.
fn convert_file(file: google_drive3::api::File) -> SharedFile {
    let editors = file
        .permissions
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.role.as_deref() == Some("writer"))
        .filter_map(|p| p.email_address)
        .collect();

    SharedFile {
        id: file.id.unwrap_or_default(),
        name: file.name.unwrap_or_default(),
        mime_type: file.mime_type.unwrap_or_default(),
        owner_email: file
            .owners
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|owner| owner.email_address),
        url: file.web_view_link.unwrap_or_default(),
        editors,
    }
}
