//! Typed identifiers, enumerations and request payloads for the Filez API.

use serde::{Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::FilezError;

/// Namespace used when a caller does not name one.
pub const DEFAULT_NSID: u64 = 1;

/// Storage area used when a caller does not name one.
pub const DEFAULT_PATH_TYPE: PathType = PathType::Ent;

/// Which storage area a path refers to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum PathType {
    /// Enterprise (shared) space, `ent` on the wire
    #[serde(rename = "ent")]
    #[strum(serialize = "ent")]
    Ent,
    /// The authenticated user's personal space, `self` on the wire
    #[serde(rename = "self")]
    #[strum(serialize = "self")]
    SelfSpace,
}

impl PathType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn names() -> Vec<&'static str> {
        PathType::iter().map(PathType::as_str).collect()
    }

    /// Parse a wire name, reporting anything other than `ent` or `self` as
    /// a [`FilezError::ValidationError`].
    pub fn from_name(value: &str) -> Result<PathType, FilezError> {
        value.parse::<PathType>().map_err(|_| {
            FilezError::validation(format!(
                "path_type must be one of {:?}, got {:?}",
                PathType::names(),
                value
            ))
        })
    }
}

impl Default for PathType {
    fn default() -> Self {
        DEFAULT_PATH_TYPE
    }
}


/// Access level granted to a user on a file or folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Privilege {
    NoAccess = 1000,
    ListOnly = 1011,
    Edit = 2001,
    UploadDownload = 2003,
    Download = 2005,
    Upload = 2007,
    Preview = 2009,
}

impl Privilege {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn codes() -> Vec<u32> {
        Privilege::iter().map(Privilege::code).collect()
    }
}

impl TryFrom<u32> for Privilege {
    type Error = FilezError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Privilege::iter().find(|p| p.code() == code).ok_or_else(|| {
            FilezError::validation(format!(
                "privilege must be one of {:?}, got {}",
                Privilege::codes(),
                code
            ))
        })
    }
}

/// A file or folder entry: its id plus the namespace it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileRef {
    pub neid: u64,
    pub nsid: u64,
}

impl FileRef {
    /// Refer to `neid` in the default namespace.
    pub fn new(neid: u64) -> FileRef {
        FileRef {
            neid,
            nsid: DEFAULT_NSID,
        }
    }

    pub fn in_namespace(mut self, nsid: u64) -> FileRef {
        self.nsid = nsid;
        self
    }
}

impl From<u64> for FileRef {
    fn from(neid: u64) -> Self {
        FileRef::new(neid)
    }
}

/// Raw permission grant as supplied by a caller.
///
/// `privilege` is a numeric code and is checked against [`Privilege`]
/// before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionGrant {
    pub uid: u64,
    pub privilege: u32,
}

impl PermissionGrant {
    pub fn new(uid: u64, privilege: Privilege) -> PermissionGrant {
        PermissionGrant {
            uid,
            privilege: privilege.code(),
        }
    }
}

/// Account state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Frozen,
    Active,
}

impl UserStatus {
    pub fn code(self) -> i32 {
        match self {
            UserStatus::Frozen => -1,
            UserStatus::Active => 1,
        }
    }
}

impl Serialize for UserStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// A user account to create
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
    /// Storage quota in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    pub user_name: String,
    pub user_slug: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        user_name: impl Into<String>,
        user_slug: impl Into<String>,
    ) -> NewUser {
        NewUser {
            email: email.into(),
            mobile: None,
            password: password.into(),
            quota: None,
            status: None,
            user_name: user_name.into(),
            user_slug: user_slug.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), FilezError> {
        let required = [
            ("email", &self.email),
            ("password", &self.password),
            ("user_name", &self.user_name),
            ("user_slug", &self.user_slug),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(FilezError::validation(format!("{} must not be empty", name))),
            None => Ok(()),
        }
    }
}

// Form bodies sent as application/x-www-form-urlencoded

#[derive(Debug, Serialize)]
pub(crate) struct TokenForm<'a> {
    pub grant_type: &'a str,
    pub scope: &'a str,
    pub slug: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct FileListForm<'a> {
    pub path: &'a str,
    pub path_type: PathType,
    pub page_num: u32,
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct PathForm<'a> {
    pub path: &'a str,
    pub path_type: PathType,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransferForm<'a> {
    pub nsid: u64,
    pub from_neid: u64,
    pub to_path: &'a str,
    pub to_path_type: PathType,
}

#[derive(Debug, Serialize)]
pub(crate) struct RenameForm<'a> {
    pub nsid: u64,
    pub from_neid: u64,
    pub to_file_name: &'a str,
}

/// Body shared by the permission endpoints; the list fields carry JSON text.
#[derive(Debug, Serialize)]
pub(crate) struct PermissionForm {
    pub nsid: u64,
    pub path_type: PathType,
    pub file_list: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_list: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FileListEntry {
    pub neid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthEntry {
    pub agent_id: u64,
    pub agent_type: &'static str,
    pub is_subteam_inheritable: bool,
    pub privilege_type: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AgentEntry {
    pub agent_id: u64,
    pub agent_type: &'static str,
}

pub(crate) const AGENT_TYPE_USER: &str = "user";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_type_parsing() {
        assert_eq!(PathType::from_name("ent").unwrap(), PathType::Ent);
        assert_eq!(PathType::from_name("self").unwrap(), PathType::SelfSpace);
        assert!(matches!(
            PathType::from_name("team"),
            Err(FilezError::ValidationError(_))
        ));
        assert!(PathType::from_name("ENT").is_err());
        assert_eq!(PathType::default(), PathType::Ent);
    }

    #[test]
    fn test_path_type_text_forms_match_the_wire() {
        assert_eq!(PathType::names(), vec!["ent", "self"]);
        assert_eq!(PathType::SelfSpace.to_string(), "self");
        assert_eq!(PathType::SelfSpace.as_ref(), "self");
        assert_eq!(
            serde_urlencoded::to_string([("path_type", PathType::SelfSpace)]).unwrap(),
            "path_type=self"
        );
    }

    #[test]
    fn test_privilege_codes() {
        assert_eq!(
            Privilege::codes(),
            vec![1000, 1011, 2001, 2003, 2005, 2007, 2009]
        );
        assert_eq!(Privilege::try_from(2009).unwrap(), Privilege::Preview);
        assert!(matches!(
            Privilege::try_from(2000),
            Err(FilezError::ValidationError(_))
        ));
        assert_eq!("upload-download".parse::<Privilege>().unwrap(), Privilege::UploadDownload);
        assert_eq!(Privilege::ListOnly.to_string(), "list-only");
    }

    #[test]
    fn test_file_ref_defaults_to_default_namespace() {
        let file = FileRef::new(42);
        assert_eq!(file.nsid, DEFAULT_NSID);
        assert_eq!(file.in_namespace(7).nsid, 7);
        assert_eq!(FileRef::from(42), file);
    }

    #[test]
    fn test_new_user_form_skips_absent_fields() {
        let mut user = NewUser::new("u@example.com", "secret", "user025", "user025");
        assert_eq!(
            serde_urlencoded::to_string(&user).unwrap(),
            "email=u%40example.com&password=secret&user_name=user025&user_slug=user025"
        );

        user.status = Some(UserStatus::Frozen);
        user.quota = Some(1024);
        let encoded = serde_urlencoded::to_string(&user).unwrap();
        assert!(encoded.contains("quota=1024"));
        assert!(encoded.contains("status=-1"));
    }

    #[test]
    fn test_new_user_requires_identity_fields() {
        let user = NewUser::new("u@example.com", "secret", "", "user025");
        assert!(matches!(user.validate(), Err(FilezError::ValidationError(_))));
    }

    #[test]
    fn test_auth_entry_wire_names() {
        let entry = AuthEntry {
            agent_id: 82,
            agent_type: AGENT_TYPE_USER,
            is_subteam_inheritable: true,
            privilege_type: 2009,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"agentId":82,"agentType":"user","isSubteamInheritable":true,"privilegeType":2009}"#
        );
    }
}
