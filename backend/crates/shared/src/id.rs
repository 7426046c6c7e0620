//! Common ID Types
//!
//! UUID-backed identifiers with a phantom marker per entity, so a
//! session ID and a billing account ID cannot be swapped by accident.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// 型付き ID ラッパー
///
/// ## Examples
/// ```
/// use kernel::id::{AccountId, SessionId};
///
/// let session_id = SessionId::new();
/// let account_id = AccountId::new();
/// // session_id = account_id;  // コンパイルエラー: マーカー型が異なる
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// ランダムな ID を採番（UUID v4）
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// 既存の UUID を包む（外部サービスが採番した ID 用）
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// 中身の UUID への参照
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// 中身の UUID を取り出す
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// エンティティごとのマーカー型
pub mod markers {
    /// ID プロバイダ側セッションの ID
    pub struct Session;

    /// 課金サービス側アカウントの ID
    pub struct Account;
}

pub type SessionId = Id<markers::Session>;
pub type AccountId = Id<markers::Account>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_external_uuid_unchanged() {
        let uuid = Uuid::new_v4();
        let id: SessionId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.into_uuid(), uuid);
    }

    #[test]
    fn test_display_is_plain_uuid() {
        let uuid = Uuid::new_v4();
        let id: AccountId = uuid.into();
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(format!("{:?}", id), format!("Id({})", uuid));
    }

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
