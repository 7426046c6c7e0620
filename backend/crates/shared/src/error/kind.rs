//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー分類
///
/// このサービスが返しうる HTTP ステータスコードへの対応付けです。
/// 上流 HTTP 依存（ID プロバイダ、課金 API、画像ホスト）の失敗は
/// 502/503/408 系に、入力や認証の問題は 4xx 系に分類されます。
///
/// ## Notes
/// * `non_exhaustive` - 分類は必要になった時点で追加する
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unauthorized;
/// assert_eq!(kind.status_code(), 401);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - リクエスト自体が不正
    BadRequest,
    /// 401 - 有効なセッションがない
    Unauthorized,
    /// 403 - 認証済みでも許可されない操作
    Forbidden,
    /// 404 - 対象が存在しない
    NotFound,
    /// 408 - 上流呼び出しのタイムアウト
    RequestTimeout,
    /// 422 - 形式は正しいが内容を処理できない
    UnprocessableEntity,
    /// 500 - サーバー内部の不整合
    InternalServerError,
    /// 502 - 上流サービスの応答が不正
    BadGateway,
    /// 503 - 上流サービスに到達できない
    ServiceUnavailable,
}

impl ErrorKind {
    /// 対応する HTTP ステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP 標準の理由フレーズ
    ///
    /// RFC 7807 レスポンスの `title` にそのまま使われます。
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx 系（ログに残すべきエラー）かどうか
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx 系かどうか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
