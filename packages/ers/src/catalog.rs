//! Catalog of canonical classifications
//!
//! Entries are process-wide, initialized on first use and never mutated.
//! Raise occurrences from them:
//!
//! ```rust
//! use ers::catalog::NOT_FOUND;
//! use ers::Code;
//!
//! let err = NOT_FOUND.raise("user 42");
//! assert_eq!(err.code(), Code::NotFound);
//! assert!(err.is(&*NOT_FOUND));
//! ```
//!
//! The canned message table used for status-only causes is generated from
//! the same definitions, so each message appears exactly once.

use crate::code::Code;
use crate::error::Error;
use once_cell::sync::Lazy;

/// Sentinel classification of wrap envelopes
pub static WRAP: Lazy<Error> = Lazy::new(|| Error::new(Code::Wrap, "", ""));

macro_rules! catalog {
    ($( $(#[$doc:meta])* $name:ident => $code:ident, $message:literal; )*) => {
        $(
            $(#[$doc])*
            pub static $name: Lazy<Error> =
                Lazy::new(|| Error::new(Code::$code, stringify!($code), $message));
        )*

        /// Canned message of the catalog entry for `code`, `""` for the sentinel
        #[must_use]
        pub fn canned_message(code: Code) -> &'static str {
            match code {
                $( Code::$code => $message, )*
                Code::Wrap => "",
            }
        }

        /// Catalog entry for `code`, `None` for the sentinel
        #[must_use]
        pub fn lookup(code: Code) -> Option<&'static Error> {
            match code {
                $( Code::$code => Some(&*$name), )*
                Code::Wrap => None,
            }
        }
    };
}

catalog! {
    /// HTTP 499, gRPC 1
    CANCELED => Canceled, "処理がキャンセルされました。";
    /// HTTP 500, gRPC 2
    UNKNOWN => Unknown, "不明なエラーが発生しました。";
    /// HTTP 400, gRPC 3
    INVALID_ARGUMENT => InvalidArgument, "入力値が不正です。";
    /// HTTP 504, gRPC 4
    DEADLINE_EXCEEDED => DeadlineExceeded, "処理がタイムアウトしました。";
    /// HTTP 404, gRPC 5
    NOT_FOUND => NotFound, "存在しないデータへの参照が発生しています。";
    /// HTTP 409, gRPC 6
    ALREADY_EXISTS => AlreadyExists, "データが既に存在します。";
    /// HTTP 403, gRPC 7
    PERMISSION_DENIED => PermissionDenied, "必要な権限がありません。";
    /// HTTP 429, gRPC 8
    RESOURCE_EXHAUSTED => ResourceExhausted, "処理限界を超えています。";
    /// HTTP 400, gRPC 9
    FAILED_PRECONDITION => FailedPrecondition, "必要な条件を満たしていません。";
    /// HTTP 409, gRPC 10
    ABORTED => Aborted, "操作が中断されました。";
    /// HTTP 400, gRPC 11
    OUT_OF_RANGE => OutOfRange, "入力値が有効範囲外です。";
    /// HTTP 501, gRPC 12
    UNIMPLEMENTED => Unimplemented, "サポートされていません。";
    /// HTTP 500, gRPC 13
    INTERNAL => Internal, "システム内部でエラーが発生しました。";
    /// HTTP 503, gRPC 14
    UNAVAILABLE => Unavailable, "システムは現在利用できません。";
    /// HTTP 500, gRPC 15
    DATA_LOSS => DataLoss, "修復不能なデータの欠損が生じました。";
    /// HTTP 401, gRPC 16
    UNAUTHENTICATED => Unauthenticated, "認証できませんでした。";
}

/// Every canonical catalog entry, in code order
pub fn all() -> impl Iterator<Item = &'static Error> {
    Code::CANONICAL.into_iter().filter_map(lookup)
}
