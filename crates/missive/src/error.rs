//! The remote-call failure taxonomy.

use crate::transport::TransportError;

/// Every way a Missive API call can fail.
///
/// Exactly one variant is active per failure; the RPC layer constructs the
/// value once and hands it to the caller, which typically either retries
/// (see [`worth_retrying`](Self::worth_retrying)) or surfaces it through
/// [`describe`](Self::describe).
///
/// The `Display` impl carries terse developer-facing text for logs. User-facing
/// copy comes exclusively from [`describe`](Self::describe), which resolves
/// messages through a [`MessageCatalog`](crate::MessageCatalog).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The response envelope carried neither data nor an error.
    #[error("response carried no data")]
    EmptyResponse,

    /// Local state required to issue the call was missing, e.g. an
    /// authenticated endpoint was hit on a token-less client.
    #[error("prerequisites for the call are not fulfilled")]
    PrerequisitesNotFulfilled,

    /// The response body failed to decode.
    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The exchange failed below the API layer; the wrapped signal says how.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// A realtime-channel request got no reply in time.
    #[error("websocket request timed out")]
    WebSocketTimeout,

    /// The local clock diverges from server time beyond tolerance.
    #[error("local clock out of sync with server")]
    ClockSkewDetected,

    /// A remote rejection outside the named set below.
    #[error("unrecognized remote error (status {status}, code {code})")]
    Unknown { status: i64, code: i64 },

    #[error("invalid request body")]
    InvalidRequestBody,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("too many requests")]
    TooManyRequests,

    #[error("internal server error")]
    InternalServerError,
    /// The realtime gateway rejected the operation.
    #[error("gateway server error")]
    GatewayServerError,
    #[error("gateway operation timed out")]
    GatewayOperationTimedOut,

    #[error("invalid request data")]
    InvalidRequestData,
    #[error("failed to deliver SMS")]
    FailedToDeliverSms,
    #[error("invalid captcha")]
    InvalidCaptcha,
    #[error("captcha required")]
    RequiresCaptcha,
    /// The client build is too old for the API.
    #[error("client update required")]
    RequiresUpdate,
    #[error("invalid phone number")]
    InvalidPhoneNumber,
    /// The account's numeric Missive ID does not meet the requirement.
    #[error("insufficient identity number")]
    InsufficientIdentityNumber,
    #[error("invalid invitation code")]
    InvalidInvitationCode,
    #[error("invalid phone verification code")]
    InvalidPhoneVerificationCode,
    #[error("expired phone verification code")]
    ExpiredPhoneVerificationCode,
    #[error("invalid QR code")]
    InvalidQrCode,
    #[error("group chat is full")]
    GroupChatFull,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("malformed PIN")]
    MalformedPin,
    #[error("incorrect PIN")]
    IncorrectPin,
    #[error("transfer amount too small")]
    TransferAmountTooSmall,
    #[error("expired authorization code")]
    ExpiredAuthorizationCode,
    #[error("phone number already in use")]
    PhoneNumberInUse,
    #[error("too many apps created")]
    TooManyAppsCreated,
    #[error("insufficient fee")]
    InsufficientFee,
    #[error("transfer already paid")]
    TransferAlreadyPaid,
    #[error("too many stickers")]
    TooManyStickers,
    #[error("withdrawal amount too small")]
    WithdrawalAmountTooSmall,
    #[error("too many friends")]
    TooManyFriends,
    #[error("verification code requested too frequently")]
    VerificationCodeTooFrequent,
    #[error("invalid emergency contact")]
    InvalidEmergencyContact,
    #[error("malformed withdrawal memo")]
    MalformedWithdrawalMemo,
    #[error("shared app limit reached")]
    SharedAppLimitReached,
    #[error("circle conversation limit reached")]
    CircleConversationLimitReached,
    /// The participant list sent with the request no longer matches the
    /// conversation's server-side state.
    #[error("invalid conversation checksum")]
    InvalidConversationChecksum,

    #[error("blockchain not in sync")]
    ChainNotInSync,
    #[error("missing private key")]
    MissingPrivateKey,
    #[error("malformed address")]
    MalformedAddress,
    /// The asset pool cannot cover the withdrawal right now.
    #[error("insufficient pool")]
    InsufficientPool,

    #[error("invalid call parameters")]
    InvalidParameters,
    #[error("invalid SDP")]
    InvalidSdp,
    #[error("invalid ICE candidate")]
    InvalidCandidate,
    #[error("call room is full")]
    RoomFull,
    #[error("peer not found")]
    PeerNotFound,
    #[error("peer connection closed")]
    PeerClosed,
    #[error("media track not found")]
    TrackNotFound,
}

impl ApiError {
    /// Map the numeric pair from a remote error envelope to a named variant.
    ///
    /// The mapping is total: every unlisted code folds into
    /// [`Unknown`](Self::Unknown) with both identifiers preserved.
    pub fn from_remote(status: i64, code: i64) -> Self {
        match code {
            400 => Self::InvalidRequestBody,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            7000 => Self::GatewayServerError,
            7001 => Self::GatewayOperationTimedOut,
            10002 => Self::InvalidRequestData,
            10003 => Self::FailedToDeliverSms,
            10004 => Self::InvalidCaptcha,
            10005 => Self::RequiresCaptcha,
            10006 => Self::RequiresUpdate,
            20110 => Self::InsufficientIdentityNumber,
            20111 => Self::InvalidInvitationCode,
            20112 => Self::InvalidQrCode,
            20113 => Self::InvalidPhoneNumber,
            20114 => Self::InvalidPhoneVerificationCode,
            20115 => Self::ExpiredPhoneVerificationCode,
            20116 => Self::GroupChatFull,
            20117 => Self::InsufficientBalance,
            20118 => Self::MalformedPin,
            20119 => Self::IncorrectPin,
            20120 => Self::TransferAmountTooSmall,
            20121 => Self::ExpiredAuthorizationCode,
            20122 => Self::PhoneNumberInUse,
            20123 => Self::TooManyAppsCreated,
            20124 => Self::InsufficientFee,
            20125 => Self::TransferAlreadyPaid,
            20126 => Self::TooManyStickers,
            20127 => Self::WithdrawalAmountTooSmall,
            20128 => Self::TooManyFriends,
            20129 => Self::VerificationCodeTooFrequent,
            20130 => Self::InvalidEmergencyContact,
            20131 => Self::MalformedWithdrawalMemo,
            20132 => Self::SharedAppLimitReached,
            20133 => Self::CircleConversationLimitReached,
            20140 => Self::InvalidConversationChecksum,
            30100 => Self::ChainNotInSync,
            30101 => Self::MissingPrivateKey,
            30102 => Self::MalformedAddress,
            30103 => Self::InsufficientPool,
            5_001_001 => Self::InvalidParameters,
            5_001_002 => Self::InvalidSdp,
            5_001_003 => Self::InvalidCandidate,
            5_002_001 => Self::RoomFull,
            5_002_002 => Self::PeerNotFound,
            5_002_003 => Self::PeerClosed,
            5_002_004 => Self::TrackNotFound,
            _ => Self::Unknown { status, code },
        }
    }

    /// Whether a retry at a higher layer has a chance of succeeding.
    ///
    /// True for connectivity-domain transport failures, realtime timeouts,
    /// clock skew and the server tier; false for everything that needs a
    /// change on the caller's side first.
    pub fn worth_retrying(&self) -> bool {
        match self {
            Self::Transport(signal) => signal.domain() == TransportError::CONNECTIVITY_DOMAIN,
            Self::WebSocketTimeout
            | Self::ClockSkewDetected
            | Self::InternalServerError
            | Self::GatewayServerError
            | Self::GatewayOperationTimedOut => true,
            _ => false,
        }
    }
}
