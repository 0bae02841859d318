//! User-facing error descriptions.
//!
//! Call outcomes reach the user as exactly one string, and [`ApiError::describe`]
//! owns that mapping. Connectivity failures get condition-specific guidance
//! while every named rejection resolves to its one canned message; only the
//! unrecognized status/code pair surfaces raw identifiers, for support. The
//! copy itself lives behind [`MessageCatalog`] so product string tables can be
//! swapped in without touching the dispatch; [`EnglishCatalog`] ships as the
//! default.

use std::borrow::Cow;

use crate::error::ApiError;
use crate::transport::TransportError;

/// Symbolic key of one canned message in the string catalog.
///
/// Keys are stable identifiers, not copy: the same key resolves to different
/// text per language. Two keys are templates, [`Internal`](Self::Internal)
/// with an `{error}` placeholder and [`StatusCode`](Self::StatusCode) with
/// `{status}` and `{code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Template for client-side faults; `{error}` receives the debug detail.
    Internal,
    NoConnection,
    CannotReachHost,
    ConnectionTimeout,
    ConnectionLost,
    ServerError,
    /// Template for unrecognized rejections; `{status}` and `{code}` receive
    /// the raw identifiers.
    StatusCode,
    InvalidRequestBody,
    Unauthorized,
    Forbidden,
    NotFound,
    TooManyRequests,
    InvalidRequestData,
    SmsDelivery,
    InvalidCaptcha,
    RequiresCaptcha,
    UpdateRequired,
    InvalidPhoneNumber,
    InsufficientIdentityNumber,
    InvalidInvitationCode,
    InvalidVerificationCode,
    ExpiredVerificationCode,
    InvalidQrCode,
    GroupFull,
    InsufficientBalance,
    PinIncorrect,
    TransferAmountTooSmall,
    ExpiredAuthorizationCode,
    PhoneNumberInUse,
    TooManyApps,
    InsufficientFee,
    TransferAlreadyPaid,
    TooManyStickers,
    WithdrawalAmountTooSmall,
    TooManyFriends,
    VerificationCodeTooFrequent,
    InvalidEmergencyContact,
    WithdrawalMemoFormat,
    SharedAppLimit,
    CircleConversationLimit,
    ConversationChecksum,
    ChainNotInSync,
    MissingPrivateKey,
    MalformedAddress,
    InsufficientPool,
    InvalidParameters,
    InvalidSdp,
    InvalidCandidate,
    RoomFull,
    PeerNotFound,
    PeerClosed,
    TrackNotFound,
}

impl MessageKey {
    /// Stable name of the key, as used in string tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "error_internal",
            Self::NoConnection => "error_no_connection",
            Self::CannotReachHost => "error_cannot_reach_host",
            Self::ConnectionTimeout => "error_connection_timeout",
            Self::ConnectionLost => "error_connection_lost",
            Self::ServerError => "error_server",
            Self::StatusCode => "error_status_code",
            Self::InvalidRequestBody => "error_invalid_request_body",
            Self::Unauthorized => "error_unauthorized",
            Self::Forbidden => "error_forbidden",
            Self::NotFound => "error_not_found",
            Self::TooManyRequests => "error_too_many_requests",
            Self::InvalidRequestData => "error_invalid_request_data",
            Self::SmsDelivery => "error_sms_delivery",
            Self::InvalidCaptcha => "error_invalid_captcha",
            Self::RequiresCaptcha => "error_requires_captcha",
            Self::UpdateRequired => "error_update_required",
            Self::InvalidPhoneNumber => "error_invalid_phone_number",
            Self::InsufficientIdentityNumber => "error_insufficient_identity_number",
            Self::InvalidInvitationCode => "error_invalid_invitation_code",
            Self::InvalidVerificationCode => "error_invalid_verification_code",
            Self::ExpiredVerificationCode => "error_expired_verification_code",
            Self::InvalidQrCode => "error_invalid_qr_code",
            Self::GroupFull => "error_group_full",
            Self::InsufficientBalance => "error_insufficient_balance",
            Self::PinIncorrect => "error_pin_incorrect",
            Self::TransferAmountTooSmall => "error_transfer_amount_too_small",
            Self::ExpiredAuthorizationCode => "error_expired_authorization_code",
            Self::PhoneNumberInUse => "error_phone_number_in_use",
            Self::TooManyApps => "error_too_many_apps",
            Self::InsufficientFee => "error_insufficient_fee",
            Self::TransferAlreadyPaid => "error_transfer_already_paid",
            Self::TooManyStickers => "error_too_many_stickers",
            Self::WithdrawalAmountTooSmall => "error_withdrawal_amount_too_small",
            Self::TooManyFriends => "error_too_many_friends",
            Self::VerificationCodeTooFrequent => "error_verification_code_too_frequent",
            Self::InvalidEmergencyContact => "error_invalid_emergency_contact",
            Self::WithdrawalMemoFormat => "error_withdrawal_memo_format",
            Self::SharedAppLimit => "error_shared_app_limit",
            Self::CircleConversationLimit => "error_circle_conversation_limit",
            Self::ConversationChecksum => "error_conversation_checksum",
            Self::ChainNotInSync => "error_chain_not_in_sync",
            Self::MissingPrivateKey => "error_missing_private_key",
            Self::MalformedAddress => "error_malformed_address",
            Self::InsufficientPool => "error_insufficient_pool",
            Self::InvalidParameters => "error_invalid_parameters",
            Self::InvalidSdp => "error_invalid_sdp",
            Self::InvalidCandidate => "error_invalid_candidate",
            Self::RoomFull => "error_room_full",
            Self::PeerNotFound => "error_peer_not_found",
            Self::PeerClosed => "error_peer_closed",
            Self::TrackNotFound => "error_track_not_found",
        }
    }
}

/// A provider of localized message text.
///
/// Implementations resolve symbolic keys to copy in the end-user's language.
/// Tests can plug in a provider that merely echoes [`MessageKey::as_str`].
pub trait MessageCatalog {
    /// Resolve a key to its message text, templates included unexpanded.
    fn resolve(&self, key: MessageKey) -> Cow<'_, str>;
}

/// The built-in English message catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn resolve(&self, key: MessageKey) -> Cow<'_, str> {
        let text = match key {
            MessageKey::Internal => "Something went wrong. Please try again later. ({error})",
            MessageKey::NoConnection => {
                "No network connection. Please check your connection and try again."
            }
            MessageKey::CannotReachHost => "Unable to reach the server. Please try again later.",
            MessageKey::ConnectionTimeout => {
                "Connection timed out. Please check your network and try again."
            }
            MessageKey::ConnectionLost => "The network connection was lost. Please try again.",
            MessageKey::ServerError => "The server is busy. Please try again later.",
            MessageKey::StatusCode => "Error {status}, code {code}. Please try again later.",
            MessageKey::InvalidRequestBody => "The request was invalid. Please try again.",
            MessageKey::Unauthorized => "Your session has expired. Please sign in again.",
            MessageKey::Forbidden => "You don't have permission to perform this action.",
            MessageKey::NotFound => "The requested content could not be found.",
            MessageKey::TooManyRequests => {
                "Too many requests. Please wait a moment and try again."
            }
            MessageKey::InvalidRequestData => {
                "The submitted data is invalid. Please check it and try again."
            }
            MessageKey::SmsDelivery => {
                "We couldn't deliver the SMS to your phone. Please try again later."
            }
            MessageKey::InvalidCaptcha => "Captcha validation failed. Please try again.",
            MessageKey::RequiresCaptcha => "Please complete the captcha to continue.",
            MessageKey::UpdateRequired => {
                "A new version is available. Please update the app to continue."
            }
            MessageKey::InvalidPhoneNumber => {
                "The phone number is invalid. Please check it and try again."
            }
            MessageKey::InsufficientIdentityNumber => {
                "Your Missive ID does not meet the requirement for this action."
            }
            MessageKey::InvalidInvitationCode => "The invitation code is invalid.",
            MessageKey::InvalidVerificationCode => {
                "The verification code is incorrect. Please check it and try again."
            }
            MessageKey::ExpiredVerificationCode => {
                "The verification code has expired. Please request a new one."
            }
            MessageKey::InvalidQrCode => "The QR code is invalid.",
            MessageKey::GroupFull => "The group chat is full. No more members can join.",
            MessageKey::InsufficientBalance => "Insufficient balance.",
            MessageKey::PinIncorrect => "The PIN you entered is incorrect. Please try again.",
            MessageKey::TransferAmountTooSmall => "The transfer amount is too small.",
            MessageKey::ExpiredAuthorizationCode => {
                "The authorization code has expired. Please try again."
            }
            MessageKey::PhoneNumberInUse => {
                "This phone number is already linked to another account."
            }
            MessageKey::TooManyApps => "You have created too many apps.",
            MessageKey::InsufficientFee => "The fee is insufficient to process this transaction.",
            MessageKey::TransferAlreadyPaid => "This transfer has already been paid.",
            MessageKey::TooManyStickers => "You have added too many stickers.",
            MessageKey::WithdrawalAmountTooSmall => "The withdrawal amount is too small.",
            MessageKey::TooManyFriends => "You have reached the maximum number of contacts.",
            MessageKey::VerificationCodeTooFrequent => {
                "You are requesting verification codes too frequently. Please wait before trying again."
            }
            MessageKey::InvalidEmergencyContact => "The emergency contact is invalid.",
            MessageKey::WithdrawalMemoFormat => "The withdrawal memo format is incorrect.",
            MessageKey::SharedAppLimit => "You can't share more apps on your profile.",
            MessageKey::CircleConversationLimit => {
                "This circle has reached its conversation limit."
            }
            MessageKey::ConversationChecksum => "The group members changed. Please try again.",
            MessageKey::ChainNotInSync => "The blockchain is syncing. Please try again later.",
            MessageKey::MissingPrivateKey => "The private key is missing.",
            MessageKey::MalformedAddress => {
                "The address format is invalid. Please check it and try again."
            }
            MessageKey::InsufficientPool => {
                "The pool has insufficient funds. Please try again later."
            }
            MessageKey::InvalidParameters => "Invalid call parameters.",
            MessageKey::InvalidSdp => "Invalid session description.",
            MessageKey::InvalidCandidate => "Invalid network candidate.",
            MessageKey::RoomFull => "The call is full. No more participants can join.",
            MessageKey::PeerNotFound => "The participant could not be found in this call.",
            MessageKey::PeerClosed => "The participant's connection was closed.",
            MessageKey::TrackNotFound => "The media track could not be found.",
        };
        Cow::Borrowed(text)
    }
}

impl ApiError {
    /// Produce the one user-facing message for this failure.
    ///
    /// Pure and synchronous; safe to call from any thread. Recognized
    /// transport conditions and named rejections resolve through the catalog,
    /// unrecognized transport failures pass their own description through
    /// verbatim, and unrecognized remote rejections surface their raw
    /// status/code pair for support.
    pub fn describe<C>(&self, catalog: &C) -> String
    where
        C: MessageCatalog + ?Sized,
    {
        match self {
            Self::EmptyResponse | Self::PrerequisitesNotFulfilled | Self::InvalidJson(_) => {
                catalog
                    .resolve(MessageKey::Internal)
                    .replace("{error}", &format!("{self:?}"))
            }

            Self::Transport(signal) => describe_transport(signal, catalog),

            // Realtime timeouts and clock skew share the timeout copy.
            Self::WebSocketTimeout | Self::ClockSkewDetected => {
                canned(catalog, MessageKey::ConnectionTimeout)
            }

            Self::Unknown { status, code } => catalog
                .resolve(MessageKey::StatusCode)
                .replace("{status}", &status.to_string())
                .replace("{code}", &code.to_string()),

            Self::InvalidRequestBody => canned(catalog, MessageKey::InvalidRequestBody),
            Self::Unauthorized => canned(catalog, MessageKey::Unauthorized),
            Self::Forbidden => canned(catalog, MessageKey::Forbidden),
            Self::NotFound => canned(catalog, MessageKey::NotFound),
            Self::TooManyRequests => canned(catalog, MessageKey::TooManyRequests),

            Self::InternalServerError
            | Self::GatewayServerError
            | Self::GatewayOperationTimedOut => {
                canned(catalog, MessageKey::ServerError)
            }

            Self::InvalidRequestData => canned(catalog, MessageKey::InvalidRequestData),
            Self::FailedToDeliverSms => canned(catalog, MessageKey::SmsDelivery),
            Self::InvalidCaptcha => canned(catalog, MessageKey::InvalidCaptcha),
            Self::RequiresCaptcha => canned(catalog, MessageKey::RequiresCaptcha),
            Self::RequiresUpdate => canned(catalog, MessageKey::UpdateRequired),
            Self::InvalidPhoneNumber => canned(catalog, MessageKey::InvalidPhoneNumber),
            Self::InsufficientIdentityNumber => {
                canned(catalog, MessageKey::InsufficientIdentityNumber)
            }
            Self::InvalidInvitationCode => canned(catalog, MessageKey::InvalidInvitationCode),
            Self::InvalidPhoneVerificationCode => {
                canned(catalog, MessageKey::InvalidVerificationCode)
            }
            Self::ExpiredPhoneVerificationCode => {
                canned(catalog, MessageKey::ExpiredVerificationCode)
            }
            Self::InvalidQrCode => canned(catalog, MessageKey::InvalidQrCode),
            Self::GroupChatFull => canned(catalog, MessageKey::GroupFull),
            Self::InsufficientBalance => canned(catalog, MessageKey::InsufficientBalance),
            Self::MalformedPin | Self::IncorrectPin => canned(catalog, MessageKey::PinIncorrect),
            Self::TransferAmountTooSmall => canned(catalog, MessageKey::TransferAmountTooSmall),
            Self::ExpiredAuthorizationCode => {
                canned(catalog, MessageKey::ExpiredAuthorizationCode)
            }
            Self::PhoneNumberInUse => canned(catalog, MessageKey::PhoneNumberInUse),
            Self::TooManyAppsCreated => canned(catalog, MessageKey::TooManyApps),
            Self::InsufficientFee => canned(catalog, MessageKey::InsufficientFee),
            Self::TransferAlreadyPaid => canned(catalog, MessageKey::TransferAlreadyPaid),
            Self::TooManyStickers => canned(catalog, MessageKey::TooManyStickers),
            Self::WithdrawalAmountTooSmall => {
                canned(catalog, MessageKey::WithdrawalAmountTooSmall)
            }
            Self::TooManyFriends => canned(catalog, MessageKey::TooManyFriends),
            Self::VerificationCodeTooFrequent => {
                canned(catalog, MessageKey::VerificationCodeTooFrequent)
            }
            Self::InvalidEmergencyContact => canned(catalog, MessageKey::InvalidEmergencyContact),
            Self::MalformedWithdrawalMemo => canned(catalog, MessageKey::WithdrawalMemoFormat),
            Self::SharedAppLimitReached => canned(catalog, MessageKey::SharedAppLimit),
            Self::CircleConversationLimitReached => {
                canned(catalog, MessageKey::CircleConversationLimit)
            }
            Self::InvalidConversationChecksum => canned(catalog, MessageKey::ConversationChecksum),

            Self::ChainNotInSync => canned(catalog, MessageKey::ChainNotInSync),
            Self::MissingPrivateKey => canned(catalog, MessageKey::MissingPrivateKey),
            Self::MalformedAddress => canned(catalog, MessageKey::MalformedAddress),
            Self::InsufficientPool => canned(catalog, MessageKey::InsufficientPool),

            Self::InvalidParameters => canned(catalog, MessageKey::InvalidParameters),
            Self::InvalidSdp => canned(catalog, MessageKey::InvalidSdp),
            Self::InvalidCandidate => canned(catalog, MessageKey::InvalidCandidate),
            Self::RoomFull => canned(catalog, MessageKey::RoomFull),
            Self::PeerNotFound => canned(catalog, MessageKey::PeerNotFound),
            Self::PeerClosed => canned(catalog, MessageKey::PeerClosed),
            Self::TrackNotFound => canned(catalog, MessageKey::TrackNotFound),
        }
    }

    /// Same as [`describe`](Self::describe), but a caller that knows a more
    /// specific noun can replace the generic not-found copy. Every other
    /// variant ignores the override.
    pub fn describe_overriding_not_found<C>(&self, catalog: &C, not_found_message: &str) -> String
    where
        C: MessageCatalog + ?Sized,
    {
        match self {
            Self::NotFound => not_found_message.to_string(),
            _ => self.describe(catalog),
        }
    }
}

fn canned<C>(catalog: &C, key: MessageKey) -> String
where
    C: MessageCatalog + ?Sized,
{
    catalog.resolve(key).into_owned()
}

fn describe_transport<C>(signal: &TransportError, catalog: &C) -> String
where
    C: MessageCatalog + ?Sized,
{
    match (signal.domain(), signal.code()) {
        (TransportError::CONNECTIVITY_DOMAIN, TransportError::NOT_CONNECTED) => {
            canned(catalog, MessageKey::NoConnection)
        }
        (TransportError::CONNECTIVITY_DOMAIN, TransportError::CANNOT_REACH_HOST) => {
            canned(catalog, MessageKey::CannotReachHost)
        }
        (TransportError::CONNECTIVITY_DOMAIN, TransportError::TIMED_OUT) => {
            canned(catalog, MessageKey::ConnectionTimeout)
        }
        (TransportError::CONNECTIVITY_DOMAIN, TransportError::CONNECTION_LOST) => {
            canned(catalog, MessageKey::ConnectionLost)
        }
        (TransportError::VALIDATION_DOMAIN, _) => canned(catalog, MessageKey::ServerError),
        _ => signal.description().to_string(),
    }
}
